mod edge;
mod input;
mod types;

pub use edge::{
    Comparison, ComparisonStrategy, EmptyCommitBehavior, ForcePushStrategy, PushEvent, ZERO_SHA,
    is_empty_commit, is_first_commit, is_force_push, plan_push_comparison,
};
pub use input::{read_changed_files, read_push_event};
pub use types::{ChangedFile, FileStatus};
