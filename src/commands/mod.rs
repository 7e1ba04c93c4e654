mod context;
pub mod evaluate;
pub mod range;
pub mod validate;

pub use context::{color_choice_to_mode, load_collection, read_input, write_output};
pub use evaluate::{evaluate_changes, run_evaluate};
pub use range::{plan_range, run_range};
pub use validate::{run_validate, run_validate_impl};
