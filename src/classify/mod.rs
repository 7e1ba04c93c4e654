//! Area classification and per-area constraint evaluation.

mod classifier;
mod constraint;
mod trace;

pub use classifier::{
    AreaClassifier, Classification, Classified, CompiledArea, Exclusion, Tracer, classify,
    classify_all,
};
pub use constraint::{AreaResult, AreaResults, empty_commit_results, evaluate, evaluate_all};
pub use trace::{TraceSink, TracingSink};
