//! Classification-evaluation helpers: confusion matrices, accuracy, and
//! per-class rates over aligned predicted/actual label sequences.

mod error;
mod labels;
mod metrics;
mod report;

pub use error::EvalError;
pub use labels::{threshold_labels, LabelIndex};
pub use metrics::{accuracy, confusion_matrix, ConfusionMatrix};
pub use report::{classification_report, EvaluationReport};
