use crate::error::EvalError;
use crate::labels::LabelIndex;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Predicted-versus-actual label counts for one evaluation run.
///
/// Rows hold predicted labels and columns actual labels, both in the
/// canonical order of the embedded [`LabelIndex`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix<L: Eq + Hash> {
    /// Count of samples per (predicted, actual) label pair.
    counts: Box<[Box<[usize]>]>,
    /// Canonical row/column ordering.
    labels: LabelIndex<L>,
}

impl<L: Eq + Hash> ConfusionMatrix<L> {
    /// Prediction accuracy derived from the matrix trace.
    pub fn accuracy(&self) -> Result<f64, EvalError> {
        let total_samples = self.total();
        if total_samples == 0 {
            return Err(EvalError::DegenerateInput);
        }
        let total_correct: usize = self.counts.iter().enumerate().map(|(i, row)| row[i]).sum();
        Ok(total_correct as f64 / total_samples as f64)
    }

    /// Share of predictions of `label` that were correct, or 0.0 if the
    /// label was never predicted.
    pub fn precision(&self, label: &L) -> Option<f64> {
        let class = self.labels.position(label)?;
        let predicted_as: usize = self.counts[class].iter().sum();
        if predicted_as == 0 {
            return Some(0.0);
        }
        Some(self.counts[class][class] as f64 / predicted_as as f64)
    }

    /// Share of actual `label` samples the predictions caught, or 0.0 if the
    /// label never occurs as ground truth.
    pub fn recall(&self, label: &L) -> Option<f64> {
        let class = self.labels.position(label)?;
        let actually: usize = self.counts.iter().map(|row| row[class]).sum();
        if actually == 0 {
            return Some(0.0);
        }
        Some(self.counts[class][class] as f64 / actually as f64)
    }

    /// Count of samples predicted as `predicted` whose true label is `actual`.
    pub fn count(&self, predicted: &L, actual: &L) -> Option<usize> {
        let row = self.labels.position(predicted)?;
        let col = self.labels.position(actual)?;
        Some(self.counts[row][col])
    }

    /// Total number of samples tallied in the matrix.
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    /// The number of distinct labels (matrix dimension).
    pub fn n_classes(&self) -> usize {
        self.labels.len()
    }

    /// The canonical row/column ordering.
    pub fn label_index(&self) -> &LabelIndex<L> {
        &self.labels
    }

    /// Labels in canonical order.
    pub fn labels(&self) -> indexmap::set::Iter<'_, L> {
        self.labels.iter()
    }

    /// Counts row for a canonical row position.
    pub fn row(&self, index: usize) -> Option<&[usize]> {
        self.counts.get(index).map(|row| &**row)
    }
}

/// Compute the confusion matrix from a list of predicted and actual labels.
pub fn confusion_matrix<L>(predicted: &[L], actual: &[L]) -> Result<ConfusionMatrix<L>, EvalError>
where
    L: Clone + Eq + Hash + Ord,
{
    if predicted.len() != actual.len() {
        return Err(EvalError::LengthMismatch {
            predicted: predicted.len(),
            actual: actual.len(),
        });
    }

    let labels = LabelIndex::from_pair(predicted, actual);
    let classes = labels.len();
    let mut counts = vec![vec![0usize; classes].into_boxed_slice(); classes].into_boxed_slice();

    for (p, a) in predicted.iter().zip(actual.iter()) {
        let row = labels.position(p).unwrap();
        let col = labels.position(a).unwrap();
        counts[row][col] += 1;
    }

    Ok(ConfusionMatrix { counts, labels })
}

/// Compute prediction accuracy directly from aligned label sequences.
pub fn accuracy<L: PartialEq>(predicted: &[L], actual: &[L]) -> Result<f64, EvalError> {
    if predicted.len() != actual.len() {
        return Err(EvalError::LengthMismatch {
            predicted: predicted.len(),
            actual: actual.len(),
        });
    }
    if predicted.is_empty() {
        return Err(EvalError::DegenerateInput);
    }

    let correct = predicted
        .iter()
        .zip(actual.iter())
        .filter(|(p, a)| p == a)
        .count();
    Ok(correct as f64 / predicted.len() as f64)
}
