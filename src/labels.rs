use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// The canonical index over the distinct labels of an evaluation run.
///
/// Rows and columns of a confusion matrix are both addressed through this
/// index. Ordering is the ascending natural order of the label type, so the
/// same inputs always produce the same index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelIndex<L: Eq + Hash> {
    /// The distinct labels, kept in canonical order.
    set: IndexSet<L>,
}

impl<L: Clone + Eq + Hash + Ord> LabelIndex<L> {
    /// Builds the index from the union of two label sequences.
    pub fn from_pair(predicted: &[L], actual: &[L]) -> Self {
        let mut set: IndexSet<L> = predicted.iter().chain(actual.iter()).cloned().collect();
        set.sort_unstable();
        Self { set }
    }
}

impl<L: Eq + Hash> LabelIndex<L> {
    /// Position of a label in canonical order.
    pub fn position(&self, label: &L) -> Option<usize> {
        self.set.get_index_of(label)
    }

    /// Label stored at the given canonical position.
    pub fn get(&self, index: usize) -> Option<&L> {
        self.set.get_index(index)
    }

    /// Labels in canonical order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, L> {
        self.set.iter()
    }

    /// The number of distinct labels.
    #[inline]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

/// Collapses per-sample probability scores into binary labels.
///
/// A score equal to the cutoff counts as the positive class.
pub fn threshold_labels(scores: &[f64], cutoff: f64) -> Vec<usize> {
    scores.iter().map(|&s| usize::from(s >= cutoff)).collect()
}
