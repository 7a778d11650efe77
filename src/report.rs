use crate::error::EvalError;
use crate::metrics::confusion_matrix;
use indexmap::IndexMap;
use serde::{de::Error, Deserialize, Serialize};
use std::fmt::Display;
use std::hash::Hash;
use std::io::Read;

/// Named metric values for one model evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Name of the evaluated model.
    pub model_name: String,
    /// Metric values, in insertion order.
    metrics: IndexMap<String, f64>,
}

impl EvaluationReport {
    pub fn new(model_name: &str) -> Self {
        Self {
            model_name: model_name.into(),
            metrics: IndexMap::new(),
        }
    }

    /// Records a metric value under the given name.
    pub fn insert(&mut self, name: &str, value: f64) {
        self.metrics.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }

    /// Metric names and values, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, f64> {
        self.metrics.iter()
    }

    /// Loads a report from a file.
    pub fn load_from_file(file: &mut dyn Read) -> Result<Self, serde_json::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)
            .map_err(serde_json::Error::custom)?;
        serde_json::from_str(&buffer)
    }

    /// Saves a report to a file.
    pub fn save_to_file(&self, file: &mut dyn std::io::Write) -> Result<(), serde_json::Error> {
        let serialized = serde_json::to_string(self)?;
        file.write_all(serialized.as_bytes())
            .map_err(serde_json::Error::custom)
    }
}

/// Evaluates a prediction run and bundles accuracy plus per-class rates
/// into a report keyed by metric name.
pub fn classification_report<L>(
    predicted: &[L],
    actual: &[L],
    model_name: &str,
) -> Result<EvaluationReport, EvalError>
where
    L: Clone + Eq + Hash + Ord + Display,
{
    let matrix = confusion_matrix(predicted, actual)?;
    let mut report = EvaluationReport::new(model_name);
    report.insert("accuracy", matrix.accuracy()?);

    // Every indexed label has both rates
    for label in matrix.labels() {
        report.insert(
            &format!("precision_{label}"),
            matrix.precision(label).unwrap_or(0.0),
        );
        report.insert(
            &format!("recall_{label}"),
            matrix.recall(label).unwrap_or(0.0),
        );
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_for_known_scenario() {
        let predicted = [0, 1, 1, 0, 1];
        let actual = [0, 1, 0, 0, 1];
        let report = classification_report(&predicted, &actual, "test-model").unwrap();

        assert_eq!(report.model_name, "test-model");
        assert!((report.get("accuracy").unwrap() - 0.8).abs() < 1e-12);
        assert!((report.get("precision_0").unwrap() - 1.0).abs() < 1e-12);
        assert!((report.get("recall_0").unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert!((report.get("precision_1").unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert!((report.get("recall_1").unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn metric_order_follows_canonical_labels() {
        let predicted = [2, 0, 1];
        let actual = [2, 0, 1];
        let report = classification_report(&predicted, &actual, "m").unwrap();
        let names: Vec<&str> = report.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "accuracy",
                "precision_0",
                "recall_0",
                "precision_1",
                "recall_1",
                "precision_2",
                "recall_2",
            ]
        );
    }

    #[test]
    fn report_errors_propagate() {
        assert_eq!(
            classification_report(&[0, 1], &[0], "m").unwrap_err(),
            EvalError::LengthMismatch {
                predicted: 2,
                actual: 1
            }
        );
        let empty: [u8; 0] = [];
        assert_eq!(
            classification_report(&empty, &empty, "m").unwrap_err(),
            EvalError::DegenerateInput
        );
    }

    #[test]
    fn report_roundtrips_through_json() {
        let predicted = ["spam", "ham", "ham"];
        let actual = ["spam", "spam", "ham"];
        let report = classification_report(&predicted, &actual, "nb").unwrap();

        let mut buffer = Vec::new();
        report.save_to_file(&mut buffer).unwrap();
        let mut cursor = std::io::Cursor::new(buffer);
        let restored = EvaluationReport::load_from_file(&mut cursor).unwrap();

        assert_eq!(restored, report);
    }
}
