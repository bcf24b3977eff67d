//! The vitals (treatment response) series plotted on the dashboard.

use crate::{CoreError, CoreResult};

/// One observation: a free-text time label and its response score.
#[derive(Clone, Debug, PartialEq)]
pub struct VitalsPoint {
    pub label: String,
    pub score: f64,
}

/// Ordered sequence of response scores. Labels are display text, not timestamps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VitalsSeries {
    points: Vec<VitalsPoint>,
}

impl VitalsSeries {
    pub fn new(points: Vec<VitalsPoint>) -> Self {
        Self { points }
    }

    /// Build a series from parallel label and score columns.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::VitalsLengthMismatch` if the columns differ in length, and
    /// `CoreError::InvalidInput` if any score is NaN or infinite.
    pub fn from_columns(labels: Vec<String>, scores: Vec<f64>) -> CoreResult<Self> {
        if labels.len() != scores.len() {
            return Err(CoreError::VitalsLengthMismatch {
                labels: labels.len(),
                scores: scores.len(),
            });
        }

        if let Some((label, score)) = labels
            .iter()
            .zip(&scores)
            .find(|(_, score)| !score.is_finite())
        {
            return Err(CoreError::InvalidInput(format!(
                "vitals score for '{label}' must be finite, got {score}"
            )));
        }

        let points = labels
            .into_iter()
            .zip(scores)
            .map(|(label, score)| VitalsPoint { label, score })
            .collect();

        Ok(Self { points })
    }

    pub fn points(&self) -> &[VitalsPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|p| p.label.as_str())
    }

    pub fn scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.score)
    }
}
