//! The fully computed dashboard content.

use crate::fixtures::Fixtures;
use crate::patient::Patient;
use crate::recommendations::{self, Recommendation};
use crate::vitals::VitalsSeries;

/// Everything the page shows, computed once at startup and read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Dashboard {
    pub patient: Patient,
    pub vitals: VitalsSeries,
    pub recommendations: Vec<Recommendation>,
    pub key_features: Vec<&'static str>,
}

impl Dashboard {
    /// Run the matcher over the fixture patient and freeze the result.
    pub fn new(fixtures: Fixtures) -> Self {
        let Fixtures { patient, vitals } = fixtures;
        let recommendations = recommendations::recommend(&patient);
        let key_features = recommendations::key_features(&patient);

        tracing::info!(
            "dashboard ready: {} finding(s), {} vitals point(s), {} recommendation(s)",
            patient.genomic.len(),
            vitals.len(),
            recommendations.len()
        );

        Self {
            patient,
            vitals,
            recommendations,
            key_features,
        }
    }

    pub fn explainability_note(&self) -> String {
        recommendations::explainability_note(&self.key_features)
    }
}
