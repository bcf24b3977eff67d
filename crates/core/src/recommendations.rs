//! Rule-based recommendation matcher.
//!
//! The matcher walks a fixed rule table in order. Each gene rule fires at most once, when its
//! trigger gene appears anywhere in the patient's findings; the tumor board review is appended
//! unconditionally as the final entry. Confidences are constants of the rules, never derived from
//! patient data, and output is not sorted by confidence.
//!
//! The same table drives the explainability note, so the key features shown on the dashboard are
//! exactly those of the rules that fired.

use crate::constants::{BRCA1, PIK3CA};
use crate::patient::Patient;
use pmp_types::Confidence;
use std::collections::HashSet;

/// A titled suggestion with rationale and a fixed confidence score.
#[derive(Clone, Debug, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub rationale: String,
    pub confidence: Confidence,
}

struct GeneRule {
    gene: &'static str,
    title: &'static str,
    rationale: &'static str,
    confidence: Confidence,
    key_feature: &'static str,
}

impl GeneRule {
    fn recommendation(&self) -> Recommendation {
        Recommendation {
            title: self.title.to_string(),
            rationale: self.rationale.to_string(),
            confidence: self.confidence,
        }
    }
}

static GENE_RULES: [GeneRule; 2] = [
    GeneRule {
        gene: BRCA1,
        title: "Consider PARP inhibitor",
        rationale: "BRCA1 pathogenic variant — targeted therapy sensitivity",
        confidence: Confidence::from_const(0.87),
        key_feature: "BRCA1 pathogenic",
    },
    GeneRule {
        gene: PIK3CA,
        title: "PI3K inhibitor trial",
        rationale: "PIK3CA mutation — eligible for targeted trials",
        confidence: Confidence::from_const(0.76),
        key_feature: "PIK3CA mutation",
    },
];

const TUMOR_BOARD_TITLE: &str = "Multidisciplinary tumor board review";
const TUMOR_BOARD_RATIONALE: &str =
    "Integrate pathology, radiology, genomics and patient preferences";
const TUMOR_BOARD_CONFIDENCE: Confidence = Confidence::from_const(0.95);

/// Feature always listed last in the explainability note.
const TUMOR_GRADE_FEATURE: &str = "tumor grade";

fn fired_rules(patient: &Patient) -> impl Iterator<Item = &'static GeneRule> + '_ {
    let genes: HashSet<&str> = patient.gene_symbols().collect();
    GENE_RULES.iter().filter(move |rule| genes.contains(rule.gene))
}

/// Produce the ordered recommendations for `patient`.
///
/// The result holds between one and three entries: the BRCA1 rule if it fired, then the PIK3CA
/// rule if it fired, then the tumor board review. Unknown genes and duplicate findings are
/// ignored. The function is pure, so repeated calls return identical output.
pub fn recommend(patient: &Patient) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = fired_rules(patient)
        .inspect(|rule| tracing::debug!("rule fired for gene {}", rule.gene))
        .map(GeneRule::recommendation)
        .collect();

    recommendations.push(Recommendation {
        title: TUMOR_BOARD_TITLE.to_string(),
        rationale: TUMOR_BOARD_RATIONALE.to_string(),
        confidence: TUMOR_BOARD_CONFIDENCE,
    });

    recommendations
}

/// Key features behind the recommendations for `patient`, in rule order.
pub fn key_features(patient: &Patient) -> Vec<&'static str> {
    fired_rules(patient)
        .map(|rule| rule.key_feature)
        .chain(std::iter::once(TUMOR_GRADE_FEATURE))
        .collect()
}

/// Format the explainability note shown under the recommendations.
pub fn explainability_note(features: &[&str]) -> String {
    format!("Explainability: Key features — {}.", features.join(", "))
}
