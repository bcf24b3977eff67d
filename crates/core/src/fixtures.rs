//! Dashboard fixtures: the built-in demo data and YAML fixture files.
//!
//! The built-in fixtures are the mock patient and five-point response series the dashboard shows
//! by default. A YAML file may replace them at startup; it is parsed through a strict wire model
//! (unknown keys rejected, required text non-empty) and then translated into domain values.

use crate::patient::{GenomicFinding, Patient, Sex};
use crate::vitals::{VitalsPoint, VitalsSeries};
use crate::{CoreError, CoreResult};
use pmp_types::NonEmptyText;
use serde::Deserialize;
use std::path::Path;

/// The immutable data one dashboard run is built from.
#[derive(Clone, Debug, PartialEq)]
pub struct Fixtures {
    pub patient: Patient,
    pub vitals: VitalsSeries,
}

impl Fixtures {
    /// The built-in demo patient and response series.
    pub fn stock() -> Self {
        Self {
            patient: stock_patient(),
            vitals: stock_vitals(),
        }
    }

    /// Parse fixtures from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::FixtureParse` for malformed YAML, unknown keys or empty required
    /// text, `CoreError::VitalsLengthMismatch` if the vitals columns differ in length, and
    /// `CoreError::InvalidInput` for NaN or infinite scores.
    pub fn from_yaml(input: &str) -> CoreResult<Self> {
        let wire: FixtureWire = serde_yaml::from_str(input).map_err(CoreError::FixtureParse)?;
        wire.into_domain()
    }

    /// Read and parse a YAML fixture file.
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(CoreError::FixtureRead)?;
        Self::from_yaml(&contents)
    }

    /// Load the fixture file if one is configured, otherwise the built-in fixtures.
    pub fn resolve(fixture_file: Option<&Path>) -> CoreResult<Self> {
        match fixture_file {
            Some(path) => {
                tracing::info!("loading fixtures from {}", path.display());
                Self::from_file(path)
            }
            None => {
                tracing::info!("using built-in fixtures");
                Ok(Self::stock())
            }
        }
    }
}

fn stock_patient() -> Patient {
    Patient {
        name: "Asha Patel".into(),
        id: "PT-2025-0012".into(),
        age: 46,
        sex: Sex::Female,
        summary: "Stage II breast cancer. ER+/HER2-. Prior chemo: none.".into(),
        photo_url: "https://via.placeholder.com/400x300.png?text=Patient+Profile".into(),
        genomic: vec![
            GenomicFinding::new("BRCA1", "c.68_69delAG", "Pathogenic"),
            GenomicFinding::new("PIK3CA", "p.H1047R", "Likely pathogenic"),
        ],
    }
}

fn stock_vitals() -> VitalsSeries {
    let points = [
        ("Day 0", 72.0),
        ("Week 1", 68.0),
        ("Week 2", 75.0),
        ("Week 3", 78.0),
        ("Week 4", 82.0),
    ]
    .into_iter()
    .map(|(label, score)| VitalsPoint {
        label: label.to_string(),
        score,
    })
    .collect();

    VitalsSeries::new(points)
}

// ============================================================================
// Wire model
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FixtureWire {
    patient: PatientWire,
    vitals: VitalsWire,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PatientWire {
    name: NonEmptyText,
    id: NonEmptyText,
    age: u32,
    sex: NonEmptyText,
    #[serde(default)]
    photo: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    genomic: Vec<FindingWire>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FindingWire {
    gene: NonEmptyText,
    variant: String,
    significance: String,
}

/// Parallel columns, as the series is authored.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct VitalsWire {
    time: Vec<String>,
    score: Vec<f64>,
}

impl FixtureWire {
    fn into_domain(self) -> CoreResult<Fixtures> {
        let p = self.patient;
        let patient = Patient {
            name: p.name.to_string(),
            id: p.id.to_string(),
            age: p.age,
            sex: Sex::from_code(p.sex.as_str()),
            summary: p.summary,
            photo_url: p.photo,
            genomic: p
                .genomic
                .into_iter()
                .map(|g| GenomicFinding::new(g.gene.as_str(), g.variant, g.significance))
                .collect(),
        };

        let vitals = VitalsSeries::from_columns(self.vitals.time, self.vitals.score)?;

        Ok(Fixtures { patient, vitals })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"patient:
  name: Ravi Kumar
  id: PT-2025-0099
  age: 58
  sex: M
  photo: https://example.org/photo.png
  summary: Stage III colorectal cancer.
  genomic:
    - gene: PIK3CA
      variant: p.E545K
      significance: Pathogenic
    - gene: KRAS
      variant: p.G12D
      significance: Pathogenic

vitals:
  time: [Baseline, Cycle 1, Cycle 2]
  score: [60, 64.5, 70]
"#;

    #[test]
    fn stock_fixtures_match_demo_data() {
        let fixtures = Fixtures::stock();

        assert_eq!(fixtures.patient.name, "Asha Patel");
        assert_eq!(fixtures.patient.caption(), "ID: PT-2025-0012 · 46 yrs · F");
        assert_eq!(
            fixtures.patient.gene_symbols().collect::<Vec<_>>(),
            vec!["BRCA1", "PIK3CA"]
        );
        assert_eq!(
            fixtures.vitals.labels().collect::<Vec<_>>(),
            vec!["Day 0", "Week 1", "Week 2", "Week 3", "Week 4"]
        );
        assert_eq!(
            fixtures.vitals.scores().collect::<Vec<_>>(),
            vec![72.0, 68.0, 75.0, 78.0, 82.0]
        );
    }

    #[test]
    fn parses_yaml_fixture() {
        let fixtures = Fixtures::from_yaml(SAMPLE).expect("parse fixture");

        assert_eq!(fixtures.patient.name, "Ravi Kumar");
        assert_eq!(fixtures.patient.sex, Sex::Male);
        assert_eq!(fixtures.patient.genomic.len(), 2);
        assert_eq!(fixtures.patient.genomic[1].gene, "KRAS");
        assert_eq!(fixtures.vitals.len(), 3);
        assert_eq!(fixtures.vitals.points()[1].score, 64.5);
    }

    #[test]
    fn rejects_unknown_keys() {
        let input = SAMPLE.replace("  age: 58\n", "  age: 58\n  ward: 7B\n");
        let err = Fixtures::from_yaml(&input).expect_err("should reject unknown key");
        match err {
            CoreError::FixtureParse(e) => assert!(e.to_string().contains("ward")),
            other => panic!("expected FixtureParse error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_patient_name() {
        let input = SAMPLE.replace("name: Ravi Kumar", "name: '  '");
        let err = Fixtures::from_yaml(&input).expect_err("should reject empty name");
        assert!(matches!(err, CoreError::FixtureParse(_)));
    }

    #[test]
    fn rejects_unequal_vitals_columns() {
        let input = SAMPLE.replace("score: [60, 64.5, 70]", "score: [60, 64.5]");
        let err = Fixtures::from_yaml(&input).expect_err("should reject column mismatch");
        assert!(matches!(
            err,
            CoreError::VitalsLengthMismatch {
                labels: 3,
                scores: 2
            }
        ));
    }

    #[test]
    fn rejects_non_finite_scores() {
        for bad in [".nan", ".inf", "-.inf"] {
            let input = SAMPLE.replace("score: [60, 64.5, 70]", &format!("score: [60, {bad}, 70]"));
            let err = Fixtures::from_yaml(&input).expect_err("should reject non-finite score");
            match err {
                CoreError::InvalidInput(msg) => assert!(msg.contains("Cycle 1")),
                other => panic!("expected InvalidInput error, got {other:?}"),
            }
        }
    }

    #[test]
    fn missing_genomic_list_means_no_findings() {
        let input = r#"patient:
  name: No Findings
  id: PT-1
  age: 30
  sex: F
vitals:
  time: []
  score: []
"#;
        let fixtures = Fixtures::from_yaml(input).expect("parse fixture");
        assert!(fixtures.patient.genomic.is_empty());
        assert!(fixtures.vitals.is_empty());
    }

    #[test]
    fn resolve_reads_configured_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(SAMPLE.as_bytes()).expect("write fixture");

        let fixtures = Fixtures::resolve(Some(file.path())).expect("resolve fixture");
        assert_eq!(fixtures.patient.id, "PT-2025-0099");
    }

    #[test]
    fn bundled_demo_file_matches_stock() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/demo.yaml");
        let fixtures = Fixtures::from_file(&path).expect("load demo fixture");
        assert_eq!(fixtures, Fixtures::stock());
    }

    #[test]
    fn resolve_without_file_uses_stock() {
        assert_eq!(Fixtures::resolve(None).unwrap(), Fixtures::stock());
    }

    #[test]
    fn resolve_reports_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("absent.yaml");
        let err = Fixtures::resolve(Some(missing.as_path()))
            .expect_err("should fail on missing file");
        assert!(matches!(err, CoreError::FixtureRead(_)));
    }
}
