//! Patient profile and genomic finding records.
//!
//! These are the immutable domain values the dashboard displays. Validation of externally
//! supplied data happens in the fixture wire model (see [`crate::fixtures`]); by the time a
//! [`Patient`] exists its shape is fixed for the life of the process.

/// Recorded sex of the patient, displayed as its single-letter code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sex {
    Female,
    Male,
    /// Any other code, kept verbatim.
    Other(String),
}

impl Sex {
    /// Parse from the code used in fixtures (`F`, `M`, or free text).
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "F" | "f" => Sex::Female,
            "M" | "m" => Sex::Male,
            other => Sex::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Sex::Female => "F",
            Sex::Male => "M",
            Sex::Other(code) => code.as_str(),
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A single genomic observation attached to a patient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenomicFinding {
    /// Gene symbol, e.g. `BRCA1`.
    pub gene: String,
    /// Variant notation, e.g. `c.68_69delAG`.
    pub variant: String,
    /// Clinical significance label, e.g. `Pathogenic`.
    pub significance: String,
}

impl GenomicFinding {
    pub fn new(
        gene: impl Into<String>,
        variant: impl Into<String>,
        significance: impl Into<String>,
    ) -> Self {
        Self {
            gene: gene.into(),
            variant: variant.into(),
            significance: significance.into(),
        }
    }
}

/// The patient shown on the dashboard.
///
/// Findings keep their authored order, which is also their display order. Duplicates are
/// allowed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Patient {
    pub name: String,
    pub id: String,
    pub age: u32,
    pub sex: Sex,
    /// Free-text clinical summary.
    pub summary: String,
    /// URL of the profile photo. Fetched by the viewer's browser, never by the server.
    pub photo_url: String,
    pub genomic: Vec<GenomicFinding>,
}

impl Patient {
    /// Gene symbols of every finding, in authored order.
    pub fn gene_symbols(&self) -> impl Iterator<Item = &str> {
        self.genomic.iter().map(|finding| finding.gene.as_str())
    }

    /// Whether any finding names `gene`. Matching is exact and case-sensitive.
    pub fn has_gene(&self, gene: &str) -> bool {
        self.gene_symbols().any(|symbol| symbol == gene)
    }

    /// Caption line combining id, age and sex: `ID: PT-1 · 46 yrs · F`.
    pub fn caption(&self) -> String {
        format!("ID: {} · {} yrs · {}", self.id, self.age, self.sex)
    }
}
