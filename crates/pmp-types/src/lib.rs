//! Validated primitive types shared across the PMP crates.

/// Errors that can occur when creating validated types.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TypeError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    EmptyText,
    /// A confidence score fell outside the closed interval [0, 1]
    #[error("Confidence must be within [0, 1], got {0}")]
    ConfidenceOutOfRange(f64),
}

/// A string type that guarantees non-empty content.
///
/// The input is trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Returns
    ///
    /// Returns `Ok(NonEmptyText)` if the trimmed input is non-empty,
    /// or `Err(TypeError::EmptyText)` if it's empty or contains only whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TypeError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TypeError::EmptyText);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A model confidence score in the closed interval [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Confidence(f64);

impl Confidence {
    /// Creates a new `Confidence`, rejecting NaN and values outside [0, 1].
    pub fn new(value: f64) -> Result<Self, TypeError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(TypeError::ConfidenceOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Wraps a constant for rule tables.
    ///
    /// Out-of-range values panic, which is a compile error when evaluated in a `const` or `static`.
    pub const fn from_const(value: f64) -> Self {
        assert!(0.0 <= value && value <= 1.0, "confidence constant must be within [0, 1]");
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Whole-number percentage, rounding halves away from zero (0.765 -> 77).
    pub fn percent(self) -> u8 {
        // Bounded to 0..=100 by construction.
        (self.0 * 100.0).round() as u8
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_trims_input() {
        let text = NonEmptyText::new("  Asha Patel ").unwrap();
        assert_eq!(text.as_str(), "Asha Patel");
    }

    #[test]
    fn non_empty_text_rejects_whitespace() {
        assert_eq!(NonEmptyText::new("   "), Err(TypeError::EmptyText));
    }

    #[test]
    fn non_empty_text_deserialize_rejects_empty() {
        let err = serde_yaml::from_str::<NonEmptyText>("''").expect_err("should reject empty");
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn percent_rounds_half_away_from_zero() {
        assert_eq!(Confidence::new(0.87).unwrap().percent(), 87);
        assert_eq!(Confidence::new(0.765).unwrap().percent(), 77);
        assert_eq!(Confidence::new(0.125).unwrap().percent(), 13);
        assert_eq!(Confidence::new(0.005).unwrap().percent(), 1);
        assert_eq!(Confidence::new(0.0).unwrap().percent(), 0);
        assert_eq!(Confidence::new(1.0).unwrap().percent(), 100);
    }

    #[test]
    fn display_appends_percent_sign() {
        assert_eq!(Confidence::from_const(0.95).to_string(), "95%");
    }

    #[test]
    fn from_const_accepts_bounds() {
        const LOW: Confidence = Confidence::from_const(0.0);
        const HIGH: Confidence = Confidence::from_const(1.0);
        assert_eq!(LOW.percent(), 0);
        assert_eq!(HIGH.percent(), 100);
    }

    #[test]
    #[should_panic(expected = "confidence constant must be within [0, 1]")]
    fn from_const_rejects_out_of_range() {
        let _ = Confidence::from_const(std::hint::black_box(1.5));
    }

    #[test]
    fn confidence_rejects_out_of_range() {
        assert_eq!(Confidence::new(1.01), Err(TypeError::ConfidenceOutOfRange(1.01)));
        assert!(Confidence::new(-0.1).is_err());
        assert!(Confidence::new(f64::NAN).is_err());
    }
}
