//! Constants used throughout the PMP core crate.

/// Default address the dashboard listens on when `PMP_ADDR` is not set.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8501";

/// Environment variable overriding the listen address.
pub const LISTEN_ADDR_ENV: &str = "PMP_ADDR";

/// Environment variable naming a YAML file that replaces the built-in fixtures.
pub const FIXTURE_FILE_ENV: &str = "PMP_FIXTURE_FILE";

/// Gene symbol that triggers the PARP inhibitor recommendation.
pub const BRCA1: &str = "BRCA1";

/// Gene symbol that triggers the PI3K inhibitor trial recommendation.
pub const PIK3CA: &str = "PIK3CA";
