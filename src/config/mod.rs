#[cfg(feature = "cli")]
pub mod cli;

/// Used when the caller does not name a credentials file.
pub const DEFAULT_CDSAPIRC_PATH: &str = "../Secrets/.cdsapirc";
