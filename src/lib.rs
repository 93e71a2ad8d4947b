pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{CdsClient, CdsClientFactory};
pub use config::DEFAULT_CDSAPIRC_PATH;
pub use core::loader::{
    initialize_client, initialize_default_client, load_credentials, parse_credentials,
    CredentialLoader,
};
pub use domain::model::{CredentialRecord, SecretString};
pub use domain::ports::ClientFactory;
pub use utils::error::{CdsError, Result};
