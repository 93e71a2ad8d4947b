pub mod loader;

pub use crate::domain::model::{CredentialRecord, SecretString};
pub use crate::domain::ports::ClientFactory;
pub use crate::utils::error::Result;
