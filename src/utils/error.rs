use thiserror::Error;

#[derive(Error, Debug)]
pub enum CdsError {
    #[error("The .cdsapirc file was not found at {path}.")]
    NotFound { path: String },

    #[error("The .cdsapirc file at {path} is invalid: {reason}")]
    InvalidConfig { path: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Client initialization failed: {message}")]
    ClientError { message: String },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CdsError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CdsError::NotFound { .. })
    }

    pub fn is_invalid_config(&self) -> bool {
        matches!(self, CdsError::InvalidConfig { .. })
    }

    /// Errors the demo reports and then carries on from.
    pub fn is_recoverable(&self) -> bool {
        self.is_not_found() || self.is_invalid_config()
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CdsError::NotFound { path } => {
                format!("No credentials file at {}", path)
            }
            CdsError::InvalidConfig { path, reason } => {
                format!("Credentials file {} is incomplete: {}", path, reason)
            }
            CdsError::IoError(e) => format!("Could not read the credentials file: {}", e),
            CdsError::ClientError { message } => {
                format!("Could not create the CDS client: {}", message)
            }
            CdsError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CdsError::NotFound { .. } => {
                "Create the file or pass its location with --cdsapirc / CDSAPI_RC"
            }
            CdsError::InvalidConfig { .. } => {
                "Add non-empty 'url: <endpoint>' and 'key: <api key>' lines to the file"
            }
            CdsError::IoError(_) => "Check the file permissions and that it is UTF-8 text",
            CdsError::ClientError { .. } => "Check that the url line holds a valid http(s) endpoint",
            CdsError::InvalidConfigValueError { .. } => "Fix the value and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, CdsError>;
