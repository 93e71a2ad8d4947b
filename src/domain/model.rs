use std::fmt;

/// String wrapper for secrets such as API keys.
///
/// `Debug` never shows the value and `Display` shows only a truncated
/// `first4...last4` form, so records can be logged safely.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(value: String) -> Self {
        SecretString(value)
    }

    /// Returns the raw secret. Only hand this to the client that needs it.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    /// `first4...last4`, or `***` for secrets of 8 characters or fewer.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 8 {
            return "***".to_string();
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretString(***)")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        SecretString::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        SecretString::new(s.to_string())
    }
}

/// Endpoint URL and API key read from a `.cdsapirc` file.
///
/// Both fields are non-empty; the loader is the only place that builds one
/// from file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub endpoint_url: String,
    pub api_key: SecretString,
}

impl CredentialRecord {
    pub fn new(endpoint_url: impl Into<String>, api_key: impl Into<SecretString>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            api_key: api_key.into(),
        }
    }
}
