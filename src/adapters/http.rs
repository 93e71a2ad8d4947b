use crate::core::{ClientFactory, SecretString};
use crate::utils::error::{CdsError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use url::Url;

const AUTH_HEADER: &str = "private-token";
const USER_AGENT: &str = concat!("cds-client-util/", env!("CARGO_PKG_VERSION"));

/// Handle on the Climate Data Store API.
///
/// Construction only prepares the HTTP client; no request is sent.
#[derive(Debug, Clone)]
pub struct CdsClient {
    url: Url,
    key: SecretString,
    http: Client,
}

impl CdsClient {
    pub fn new(url: &str, key: &str) -> Result<Self> {
        let mut url = validate_url("url", url)?;
        validate_non_empty_string("key", key)?;

        // join() drops the last path segment unless the base ends with '/'
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        let mut auth = HeaderValue::from_str(key).map_err(|e| CdsError::ClientError {
            message: format!("key is not a valid header value: {}", e),
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTH_HEADER, auth);

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| CdsError::ClientError {
                message: e.to_string(),
            })?;

        tracing::debug!("CDS client ready for {}", url);

        Ok(Self {
            url,
            key: SecretString::from(key),
            http,
        })
    }

    /// Base endpoint, always ending in `/`.
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn key(&self) -> &SecretString {
        &self.key
    }

    /// Underlying HTTP client, with the auth header already attached.
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// Resolves a resource path relative to the base endpoint.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.url
            .join(path.trim_start_matches('/'))
            .map_err(|e| CdsError::InvalidConfigValueError {
                field: "path".to_string(),
                value: path.to_string(),
                reason: e.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CdsClientFactory;

impl ClientFactory for CdsClientFactory {
    type Client = CdsClient;

    fn create(&self, url: &str, key: &str) -> Result<CdsClient> {
        CdsClient::new(url, key).map_err(|e| match e {
            CdsError::InvalidConfigValueError { field, reason, .. } => CdsError::ClientError {
                message: format!("{}: {}", field, reason),
            },
            other => other,
        })
    }
}
