use crate::config::DEFAULT_CDSAPIRC_PATH;
use crate::core::{ClientFactory, CredentialRecord};
use crate::utils::error::{CdsError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

const URL_PREFIX: &str = "url:";
const KEY_PREFIX: &str = "key:";

/// Values seen so far while scanning a credentials file.
///
/// Nothing here is validated; `finish` is the only way out.
#[derive(Debug, Default)]
pub struct ScannedCredentials {
    url: Option<String>,
    key: Option<String>,
}

impl ScannedCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a `url:` or `key:` line. A later match replaces an earlier one.
    pub fn feed_line(&mut self, line: &str) {
        if let Some(rest) = line.strip_prefix(URL_PREFIX) {
            if self.url.is_some() {
                tracing::warn!("Repeated 'url:' line, the last one wins");
            }
            let value = rest.trim().to_string();
            tracing::debug!("Found url line: {}", value);
            self.url = Some(value);
        } else if let Some(rest) = line.strip_prefix(KEY_PREFIX) {
            if self.key.is_some() {
                tracing::warn!("Repeated 'key:' line, the last one wins");
            }
            self.key = Some(rest.trim().to_string());
            tracing::debug!("Found key line");
        }
    }

    /// Checks that both values are present and non-empty.
    pub fn finish(self, source: &str) -> Result<CredentialRecord> {
        let url = self.url.filter(|v| !v.is_empty());
        let key = self.key.filter(|v| !v.is_empty());

        match (url, key) {
            (Some(url), Some(key)) => Ok(CredentialRecord::new(url, key)),
            (url, key) => {
                let missing: Vec<&str> = [("url", url.is_none()), ("key", key.is_none())]
                    .iter()
                    .filter(|(_, absent)| *absent)
                    .map(|(name, _)| *name)
                    .collect();
                Err(CdsError::InvalidConfig {
                    path: source.to_string(),
                    reason: format!("missing or empty '{}'", missing.join("' and '")),
                })
            }
        }
    }
}

/// Scans any buffered reader for `url:` and `key:` lines.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. `source` only appears in
/// error messages.
pub fn parse_credentials<R: BufRead>(mut reader: R, source: &str) -> Result<CredentialRecord> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut scanned = ScannedCredentials::new();
    // "\r\n" yields an extra empty line, which never matches a prefix
    for line in text.split(['\n', '\r']) {
        scanned.feed_line(line);
    }
    scanned.finish(source)
}

/// Reads and validates the credentials file at `path`.
pub fn load_credentials(path: impl AsRef<Path>) -> Result<CredentialRecord> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    if !path.is_file() {
        return Err(CdsError::NotFound { path: shown });
    }

    tracing::debug!("Reading credentials from {}", shown);
    let file = File::open(path)?;
    let record = parse_credentials(BufReader::new(file), &shown)?;

    tracing::info!(
        "Loaded credentials for {} (key {})",
        record.endpoint_url,
        record.api_key
    );
    Ok(record)
}

/// Loads the credentials at `path` and hands them to `factory`.
pub fn initialize_client<F: ClientFactory>(path: impl AsRef<Path>, factory: &F) -> Result<F::Client> {
    let record = load_credentials(path)?;
    factory.create(&record.endpoint_url, record.api_key.expose_secret())
}

/// `initialize_client` against `DEFAULT_CDSAPIRC_PATH`.
pub fn initialize_default_client<F: ClientFactory>(factory: &F) -> Result<F::Client> {
    initialize_client(DEFAULT_CDSAPIRC_PATH, factory)
}

#[derive(Debug, Clone)]
pub struct CredentialLoader {
    path: PathBuf,
}

impl Default for CredentialLoader {
    fn default() -> Self {
        Self::new(None::<PathBuf>)
    }
}

impl CredentialLoader {
    pub fn new(path: Option<impl Into<PathBuf>>) -> Self {
        Self {
            path: path
                .map(Into::into)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CDSAPIRC_PATH)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<CredentialRecord> {
        load_credentials(&self.path)
    }

    pub fn initialize<F: ClientFactory>(&self, factory: &F) -> Result<F::Client> {
        initialize_client(&self.path, factory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<CredentialRecord> {
        parse_credentials(Cursor::new(text), "test")
    }

    #[test]
    fn test_parse_basic_file() {
        let record = parse("url: https://example.org/api\nkey: abc123\n").unwrap();
        assert_eq!(record, CredentialRecord::new("https://example.org/api", "abc123"));
    }

    #[test]
    fn test_order_and_extra_lines_ignored() {
        let record = parse("# comment\nkey:   abc123  \nverify: 0\n\nurl:https://example.org/api").unwrap();
        assert_eq!(record.endpoint_url, "https://example.org/api");
        assert_eq!(record.api_key.expose_secret(), "abc123");
    }

    #[test]
    fn test_last_match_wins() {
        let record = parse("url: https://old\nkey: one\nurl: https://new\nkey: two\n").unwrap();
        assert_eq!(record.endpoint_url, "https://new");
        assert_eq!(record.api_key.expose_secret(), "two");

        let err = parse("url: https://old\nkey: one\nurl:   \n").unwrap_err();
        assert!(err.is_invalid_config());
    }

    #[test]
    fn test_prefix_is_case_sensitive_and_anchored() {
        let err = parse("URL: https://example.org\n  url: https://example.org\nkey: abc\n").unwrap_err();
        assert!(err.is_invalid_config());
        assert!(err.to_string().contains("'url'"));
    }

    #[test]
    fn test_remainder_keeps_later_prefix_occurrences() {
        let record = parse("url: https://example.org/url:x\nkey: key:abc\n").unwrap();
        assert_eq!(record.endpoint_url, "https://example.org/url:x");
        assert_eq!(record.api_key.expose_secret(), "key:abc");
    }

    #[test]
    fn test_missing_both_fields() {
        let err = parse("").unwrap_err();
        assert!(err.is_invalid_config());
        assert!(err.to_string().contains("missing or empty 'url' and 'key'"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let record = parse("url: https://example.org/api\r\nkey: abc123\r\n").unwrap();
        assert_eq!(record.endpoint_url, "https://example.org/api");
        assert_eq!(record.api_key.expose_secret(), "abc123");
    }

    #[test]
    fn test_cr_only_line_endings() {
        let record = parse("url: https://example.org/api\rkey: abc123\r").unwrap();
        assert_eq!(record.endpoint_url, "https://example.org/api");
        assert_eq!(record.api_key.expose_secret(), "abc123");

        let record = parse("# old mac file\rkey: abc123\r\nurl: https://example.org/api").unwrap();
        assert_eq!(record.endpoint_url, "https://example.org/api");
        assert_eq!(record.api_key.expose_secret(), "abc123");
    }

    #[test]
    fn test_default_client_missing_file_is_not_found() {
        if Path::new(DEFAULT_CDSAPIRC_PATH).exists() {
            return;
        }
        let factory = |_: &str, _: &str| -> Result<()> { Ok(()) };
        let err = initialize_default_client(&factory).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains(DEFAULT_CDSAPIRC_PATH));
    }

    #[test]
    fn test_loader_defaults_path() {
        let loader = CredentialLoader::default();
        assert_eq!(loader.path(), Path::new(DEFAULT_CDSAPIRC_PATH));

        let loader = CredentialLoader::new(Some("/tmp/other.cdsapirc"));
        assert_eq!(loader.path(), Path::new("/tmp/other.cdsapirc"));
    }
}
