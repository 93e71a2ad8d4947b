use crate::utils::error::Result;

/// Builds an API client from the two values of a credential record.
///
/// The loader calls this once per successful load, passing the trimmed
/// `url` and `key`. Any `Fn(&str, &str) -> Result<C>` closure is a factory,
/// which is how tests swap out the network-capable client.
pub trait ClientFactory {
    type Client;

    fn create(&self, url: &str, key: &str) -> Result<Self::Client>;
}

impl<F, C> ClientFactory for F
where
    F: Fn(&str, &str) -> Result<C>,
{
    type Client = C;

    fn create(&self, url: &str, key: &str) -> Result<C> {
        self(url, key)
    }
}
