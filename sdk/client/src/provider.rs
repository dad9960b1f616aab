//! Provider resolution
//!
//! The transport is injected explicitly: callers hand over either an
//! existing provider handle or a JSON-RPC URL. An existing handle always
//! wins over a URL; with neither, resolution fails. There is no implicit
//! host/environment detection.

use std::sync::Arc;

use ethers::providers::{Http, Provider};

use crate::error::PassError;

/// Where the JSON-RPC transport comes from.
#[derive(Debug, Clone)]
pub enum ProviderSource {
    /// An already-constructed provider, returned unchanged.
    Handle(Arc<Provider<Http>>),
    /// A JSON-RPC endpoint URL to build a provider from.
    Url(String),
}

/// Resolve the configured source into a usable provider handle.
pub fn resolve_provider(source: Option<ProviderSource>) -> Result<Arc<Provider<Http>>, PassError> {
    match source {
        Some(ProviderSource::Handle(provider)) => Ok(provider),
        Some(ProviderSource::Url(url)) => {
            let provider = Provider::<Http>::try_from(url.as_str()).map_err(|err| {
                PassError::Provider(format!("invalid JSON-RPC url `{url}`: {err}"))
            })?;
            Ok(Arc::new(provider))
        }
        None => Err(PassError::Provider("no provider found".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_returned_unchanged() {
        let provider = Arc::new(Provider::<Http>::try_from("http://127.0.0.1:8545").unwrap());
        let resolved = resolve_provider(Some(ProviderSource::Handle(provider.clone()))).unwrap();
        assert!(Arc::ptr_eq(&provider, &resolved));
    }

    #[test]
    fn test_url_builds_provider() {
        assert!(resolve_provider(Some(ProviderSource::Url("http://127.0.0.1:8545".into()))).is_ok());
    }

    #[test]
    fn test_bad_url_is_provider_error() {
        let err = resolve_provider(Some(ProviderSource::Url("not a url".into()))).unwrap_err();
        assert!(matches!(err, PassError::Provider(_)));
    }

    #[test]
    fn test_nothing_to_resolve() {
        let err = resolve_provider(None).unwrap_err();
        assert!(matches!(err, PassError::Provider(_)));
        assert!(err.to_string().contains("no provider found"));
    }
}
