//! Registry mapping URL schemes to handlers.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::error::{FetchError, RegistryError};
use super::handler::{SchemeHandler, TileFetchRequest};
use super::url::url_scheme;

/// Owned set of protocol handlers.
///
/// Built once during startup; after that it is only read, so it can be
/// shared behind an `Arc` by every fetch.
#[derive(Default)]
pub struct ProtocolRegistry {
    handlers: HashMap<String, Arc<dyn SchemeHandler>>,
}

impl ProtocolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its own scheme.
    ///
    /// # Errors
    ///
    /// * [`RegistryError::InvalidScheme`] for an empty or non URL-safe scheme
    /// * [`RegistryError::AlreadyRegistered`] if the scheme is taken
    pub fn register(&mut self, handler: Arc<dyn SchemeHandler>) -> Result<(), RegistryError> {
        let scheme = handler.scheme().to_string();
        if !is_valid_scheme(&scheme) {
            return Err(RegistryError::InvalidScheme(scheme));
        }
        if self.handlers.contains_key(&scheme) {
            return Err(RegistryError::AlreadyRegistered(scheme));
        }

        info!(scheme = %scheme, "Registered protocol handler");
        self.handlers.insert(scheme, handler);
        Ok(())
    }

    /// Look up the handler for a scheme.
    pub fn handler(&self, scheme: &str) -> Option<&Arc<dyn SchemeHandler>> {
        self.handlers.get(scheme)
    }

    /// Registered schemes, sorted.
    pub fn schemes(&self) -> Vec<&str> {
        let mut schemes: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        schemes.sort_unstable();
        schemes
    }

    /// Route a request to the handler owning its scheme.
    ///
    /// # Errors
    ///
    /// [`FetchError::InvalidUrl`] if the URL has no scheme,
    /// [`FetchError::UnknownScheme`] if nobody handles it, otherwise whatever
    /// the handler returns.
    pub async fn dispatch(
        &self,
        request: &TileFetchRequest,
        cancel: CancellationToken,
    ) -> Result<Bytes, FetchError> {
        let scheme = url_scheme(request.url())
            .ok_or_else(|| FetchError::InvalidUrl(request.url().to_string()))?;
        let handler = self
            .handlers
            .get(scheme)
            .ok_or_else(|| FetchError::UnknownScheme(scheme.to_string()))?;
        handler.fetch(request, cancel).await
    }
}

impl std::fmt::Debug for ProtocolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProtocolRegistry")
            .field("schemes", &self.schemes())
            .finish()
    }
}

/// RFC 3986 scheme: a letter followed by letters, digits, `+`, `-` or `.`.
fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}
