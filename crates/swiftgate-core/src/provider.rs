//! The swiftgate service provider.
//!
//! [`SwiftGate`] owns the immutable configuration and the injected
//! blob-store backend; the per-operation handlers live in [`crate::ops`].

use std::sync::Arc;

use crate::backend::BlobStoreBackend;
use crate::config::SwiftConfig;
use crate::memory::InMemoryBackend;

/// The Swift container service provider.
pub struct SwiftGate {
    pub(crate) config: SwiftConfig,
    backend: Arc<dyn BlobStoreBackend>,
}

impl SwiftGate {
    /// Create a provider over the transient in-memory backend.
    #[must_use]
    pub fn new(config: SwiftConfig) -> Self {
        let backend = Arc::new(InMemoryBackend::with_page_size(config.backend_page_size));
        Self::with_backend(config, backend)
    }

    /// Create a provider over an injected backend.
    #[must_use]
    pub fn with_backend(config: SwiftConfig, backend: Arc<dyn BlobStoreBackend>) -> Self {
        Self { config, backend }
    }

    /// The provider configuration.
    #[must_use]
    pub fn config(&self) -> &SwiftConfig {
        &self.config
    }

    /// Resolve the backend for a request credential.
    ///
    /// The auth token selects the backend in multi-tenant deployments; this
    /// slice serves a single backend for every token.
    #[must_use]
    pub fn backend(&self, _auth_token: Option<&str>) -> Arc<dyn BlobStoreBackend> {
        Arc::clone(&self.backend)
    }
}

impl std::fmt::Debug for SwiftGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwiftGate")
            .field("config", &self.config)
            .field("backend", &self.backend.provider_id())
            .finish()
    }
}
