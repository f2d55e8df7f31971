//! Application state shared across handlers.

use std::sync::Arc;

use stride_core::{FeatureCatalog, IdentityRegistry, TranslationCatalog};

use crate::config::AdminConfig;

/// Application state shared across all handlers.
///
/// Holds the static configuration surface: the identity registry, the
/// plan feature table, and the two translation catalogs. All of it is
/// immutable after startup; per-session selection lives in the session,
/// not here.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    identities: IdentityRegistry,
    features: FeatureCatalog,
    ui_strings: TranslationCatalog,
    admin_strings: TranslationCatalog,
}

impl AppState {
    /// Builds state with the built-in registry, feature table, and strings.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                identities: IdentityRegistry::with_defaults(),
                features: FeatureCatalog::with_defaults(),
                ui_strings: TranslationCatalog::ui_defaults(),
                admin_strings: TranslationCatalog::admin_defaults(),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn identities(&self) -> &IdentityRegistry {
        &self.inner.identities
    }

    #[must_use]
    pub fn features(&self) -> &FeatureCatalog {
        &self.inner.features
    }

    /// General UI strings.
    #[must_use]
    pub fn ui_strings(&self) -> &TranslationCatalog {
        &self.inner.ui_strings
    }

    /// Admin-surface strings. Deliberately a separate catalog from
    /// [`Self::ui_strings`]; keys do not cross over.
    #[must_use]
    pub fn admin_strings(&self) -> &TranslationCatalog {
        &self.inner.admin_strings
    }
}
