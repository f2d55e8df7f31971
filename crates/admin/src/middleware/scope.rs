//! The session scope: per-request view of the current admin selection.
//!
//! [`SessionScope`] is the only way handlers reach the query and setter
//! surface - there is no ambient global. It is an extractor, so a handler
//! that runs without the session layer installed fails fast with a 500 at
//! the point of use: that is a structural wiring mistake, not a
//! recoverable runtime condition.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{HeaderMap, StatusCode, header::COOKIE, request::Parts},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use stride_core::{AdminType, AdminUser, Country, Direction, Language};

use crate::{
    error::AppError,
    models::{LANGUAGE_COOKIE, session_keys},
    state::AppState,
};

/// Per-request session state: the three selection registers plus the
/// resolvers bound to them.
///
/// The derived user record is resolved from the registry on every access,
/// never cached across an identity switch.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(scope: SessionScope) -> impl IntoResponse {
///     if scope.has_permission("reports", "view") {
///         // render the reports nav entry
///     }
///     format!("{}", scope.t("ui.dashboard"))
/// }
/// ```
pub struct SessionScope {
    session: Session,
    state: AppState,
    admin_type: AdminType,
    language: Language,
    country: Country,
}

impl SessionScope {
    /// The selected admin type.
    #[must_use]
    pub const fn admin_type(&self) -> AdminType {
        self.admin_type
    }

    /// The active language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// The selected region. Display only.
    #[must_use]
    pub const fn country(&self) -> Country {
        self.country
    }

    /// The registry record for the selected admin type.
    #[must_use]
    pub fn user(&self) -> &AdminUser {
        self.state.identities().lookup(self.admin_type)
    }

    /// Text direction of the active language.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.language.direction()
    }

    /// Translates a general UI string key; falls back to the key.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.state.ui_strings().translate(self.language, key).to_string()
    }

    /// Translates an admin-surface string key; falls back to the key.
    ///
    /// Separate from [`Self::t`]: the two catalogs do not share keys.
    #[must_use]
    pub fn t_admin(&self, key: &str) -> String {
        self.state
            .admin_strings()
            .translate(self.language, key)
            .to_string()
    }

    /// True iff the current role grants the exact (module, action) pair.
    #[must_use]
    pub fn has_permission(&self, module: &str, action: &str) -> bool {
        self.user().has_permission(module, action)
    }

    /// True iff the current plan unlocks the feature.
    #[must_use]
    pub fn has_feature(&self, feature: &str) -> bool {
        self.state.features().has_feature(self.user().plan, feature)
    }

    /// The shared application state backing this scope.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Replaces the selected admin type.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be modified.
    pub async fn set_admin_type(&self, admin_type: AdminType) -> Result<(), AppError> {
        self.session
            .insert(session_keys::ADMIN_TYPE, admin_type)
            .await?;
        Ok(())
    }

    /// Replaces the selected region.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be modified.
    pub async fn set_country(&self, country: Country) -> Result<(), AppError> {
        self.session.insert(session_keys::COUNTRY, country).await?;
        Ok(())
    }

    /// Replaces the active language.
    ///
    /// The caller also attaches [`Self::language_cookie`] to the response
    /// so the choice survives a restart; templates pick up the new
    /// direction on the next render.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be modified.
    pub async fn set_language(&self, language: Language) -> Result<(), AppError> {
        self.session.insert(session_keys::LANGUAGE, language).await?;
        Ok(())
    }

    /// The `Set-Cookie` value persisting a language choice.
    ///
    /// The cookie value is the bare language code under a fixed name -
    /// the console's only durable artifact.
    #[must_use]
    pub fn language_cookie(&self, language: Language) -> String {
        let secure = if self.state.config().is_secure() {
            "; Secure"
        } else {
            ""
        };
        format!(
            "{LANGUAGE_COOKIE}={}; Path=/; Max-Age=31536000; SameSite=Lax{secure}",
            language.as_str()
        )
    }
}

/// Rejection for a scope acquired outside an installed session layer.
#[derive(Debug)]
pub struct MissingSessionLayer;

impl IntoResponse for MissingSessionLayer {
    fn into_response(self) -> Response {
        tracing::error!(
            "SessionScope extracted without SessionManagerLayer installed; \
             this is a router wiring bug"
        );
        (StatusCode::INTERNAL_SERVER_ERROR, "session layer not installed").into_response()
    }
}

impl<S> FromRequestParts<S> for SessionScope
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = MissingSessionLayer;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        // Set by SessionManagerLayer; absence means the layer is missing.
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or(MissingSessionLayer)?;

        let admin_type: AdminType = session
            .get(session_keys::ADMIN_TYPE)
            .await
            .ok()
            .flatten()
            .unwrap_or_default();

        let country: Country = session
            .get(session_keys::COUNTRY)
            .await
            .ok()
            .flatten()
            .unwrap_or_default();

        let language = match session.get::<Language>(session_keys::LANGUAGE).await {
            Ok(Some(language)) => language,
            // First activation of this session: restore the persisted
            // choice once, or fall back to the configured default. An
            // absent or unsupported cookie degrades silently.
            _ => {
                let language = language_from_cookie_header(&parts.headers)
                    .unwrap_or(state.config().default_language);
                if let Err(error) = session.insert(session_keys::LANGUAGE, language).await {
                    tracing::debug!(%error, "could not store restored language in session");
                }
                language
            }
        };

        Ok(Self {
            session,
            state,
            admin_type,
            language,
            country,
        })
    }
}

/// Reads the persisted language from the request's `Cookie` headers.
///
/// Returns `None` for a missing cookie or a value outside the supported
/// set, leaving the default language active.
fn language_from_cookie_header(headers: &HeaderMap) -> Option<Language> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(tower_sessions::cookie::Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == LANGUAGE_COOKIE)
        .and_then(|cookie| cookie.value().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).expect("valid header"));
        headers
    }

    #[test]
    fn restores_supported_language() {
        let headers = headers_with_cookie("preferred_language=ar");
        assert_eq!(language_from_cookie_header(&headers), Some(Language::Ar));
    }

    #[test]
    fn restores_among_other_cookies() {
        let headers = headers_with_cookie("theme=dark; preferred_language=hi; seen_tour=1");
        assert_eq!(language_from_cookie_header(&headers), Some(Language::Hi));
    }

    #[test]
    fn unsupported_value_is_ignored() {
        let headers = headers_with_cookie("preferred_language=fr");
        assert_eq!(language_from_cookie_header(&headers), None);
    }

    #[test]
    fn missing_cookie_is_ignored() {
        let headers = headers_with_cookie("theme=dark");
        assert_eq!(language_from_cookie_header(&headers), None);
        assert_eq!(language_from_cookie_header(&HeaderMap::new()), None);
    }
}
