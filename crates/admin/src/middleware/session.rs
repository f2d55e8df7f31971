//! Session middleware configuration.
//!
//! Sets up in-memory sessions using tower-sessions with strict cookie
//! settings (SameSite=Strict, 24hr inactivity expiry). Sessions hold only
//! the per-admin selection registers; nothing in them needs to survive a
//! restart except the language preference, which lives in its own durable
//! cookie (see [`crate::models::LANGUAGE_COOKIE`]).

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::AdminConfig;

/// Session cookie name for the console.
pub const SESSION_COOKIE_NAME: &str = "stride_admin_session";

/// Session expiry time in seconds (24 hours).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Create the session layer with an in-memory store.
#[must_use]
pub fn create_session_layer(config: &AdminConfig) -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
}
