//! Session-stored selection state.
//!
//! The session holds three orthogonal registers - admin type, language,
//! and region - each written with an atomic replace by its setter. Any
//! combination of the three is valid.

/// Durable cookie holding the preferred language code as a bare string
/// (e.g. `ar`). This is the only persisted artifact of the console: it is
/// what survives a restart, while the session registers do not.
pub const LANGUAGE_COOKIE: &str = "preferred_language";

/// Session keys for the selection registers.
pub mod keys {
    /// Key for the selected admin type.
    pub const ADMIN_TYPE: &str = "admin_type";

    /// Key for the selected language.
    pub const LANGUAGE: &str = "language";

    /// Key for the selected region.
    pub const COUNTRY: &str = "country";
}
