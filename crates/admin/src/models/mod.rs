//! Domain models for the console.

pub mod session;

pub use session::{LANGUAGE_COOKIE, keys as session_keys};
