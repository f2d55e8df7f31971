//! Session layer and the session-scope extractor.

pub mod scope;
pub mod session;

pub use scope::SessionScope;
pub use session::create_session_layer;
