//! Core types for Stride Console.
//!
//! This module provides the closed enumerations and identity records the
//! resolvers operate over.

pub mod admin;
pub mod country;
pub mod language;
pub mod plan;

pub use admin::{AdminType, AdminUser, Permission, Role};
pub use country::Country;
pub use language::{Direction, Language};
pub use plan::SubscriptionPlan;

use thiserror::Error;

/// Error returned when parsing an identifier outside a closed set.
///
/// Every enumeration here is closed: an unrecognized identifier is
/// rejected, never coerced to a default. Callers decide the fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl UnknownVariant {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
