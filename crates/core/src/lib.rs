//! Stride Core - Shared types and resolution logic.
//!
//! This crate provides the types and lookup logic the `stride-admin`
//! shell renders from: admin identities, permission checks, plan feature
//! gating, and translation lookup.
//!
//! # Architecture
//!
//! The core crate contains only types and pure resolution logic - no I/O,
//! no HTTP, no storage access. Every resolver here is a synchronous local
//! lookup, which keeps the crate testable anywhere and keeps the gating
//! behavior independent of how the surrounding shell is wired.
//!
//! # Modules
//!
//! - [`types`] - Enumerations for admin identity, plans, languages, regions
//! - [`identity`] - The admin-type to user-record registry
//! - [`features`] - Subscription plan feature gating
//! - [`i18n`] - Translation lookup and text direction

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod features;
pub mod i18n;
pub mod identity;
pub mod types;

pub use features::FeatureCatalog;
pub use i18n::TranslationCatalog;
pub use identity::IdentityRegistry;
pub use types::*;
