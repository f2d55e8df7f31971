//! Admin identity domain types.
//!
//! These types describe *who* is currently driving the console: the
//! selectable admin identity, its role, and the permission pairs the role
//! grants. Permission checks are exact string matches on a
//! (module, action) pair - no wildcards, no hierarchy, no inheritance
//! between modules.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::country::Country;
use super::plan::SubscriptionPlan;

/// A selectable admin identity.
///
/// Selecting an admin type activates exactly one [`AdminUser`] record from
/// the identity registry; the records themselves are never edited through
/// the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdminType {
    /// Platform-wide administrator.
    #[default]
    RootAdmin,
    /// Administrator scoped to one country's operations.
    CountryAdmin,
    /// Delegated administrator with a reduced surface.
    SubAdmin,
}

impl AdminType {
    /// Every admin type, in picker display order.
    pub const ALL: [Self; 3] = [Self::RootAdmin, Self::CountryAdmin, Self::SubAdmin];

    /// Stable identifier used in forms and session storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RootAdmin => "root-admin",
            Self::CountryAdmin => "country-admin",
            Self::SubAdmin => "sub-admin",
        }
    }

    /// Human-readable name for display.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::RootAdmin => "Root Admin",
            Self::CountryAdmin => "Country Admin",
            Self::SubAdmin => "Sub Admin",
        }
    }
}

impl std::fmt::Display for AdminType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AdminType {
    type Err = super::UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "root-admin" => Ok(Self::RootAdmin),
            "country-admin" => Ok(Self::CountryAdmin),
            "sub-admin" => Ok(Self::SubAdmin),
            _ => Err(super::UnknownVariant::new("admin type", s)),
        }
    }
}

/// A named capability pair: the unit of permission granting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    /// Module the capability belongs to (e.g. "cms_content").
    pub module: String,
    /// Action within the module (e.g. "view", "edit").
    pub action: String,
}

impl Permission {
    /// Creates a permission pair.
    pub fn new(module: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            action: action.into(),
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.module, self.action)
    }
}

/// A role: a name plus the set of permission pairs it grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Display name of the role.
    pub name: String,
    /// Granted (module, action) pairs. Order is irrelevant; each pair is
    /// unique within the role.
    pub permissions: HashSet<Permission>,
}

impl Role {
    /// Creates a role from a name and permission pairs.
    pub fn new<I>(name: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = Permission>,
    {
        Self {
            name: name.into(),
            permissions: permissions.into_iter().collect(),
        }
    }

    /// True iff the exact (module, action) pair is granted.
    ///
    /// Matching is case-sensitive with no partial or wildcard semantics;
    /// unknown module or action strings simply yield `false`.
    #[must_use]
    pub fn grants(&self, module: &str, action: &str) -> bool {
        self.permissions
            .iter()
            .any(|p| p.module == module && p.action == action)
    }
}

/// The active admin record: identity plus everything gating derives from.
///
/// Records are owned by [`crate::identity::IdentityRegistry`] and are
/// immutable at runtime - switching admin type switches which record is
/// active, never the record contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    /// The identity this record belongs to.
    pub admin_type: AdminType,
    /// Role granting the permission set.
    pub role: Role,
    /// Subscription plan gating feature availability.
    pub plan: SubscriptionPlan,
    /// Home region. Display only.
    pub region: Country,
}

impl AdminUser {
    /// True iff this user's role grants the exact (module, action) pair.
    #[must_use]
    pub fn has_permission(&self, module: &str, action: &str) -> bool {
        self.role.grants(module, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer() -> AdminUser {
        AdminUser {
            admin_type: AdminType::SubAdmin,
            role: Role::new("Viewer", [Permission::new("dashboard", "view")]),
            plan: SubscriptionPlan::Pro,
            region: Country::India,
        }
    }

    #[test]
    fn grants_exact_pair_only() {
        let user = viewer();
        assert!(user.has_permission("dashboard", "view"));
        assert!(!user.has_permission("dashboard", "edit"));
        assert!(!user.has_permission("dash", "view"));
        assert!(!user.has_permission("", ""));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let user = viewer();
        assert!(!user.has_permission("Dashboard", "view"));
        assert!(!user.has_permission("dashboard", "VIEW"));
    }

    #[test]
    fn duplicate_pairs_collapse() {
        let role = Role::new(
            "Dup",
            [
                Permission::new("reports", "view"),
                Permission::new("reports", "view"),
            ],
        );
        assert_eq!(role.permissions.len(), 1);
        assert!(role.grants("reports", "view"));
    }

    #[test]
    fn admin_type_round_trips() {
        for admin_type in AdminType::ALL {
            assert_eq!(admin_type.as_str().parse::<AdminType>(), Ok(admin_type));
        }
    }

    #[test]
    fn admin_type_serde_uses_kebab_case() {
        let json = serde_json::to_string(&AdminType::CountryAdmin).expect("serialize");
        assert_eq!(json, "\"country-admin\"");
    }
}
