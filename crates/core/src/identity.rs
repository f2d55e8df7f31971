//! Admin identity registry.
//!
//! Maps every [`AdminType`] to its [`AdminUser`] record. The mapping is
//! total by construction: the registry holds one record per enum variant
//! and `lookup` selects by `match`, so a missing mapping is a compile
//! error rather than a runtime case.

use crate::types::{AdminType, AdminUser, Country, Permission, Role, SubscriptionPlan};

/// Registry of the admin records selectable in the console.
///
/// Records are immutable once the registry is built; switching the active
/// admin type changes which record the session reads, never the records.
#[derive(Debug, Clone)]
pub struct IdentityRegistry {
    root: AdminUser,
    country: AdminUser,
    sub: AdminUser,
}

impl IdentityRegistry {
    /// Builds a registry from a record constructor covering every variant.
    pub fn new(mut record_for: impl FnMut(AdminType) -> AdminUser) -> Self {
        Self {
            root: record_for(AdminType::RootAdmin),
            country: record_for(AdminType::CountryAdmin),
            sub: record_for(AdminType::SubAdmin),
        }
    }

    /// The built-in record table.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(default_record)
    }

    /// The record for an admin type. Total over the enum.
    #[must_use]
    pub fn lookup(&self, admin_type: AdminType) -> &AdminUser {
        match admin_type {
            AdminType::RootAdmin => &self.root,
            AdminType::CountryAdmin => &self.country,
            AdminType::SubAdmin => &self.sub,
        }
    }
}

impl Default for IdentityRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Permission pairs for (module, view) and (module, edit).
fn manage(module: &str) -> [Permission; 2] {
    [
        Permission::new(module, "view"),
        Permission::new(module, "edit"),
    ]
}

fn default_record(admin_type: AdminType) -> AdminUser {
    match admin_type {
        AdminType::RootAdmin => AdminUser {
            admin_type,
            role: Role::new(
                "Platform Administrator",
                [
                    manage("dashboard"),
                    manage("cms_content"),
                    manage("user_management"),
                    manage("reports"),
                    manage("settings"),
                ]
                .into_iter()
                .flatten(),
            ),
            plan: SubscriptionPlan::Enterprise,
            region: Country::India,
        },
        AdminType::CountryAdmin => AdminUser {
            admin_type,
            role: Role::new(
                "Country Operations",
                manage("cms_content").into_iter().chain([
                    Permission::new("dashboard", "view"),
                    Permission::new("user_management", "view"),
                    Permission::new("reports", "view"),
                    Permission::new("settings", "view"),
                ]),
            ),
            plan: SubscriptionPlan::Pro,
            region: Country::UnitedArabEmirates,
        },
        AdminType::SubAdmin => AdminUser {
            admin_type,
            role: Role::new(
                "Support Viewer",
                [
                    Permission::new("dashboard", "view"),
                    Permission::new("reports", "view"),
                ],
            ),
            plan: SubscriptionPlan::Free,
            region: Country::India,
        },
    }
}
