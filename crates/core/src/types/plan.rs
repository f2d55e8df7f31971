//! Subscription plans.

use serde::{Deserialize, Serialize};

/// A subscription plan, ordered by intended feature-set inclusion.
///
/// The derived `Ord` follows declaration order, so
/// `Free < Pro < Enterprise`. The feature lists themselves live in
/// [`crate::features::FeatureCatalog`]; the catalog's default table is
/// built cumulatively so the inclusion ordering holds by construction
/// rather than being enforced at runtime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionPlan {
    #[default]
    Free,
    Pro,
    Enterprise,
}

impl SubscriptionPlan {
    /// Every plan, from least to most inclusive.
    pub const ALL: [Self; 3] = [Self::Free, Self::Pro, Self::Enterprise];

    /// Stable identifier for the plan.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
            Self::Enterprise => "enterprise",
        }
    }

    /// Human-readable plan name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Pro => "Pro",
            Self::Enterprise => "Enterprise",
        }
    }
}

impl std::fmt::Display for SubscriptionPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SubscriptionPlan {
    type Err = super::UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Self::Free),
            "pro" => Ok(Self::Pro),
            "enterprise" => Ok(Self::Enterprise),
            _ => Err(super::UnknownVariant::new("subscription plan", s)),
        }
    }
}
