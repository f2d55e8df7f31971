//! Subscription plan feature gating.
//!
//! Plan-to-feature entitlements are intentionally data, not logic: the
//! catalog is a plain table so entitlements can be audited and tested as
//! rows rather than as branching code. The default table is cumulative -
//! each plan's set is built on top of the previous one - so the intended
//! inclusion ordering (`enterprise ⊇ pro ⊇ free`) holds by construction.

use std::collections::{HashMap, HashSet};

use crate::types::SubscriptionPlan;

/// Features available on the free plan.
const FREE_FEATURES: &[&str] = &["dashboard", "basic_reports", "community"];

/// Features added by the pro plan.
const PRO_FEATURES: &[&str] = &["challenges", "advanced_reports", "custom_branding"];

/// Features added by the enterprise plan.
const ENTERPRISE_FEATURES: &[&str] = &["api_access", "sso", "audit_log", "priority_support"];

/// Static plan → feature-set table.
#[derive(Debug, Clone)]
pub struct FeatureCatalog {
    by_plan: HashMap<SubscriptionPlan, HashSet<String>>,
}

impl FeatureCatalog {
    /// The built-in entitlement table.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut by_plan = HashMap::new();
        let mut features: HashSet<String> = FREE_FEATURES.iter().map(ToString::to_string).collect();
        by_plan.insert(SubscriptionPlan::Free, features.clone());

        features.extend(PRO_FEATURES.iter().map(ToString::to_string));
        by_plan.insert(SubscriptionPlan::Pro, features.clone());

        features.extend(ENTERPRISE_FEATURES.iter().map(ToString::to_string));
        by_plan.insert(SubscriptionPlan::Enterprise, features);

        Self { by_plan }
    }

    /// Builds a catalog from an externally supplied table.
    ///
    /// The table is taken as-is; keeping it monotonic across plans is the
    /// supplier's responsibility, as with the built-in table.
    #[must_use]
    pub fn from_table(table: HashMap<SubscriptionPlan, HashSet<String>>) -> Self {
        Self { by_plan: table }
    }

    /// True iff `feature` is in the plan's feature set.
    ///
    /// A plan absent from the table resolves to the empty set, so the
    /// answer for it is always `false` (closed-world default-deny).
    #[must_use]
    pub fn has_feature(&self, plan: SubscriptionPlan, feature: &str) -> bool {
        self.by_plan.get(&plan).is_some_and(|set| set.contains(feature))
    }

    /// The features unlocked by a plan, sorted for stable display.
    #[must_use]
    pub fn features_for(&self, plan: SubscriptionPlan) -> Vec<&str> {
        let mut features: Vec<&str> = self
            .by_plan
            .get(&plan)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default();
        features.sort_unstable();
        features
    }
}

impl Default for FeatureCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}
