//! HTTP route handlers for the console.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                   - Health check
//!
//! # Pages
//! GET  /                         - Dashboard overview
//! GET  /users                    - User management section
//! GET  /reports                  - Reports section
//! GET  /settings                 - Settings section
//!
//! # Preferences (session setters)
//! POST /preferences/language     - Set UI language (persists a cookie)
//! POST /preferences/admin-type   - Switch the active admin identity
//! POST /preferences/country      - Switch the displayed region
//! ```

pub mod dashboard;
pub mod preferences;
pub mod sections;

use axum::{
    Router,
    routing::{get, post},
};

use stride_core::{AdminType, Country, Language};

use crate::{middleware::SessionScope, state::AppState};

/// Builds the page and preference routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/users", get(sections::users))
        .route("/reports", get(sections::reports))
        .route("/settings", get(sections::settings))
        .route("/preferences/language", post(preferences::set_language))
        .route("/preferences/admin-type", post(preferences::set_admin_type))
        .route("/preferences/country", post(preferences::set_country))
}

/// A top-navigation entry. Only entries the current role can view are
/// built at all; gating happens here, not in the template.
#[derive(Debug, Clone)]
pub struct NavItem {
    pub href: &'static str,
    pub label: String,
    pub active: bool,
}

/// A language-picker option, built from [`Language::ALL`] metadata.
#[derive(Debug, Clone)]
pub struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    pub selected: bool,
}

/// A generic picker option for admin type and region.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: String,
    pub selected: bool,
}

/// Layout data shared by every page template.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub lang: &'static str,
    pub dir: &'static str,
    pub current_path: &'static str,
    pub nav: Vec<NavItem>,
    pub languages: Vec<LanguageOption>,
    pub admin_types: Vec<SelectOption>,
    pub countries: Vec<SelectOption>,
    pub language_label: String,
    pub identity_label: String,
    pub region_label: String,
}

/// Nav entries: (path, module the entry belongs to, UI string key).
const NAV_ENTRIES: &[(&str, &str, &str)] = &[
    ("/", "dashboard", "ui.dashboard"),
    ("/users", "user_management", "ui.users"),
    ("/reports", "reports", "ui.reports"),
    ("/settings", "settings", "ui.settings"),
];

impl PageContext {
    /// Builds the layout data for the current scope.
    #[must_use]
    pub fn build(scope: &SessionScope, current_path: &'static str) -> Self {
        let nav = NAV_ENTRIES
            .iter()
            .filter(|&&(_, module, _)| scope.has_permission(module, "view"))
            .map(|&(href, _, label_key)| NavItem {
                href,
                label: scope.t(label_key),
                active: href == current_path,
            })
            .collect();

        let languages = Language::ALL
            .into_iter()
            .map(|language| LanguageOption {
                code: language.as_str(),
                name: language.display_name(),
                flag: language.flag(),
                selected: language == scope.language(),
            })
            .collect();

        let admin_types = AdminType::ALL
            .into_iter()
            .map(|admin_type| SelectOption {
                value: admin_type.as_str(),
                label: admin_type.display_name().to_string(),
                selected: admin_type == scope.admin_type(),
            })
            .collect();

        let countries = Country::ALL
            .into_iter()
            .map(|country| SelectOption {
                value: country.as_str(),
                label: country.display_name().to_string(),
                selected: country == scope.country(),
            })
            .collect();

        Self {
            lang: scope.language().as_str(),
            dir: scope.direction().as_str(),
            current_path,
            nav,
            languages,
            admin_types,
            countries,
            language_label: scope.t("ui.language"),
            identity_label: scope.t_admin("admin.identity"),
            region_label: scope.t("ui.region"),
        }
    }
}
