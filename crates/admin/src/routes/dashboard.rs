//! Dashboard overview page.

use askama::Template;
use askama_web::WebTemplate;
use tracing::instrument;

use crate::{error::AppError, filters, middleware::SessionScope, routes::PageContext};

#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    page: PageContext,
    welcome: String,
    role_label: String,
    role_name: String,
    plan_label: String,
    plan_name: String,
    region_name: String,
    features_label: String,
    features: Vec<String>,
}

/// GET / - identity summary and the features unlocked by the current plan.
#[instrument(skip(scope), fields(admin_type = %scope.admin_type()))]
pub async fn index(scope: SessionScope) -> Result<DashboardTemplate, AppError> {
    let user = scope.user();
    let features = scope
        .state()
        .features()
        .features_for(user.plan)
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(DashboardTemplate {
        welcome: scope.t("ui.welcome"),
        role_label: scope.t_admin("admin.role"),
        role_name: user.role.name.clone(),
        plan_label: scope.t_admin("admin.plan"),
        plan_name: user.plan.display_name().to_string(),
        region_name: scope.country().display_name().to_string(),
        features_label: scope.t_admin("admin.features"),
        features,
        page: PageContext::build(&scope, "/"),
    })
}
