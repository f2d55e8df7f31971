//! Permission-gated console sections.
//!
//! Each section belongs to a module in the permission model. A role
//! without `<module>/view` gets a 403 before anything renders; `edit`
//! only changes what the page says about itself.

use askama::Template;
use askama_web::WebTemplate;
use tracing::instrument;

use crate::{error::AppError, filters, middleware::SessionScope, routes::PageContext};

#[derive(Template, WebTemplate)]
#[template(path = "section.html")]
pub struct SectionTemplate {
    page: PageContext,
    heading: String,
    access_label: String,
}

/// GET /users
#[instrument(skip(scope), fields(admin_type = %scope.admin_type()))]
pub async fn users(scope: SessionScope) -> Result<SectionTemplate, AppError> {
    section(scope, "user_management", "ui.users", "/users")
}

/// GET /reports
#[instrument(skip(scope), fields(admin_type = %scope.admin_type()))]
pub async fn reports(scope: SessionScope) -> Result<SectionTemplate, AppError> {
    section(scope, "reports", "ui.reports", "/reports")
}

/// GET /settings
#[instrument(skip(scope), fields(admin_type = %scope.admin_type()))]
pub async fn settings(scope: SessionScope) -> Result<SectionTemplate, AppError> {
    section(scope, "settings", "ui.settings", "/settings")
}

fn section(
    scope: SessionScope,
    module: &str,
    heading_key: &str,
    path: &'static str,
) -> Result<SectionTemplate, AppError> {
    if !scope.has_permission(module, "view") {
        return Err(AppError::Forbidden(format!("{module}/view")));
    }

    let access_key = if scope.has_permission(module, "edit") {
        "admin.access.editable"
    } else {
        "admin.access.read_only"
    };

    Ok(SectionTemplate {
        heading: scope.t(heading_key),
        access_label: scope.t_admin(access_key),
        page: PageContext::build(&scope, path),
    })
}
