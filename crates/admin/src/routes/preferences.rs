//! Preference setters: the POST endpoints behind the header pickers.
//!
//! All three redirect back to the referring page so the picker forms
//! work without client-side scripting beyond `form.submit()`. Only the
//! language setter writes a durable cookie; identity and region live in
//! the session alone and reset when it expires.

use axum::{
    Form,
    http::{
        HeaderMap, Uri,
        header::{REFERER, SET_COOKIE},
    },
    response::{AppendHeaders, IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::instrument;

use stride_core::{AdminType, Country, Language};

use crate::{error::AppError, middleware::SessionScope};

#[derive(Debug, Deserialize)]
pub struct LanguageForm {
    pub language: Language,
}

#[derive(Debug, Deserialize)]
pub struct AdminTypeForm {
    pub admin_type: AdminType,
}

#[derive(Debug, Deserialize)]
pub struct CountryForm {
    pub country: Country,
}

/// POST /preferences/language
///
/// Stores the choice in the session and sets the durable cookie so it
/// survives a session expiry or server restart.
#[instrument(skip(scope, headers))]
pub async fn set_language(
    scope: SessionScope,
    headers: HeaderMap,
    Form(form): Form<LanguageForm>,
) -> Result<impl IntoResponse, AppError> {
    scope.set_language(form.language).await?;
    tracing::info!(language = %form.language, "language changed");

    let cookie = scope.language_cookie(form.language);
    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        back_to_referrer(&headers),
    ))
}

/// POST /preferences/admin-type
#[instrument(skip(scope, headers))]
pub async fn set_admin_type(
    scope: SessionScope,
    headers: HeaderMap,
    Form(form): Form<AdminTypeForm>,
) -> Result<impl IntoResponse, AppError> {
    scope.set_admin_type(form.admin_type).await?;
    tracing::info!(admin_type = %form.admin_type, "admin identity switched");
    Ok(back_to_referrer(&headers))
}

/// POST /preferences/country
#[instrument(skip(scope, headers))]
pub async fn set_country(
    scope: SessionScope,
    headers: HeaderMap,
    Form(form): Form<CountryForm>,
) -> Result<impl IntoResponse, AppError> {
    scope.set_country(form.country).await?;
    tracing::info!(country = %form.country, "region switched");
    Ok(back_to_referrer(&headers))
}

/// Redirects to the page the form was submitted from, or the dashboard
/// when the `Referer` header is absent or unreadable.
///
/// Only the path-and-query of the referrer is used, so the response can
/// never redirect off this origin no matter what the header carries.
fn back_to_referrer(headers: &HeaderMap) -> Redirect {
    let target = headers
        .get(REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| raw.parse::<Uri>().ok())
        .and_then(|uri| uri.path_and_query().map(|path| path.as_str().to_string()))
        // A leading "//" would be protocol-relative, leaving the origin.
        .filter(|path| path.starts_with('/') && !path.starts_with("//"))
        .unwrap_or_else(|| "/".to_string());
    Redirect::to(&target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn redirect_falls_back_to_dashboard() {
        let redirect = back_to_referrer(&HeaderMap::new());
        let response = redirect.into_response();
        assert_eq!(
            response.headers().get("location"),
            Some(&HeaderValue::from_static("/"))
        );
    }

    #[test]
    fn redirect_follows_referrer() {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, HeaderValue::from_static("/settings"));
        let response = back_to_referrer(&headers).into_response();
        assert_eq!(
            response.headers().get("location"),
            Some(&HeaderValue::from_static("/settings"))
        );
    }

    #[test]
    fn redirect_keeps_only_the_path_of_an_absolute_referrer() {
        let mut headers = HeaderMap::new();
        headers.insert(
            REFERER,
            HeaderValue::from_static("https://evil.example/phish?next=1"),
        );
        let response = back_to_referrer(&headers).into_response();
        assert_eq!(
            response.headers().get("location"),
            Some(&HeaderValue::from_static("/phish?next=1"))
        );
    }

    #[test]
    fn protocol_relative_referrer_cannot_leave_the_origin() {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, HeaderValue::from_static("//evil.example/phish"));
        let response = back_to_referrer(&headers).into_response();
        let location = response
            .headers()
            .get("location")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        assert!(!location.starts_with("//"), "got {location}");
        assert!(location.starts_with('/'));
    }

    #[test]
    fn unparseable_referrer_falls_back_to_dashboard() {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, HeaderValue::from_static("http://"));
        let response = back_to_referrer(&headers).into_response();
        assert_eq!(
            response.headers().get("location"),
            Some(&HeaderValue::from_static("/"))
        );
    }
}
