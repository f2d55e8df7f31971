//! Preference endpoints: redirects, session persistence, health.

use axum::http::{StatusCode, header};
use stride_integration_tests::{TestClient, body_string};

#[tokio::test]
async fn health_check_responds_ok() {
    let mut client = TestClient::new();
    let response = client.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn unknown_route_returns_not_found() {
    let mut client = TestClient::new();
    let response = client.get("/no-such-page").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_string(response).await;
    assert!(body.contains("Not found: /no-such-page"));
}

#[tokio::test]
async fn preference_posts_redirect_to_the_dashboard_without_a_referrer() {
    let mut client = TestClient::new();
    let response = client.post_form("/preferences/language", "language=hi").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/")
    );
}

#[tokio::test]
async fn region_switch_persists_within_the_session() {
    let mut client = TestClient::new();

    // The region picker marks the session default.
    let body = body_string(client.get("/").await).await;
    assert!(body.contains(r#"value="india" selected"#));

    let response = client
        .post_form("/preferences/country", "country=united_arab_emirates")
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let body = body_string(client.get("/").await).await;
    assert!(body.contains(r#"value="united_arab_emirates" selected"#));
    assert!(!body.contains(r#"value="india" selected"#));
}

#[tokio::test]
async fn unknown_region_value_is_rejected() {
    let mut client = TestClient::new();
    let response = client
        .post_form("/preferences/country", "country=atlantis")
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn language_choice_spans_identity_switches() {
    let mut client = TestClient::new();
    client.post_form("/preferences/language", "language=ar").await;
    client
        .post_form("/preferences/admin-type", "admin_type=sub-admin")
        .await;

    let body = body_string(client.get("/").await).await;
    assert!(body.contains(r#"dir="rtl""#));
}
