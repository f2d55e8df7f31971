//! Permission gating and plan-based feature visibility across identities.

use axum::http::StatusCode;
use stride_integration_tests::{TestClient, body_string};

#[tokio::test]
async fn root_admin_sees_the_full_navigation() {
    let mut client = TestClient::new();
    let body = body_string(client.get("/").await).await;

    assert!(body.contains(r#"href="/users""#));
    assert!(body.contains(r#"href="/reports""#));
    assert!(body.contains(r#"href="/settings""#));
}

#[tokio::test]
async fn sub_admin_navigation_is_narrowed() {
    let mut client = TestClient::new();
    client
        .post_form("/preferences/admin-type", "admin_type=sub-admin")
        .await;

    let body = body_string(client.get("/").await).await;
    assert!(body.contains(r#"href="/reports""#));
    assert!(!body.contains(r#"href="/users""#));
    assert!(!body.contains(r#"href="/settings""#));
}

#[tokio::test]
async fn sub_admin_is_forbidden_from_user_management() {
    let mut client = TestClient::new();
    client
        .post_form("/preferences/admin-type", "admin_type=sub-admin")
        .await;

    let response = client.get("/users").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_string(response).await;
    assert!(body.contains("user_management/view"));
}

#[tokio::test]
async fn settings_page_reflects_edit_capability() {
    // Root admin holds settings/edit.
    let mut client = TestClient::new();
    let body = body_string(client.get("/settings").await).await;
    assert!(body.contains("Can edit"));

    // Country admin only holds settings/view.
    client
        .post_form("/preferences/admin-type", "admin_type=country-admin")
        .await;
    let body = body_string(client.get("/settings").await).await;
    assert!(body.contains("Read only"));
}

#[tokio::test]
async fn dashboard_features_follow_the_active_plan() {
    let mut client = TestClient::new();

    // Root admin is on enterprise: everything is unlocked.
    let body = body_string(client.get("/").await).await;
    assert!(body.contains("api_access"));
    assert!(body.contains("challenges"));
    assert!(body.contains("basic_reports"));

    // Country admin is on pro: enterprise extras disappear.
    client
        .post_form("/preferences/admin-type", "admin_type=country-admin")
        .await;
    let body = body_string(client.get("/").await).await;
    assert!(body.contains("challenges"));
    assert!(!body.contains("api_access"));
    assert!(!body.contains("sso"));

    // Sub admin is on free: only the base tier remains.
    client
        .post_form("/preferences/admin-type", "admin_type=sub-admin")
        .await;
    let body = body_string(client.get("/").await).await;
    assert!(body.contains("basic_reports"));
    assert!(!body.contains("challenges"));
    assert!(!body.contains("priority_support"));
}

#[tokio::test]
async fn identity_switch_does_not_survive_a_new_session() {
    let mut client = TestClient::new();
    client
        .post_form("/preferences/admin-type", "admin_type=sub-admin")
        .await;
    let body = body_string(client.get("/").await).await;
    assert!(!body.contains(r#"href="/users""#));

    // A fresh client has no session: back to the default identity.
    let mut fresh = TestClient::new();
    let body = body_string(fresh.get("/").await).await;
    assert!(body.contains(r#"href="/users""#));
}
