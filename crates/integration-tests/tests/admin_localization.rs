//! Language selection, direction flips, and the durable language cookie.

use axum::http::{StatusCode, header};
use stride_core::Language;
use stride_integration_tests::{TestClient, body_string};

#[tokio::test]
async fn default_render_is_english_ltr() {
    let mut client = TestClient::new();
    let response = client.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains(r#"lang="en""#));
    assert!(body.contains(r#"dir="ltr""#));
    assert!(body.contains("Welcome"));
    assert!(body.contains("Dashboard"));
}

#[tokio::test]
async fn switching_to_arabic_flips_direction_and_sets_cookie() {
    let mut client = TestClient::new();

    let response = client.post_form("/preferences/language", "language=ar").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let set_cookie: Vec<_> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect();
    assert!(
        set_cookie
            .iter()
            .any(|cookie| cookie.starts_with("preferred_language=ar")),
        "expected durable language cookie, got {set_cookie:?}"
    );

    let body = body_string(client.get("/").await).await;
    assert!(body.contains(r#"lang="ar""#));
    assert!(body.contains(r#"dir="rtl""#));
    assert!(body.contains("مرحبا"));
}

#[tokio::test]
async fn hindi_is_left_to_right() {
    let mut client = TestClient::new();
    client.post_form("/preferences/language", "language=hi").await;

    let body = body_string(client.get("/").await).await;
    assert!(body.contains(r#"lang="hi""#));
    assert!(body.contains(r#"dir="ltr""#));
    assert!(body.contains("स्वागत है"));
}

#[tokio::test]
async fn durable_cookie_restores_language_in_a_fresh_session() {
    // Simulates a returning visitor: no session, only the old cookie.
    let mut client = TestClient::new();
    client.set_cookie("preferred_language", "ar");

    let body = body_string(client.get("/").await).await;
    assert!(body.contains(r#"dir="rtl""#));
    assert!(body.contains("اللغة"));
}

#[tokio::test]
async fn every_language_round_trips_across_a_restart() {
    for language in Language::ALL {
        let code = language.as_str();
        let mut client = TestClient::new();
        let response = client
            .post_form("/preferences/language", &format!("language={code}"))
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "set {code}");

        // A fresh app instance with only the durable cookie, as after a
        // server restart and session loss.
        let mut restarted = TestClient::new();
        restarted.set_cookie("preferred_language", code);
        let body = body_string(restarted.get("/").await).await;
        assert!(body.contains(&format!(r#"lang="{code}""#)), "restore {code}");
    }
}

#[tokio::test]
async fn unsupported_cookie_value_degrades_to_default() {
    let mut client = TestClient::new();
    client.set_cookie("preferred_language", "fr");

    let response = client.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains(r#"lang="en""#));
    assert!(body.contains(r#"dir="ltr""#));
}

#[tokio::test]
async fn unsupported_form_value_is_rejected_and_state_unchanged() {
    let mut client = TestClient::new();

    let response = client.post_form("/preferences/language", "language=fr").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_string(client.get("/").await).await;
    assert!(body.contains(r#"lang="en""#));
}

#[tokio::test]
async fn cookie_changes_mid_session_are_ignored() {
    // Restoration happens once, on session activation; after that the
    // session register wins.
    let mut client = TestClient::new();
    let body = body_string(client.get("/").await).await;
    assert!(body.contains(r#"lang="en""#));

    client.set_cookie("preferred_language", "ar");
    let body = body_string(client.get("/").await).await;
    assert!(body.contains(r#"lang="en""#));
}
