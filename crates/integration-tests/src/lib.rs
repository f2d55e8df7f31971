//! Integration test harness for the Stride admin console.
//!
//! Tests drive the full router in-process with `tower::ServiceExt::oneshot`
//! instead of binding a socket. [`TestClient`] keeps a cookie jar across
//! requests, so session continuity (and the durable language cookie) works
//! the same way a browser would exercise it.
//!
//! Run with: `cargo test -p stride-integration-tests`

use std::collections::HashMap;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use stride_admin::{app, config::AdminConfig, state::AppState};

/// Builds the console router with default configuration.
#[must_use]
pub fn test_app() -> Router {
    let config = AdminConfig::from_map(&HashMap::new()).expect("default config loads");
    app(AppState::new(config))
}

/// An in-process client holding cookies across requests.
pub struct TestClient {
    app: Router,
    cookies: HashMap<String, String>,
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClient {
    /// A client against a fresh application instance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            app: test_app(),
            cookies: HashMap::new(),
        }
    }

    /// Pre-seeds a cookie, as if left over from an earlier visit.
    pub fn set_cookie(&mut self, name: &str, value: &str) {
        self.cookies.insert(name.to_string(), value.to_string());
    }

    /// Sends a GET request, carrying and recording cookies.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or routed.
    pub async fn get(&mut self, path: &str) -> Response<Body> {
        let request = self
            .request_builder(path)
            .body(Body::empty())
            .expect("request builds");
        self.send(request).await
    }

    /// Sends a POST with a form-encoded body such as `"language=ar"`.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or routed.
    pub async fn post_form(&mut self, path: &str, body: &str) -> Response<Body> {
        let request = self
            .request_builder(path)
            .method("POST")
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(Body::from(body.to_string()))
            .expect("request builds");
        self.send(request).await
    }

    fn request_builder(&self, path: &str) -> axum::http::request::Builder {
        let mut builder = Request::builder().uri(path);
        if !self.cookies.is_empty() {
            let cookie_header = self
                .cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; ");
            builder = builder.header(header::COOKIE, cookie_header);
        }
        builder
    }

    async fn send(&mut self, request: Request<Body>) -> Response<Body> {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        for value in response.headers().get_all(header::SET_COOKIE) {
            if let Some((name, rest)) = value
                .to_str()
                .ok()
                .and_then(|raw| raw.split(';').next())
                .and_then(|pair| pair.split_once('='))
            {
                self.cookies.insert(name.to_string(), rest.to_string());
            }
        }

        response
    }
}

/// Collects a response body into a string.
///
/// # Panics
///
/// Panics if the body cannot be collected or is not UTF-8.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body is utf-8")
}
