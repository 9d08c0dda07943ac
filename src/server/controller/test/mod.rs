use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::de::DeserializeOwned;
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;
use tower_sessions::SessionManagerLayer;

use crate::server::{router, state::AppState};


/// Router wired to an in-memory database with every blog table.
struct TestApp {
    _test: TestContext,
    db: DatabaseConnection,
    app: Router,
}

impl TestApp {
    async fn new() -> Self {
        let mut test = TestBuilder::new().with_blog_tables().build().await.unwrap();
        let store = test.session_store().await.unwrap();
        let db = test.db.clone().unwrap();

        let app = router::app(
            AppState::new(db.clone()),
            SessionManagerLayer::new(store).with_secure(false),
        );

        Self {
            _test: test,
            db,
            app,
        }
    }

    async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(request).await.unwrap()
    }
}

/// `Authorization` header value for a factory user.
fn basic_auth(email: &str) -> String {
    let credentials = format!("{}:{}", email, factory::DEFAULT_PASSWORD);
    format!("Basic {}", STANDARD.encode(credentials))
}

fn get(uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::empty()).unwrap()
}

fn form(method: Method, uri: &str, body: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn json(method: Method, uri: &str, body: serde_json::Value, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

/// `name=value` pair of the session cookie set by a response.
fn session_cookie(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .unwrap()
        .to_string()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
