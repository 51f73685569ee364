use std::sync::Arc;

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use notes_api_rust::config::{
    AppConfig, DatabaseConfig, Environment, SecurityConfig, ServerConfig,
};
use notes_api_rust::database::memory::{InMemoryNoteStore, InMemoryUserStore};
use notes_api_rust::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Router wired to in-memory stores, plus the concrete store handles so
/// tests can assert on what was (or was not) persisted.
pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUserStore>,
    pub notes: Arc<InMemoryNoteStore>,
}

pub fn test_app() -> TestApp {
    let users = Arc::new(InMemoryUserStore::new());
    let notes = Arc::new(InMemoryNoteStore::new());

    let config = AppConfig {
        environment: Environment::Development,
        server: ServerConfig { port: 0 },
        database: DatabaseConfig {
            max_connections: 1,
            connection_timeout_secs: 5,
        },
        security: SecurityConfig {
            jwt_secret: TEST_SECRET.to_string(),
            jwt_expiry_hours: 24,
        },
    };

    let state = AppState::new(config, users.clone(), notes.clone());

    TestApp {
        router: notes_api_rust::app(state),
        users,
        notes,
    }
}

/// Send one request through the router and decode the JSON response body.
pub async fn send(
    router: &Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header("auth-token", token);
    }

    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    let response = router.clone().oneshot(request).await?;
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, value))
}

/// Register a user and return its auth token.
pub async fn register(app: &TestApp, name: &str, email: &str, password: &str) -> Result<String> {
    let (status, body) = send(
        &app.router,
        Method::POST,
        "/api/auth/createUser",
        None,
        Some(json!({ "name": name, "email": email, "password": password })),
    )
    .await?;

    anyhow::ensure!(status == StatusCode::OK, "registration failed: {body}");
    Ok(body["authToken"]
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("missing authToken in {body}"))?
        .to_string())
}

/// Create a note for the given token and return the response body.
pub async fn create_note(
    app: &TestApp,
    token: &str,
    title: &str,
    description: &str,
    tag: Option<&str>,
) -> Result<Value> {
    let mut payload = json!({ "title": title, "description": description });
    if let Some(tag) = tag {
        payload["tag"] = json!(tag);
    }

    let (status, body) = send(
        &app.router,
        Method::POST,
        "/api/notes/createNote",
        Some(token),
        Some(payload),
    )
    .await?;

    anyhow::ensure!(status == StatusCode::OK, "create note failed: {body}");
    Ok(body)
}
