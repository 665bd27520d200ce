//! Shared harness for router tests: a full app over a seeded `MemoryStore`.

#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use notes_server::{AppState, ServerConfig, auth, build_app};
use notes_store::{
    MemoryStore, NoteRepository, UserRepository,
    fixtures::{initial_notes, root_user},
};
use serde_json::Value;
use tower::ServiceExt;

pub const ROOT_PASSWORD: &str = "secret";

pub struct TestApp {
    pub router: Router,
    pub store: MemoryStore,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn content_type(&self) -> &str {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
    }

    pub fn error(&self) -> String {
        self.json()["error"]
            .as_str()
            .expect("error field")
            .to_string()
    }
}

impl TestApp {
    /// App seeded with the initial notes and a `root` user.
    pub async fn new() -> Self {
        Self::with_config(ServerConfig::for_tests()).await
    }

    pub async fn with_config(config: ServerConfig) -> Self {
        let store = MemoryStore::with_notes(initial_notes()).await.unwrap();
        let hash = auth::hash_password(ROOT_PASSWORD.to_string()).await.unwrap();
        store.insert_user(root_user(hash)).await.unwrap();

        let router = build_app(AppState::new(store.clone(), config)).unwrap();
        Self { router, store }
    }

    pub async fn notes_in_db(&self) -> Vec<Value> {
        let notes = self.store.find_all().await.unwrap();
        notes
            .into_iter()
            .map(|n| serde_json::to_value(n).unwrap())
            .collect()
    }

    pub async fn users_in_db(&self) -> Vec<String> {
        self.store
            .list_users()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect()
    }

    /// A well-formed id that no note carries.
    pub async fn non_existing_id(&self) -> String {
        let note = self
            .store
            .create(notes_core::NewNote::new("willremovethissoon"))
            .await
            .unwrap();
        let id = note.id.to_string();
        self.store.delete_by_id(&id).await.unwrap();
        id
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Request::delete(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> TestResponse {
        self.send(json_request("POST", uri, &body, None)).await
    }

    pub async fn put_json(&self, uri: &str, body: Value) -> TestResponse {
        self.send(json_request("PUT", uri, &body, None)).await
    }

    pub async fn post_json_with_token(&self, uri: &str, body: Value, token: &str) -> TestResponse {
        self.send(json_request("POST", uri, &body, Some(token)))
            .await
    }

    pub async fn send_empty(&self, method: &str, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Log in as `root` and return the bearer token.
    pub async fn root_token(&self) -> String {
        self.login("root", ROOT_PASSWORD).await.json()["token"]
            .as_str()
            .unwrap()
            .to_string()
    }

    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        self.post_json(
            "/api/login",
            serde_json::json!({ "username": username, "password": password }),
        )
        .await
    }
}

fn json_request(method: &str, uri: &str, body: &Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}
