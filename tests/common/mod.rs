//! In-process HTTP test client: dispatches requests against the assembled
//! router via `tower::ServiceExt::oneshot`, no TCP port involved.

#![allow(dead_code)]

use std::str::FromStr;

use axum::body::Body;
use axum::Router;
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde::Serialize;
use serde_json::{json, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tower::util::ServiceExt;

use museum_api::state::AppState;

pub struct TestApp {
    router: Router,
    pool: SqlitePool,
}

impl TestApp {
    /// Fresh app over a fresh in-memory database with migrations applied.
    pub async fn spawn() -> Self {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .foreign_keys(true);
        // A single connection keeps every query on the same in-memory db.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .expect("failed to open in-memory database");
        museum_api::MIGRATOR
            .run(&pool)
            .await
            .expect("failed to apply migrations");
        Self {
            router: museum_api::app(AppState::new(pool.clone())),
            pool,
        }
    }

    /// Direct access to the backing pool, for assertions on columns no
    /// projection exposes.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.send(Method::GET, path, None).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        self.send(Method::DELETE, path, None).await
    }

    pub async fn post(&self, path: &str, body: &impl Serialize) -> TestResponse {
        self.send(Method::POST, path, Some(serde_json::to_vec(body).unwrap()))
            .await
    }

    pub async fn put(&self, path: &str, body: &impl Serialize) -> TestResponse {
        self.send(Method::PUT, path, Some(serde_json::to_vec(body).unwrap()))
            .await
    }

    async fn send(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        let body = match body {
            Some(bytes) => {
                builder = builder.header(CONTENT_TYPE, "application/json");
                Body::from(bytes)
            }
            None => Body::empty(),
        };
        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .expect("failed to send request");

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("failed to read response body")
            .to_bytes();
        TestResponse { status, body }
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }
}

// Fixture builders. Each test spawns its own app, so fixed names only need
// to vary when a single test creates several rows.

pub async fn create_user(app: &TestApp, email: &str) -> i64 {
    let response = app
        .post(
            "/users",
            &json!({
                "firstName": "John",
                "lastName": "Doe",
                "email": email,
                "password": "Secret12"
            }),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.json()["id"].as_i64().unwrap()
}

pub async fn create_author(app: &TestApp, username: &str, email: &str) -> i64 {
    let user_id = create_user(app, email).await;
    let response = app
        .post("/authors", &json!({ "username": username, "userId": user_id }))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.json()["id"].as_i64().unwrap()
}

pub async fn create_artist(app: &TestApp) -> i64 {
    let response = app
        .post(
            "/artists",
            &json!({ "firstName": "Frida", "lastName": "Kahlo" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.json()["id"].as_i64().unwrap()
}
