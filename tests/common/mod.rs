//! Shared setup for the HTTP tests: a migrated in-memory database seeded with
//! ten musics, and the router on top of it.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use entities::music;
use migration::{Migrator, MigratorTrait};
use musicbox::pagination::PaginationConfig;
use musicbox::{app, DatabaseState};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::Value;
use tower::util::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub connection: DatabaseConnection,
    /// Seeded rows in creation order: `musics[0]` is "Title 1".
    pub musics: Vec<music::Model>,
}

pub async fn create_test_database() -> DatabaseConnection {
    // A single pooled connection keeps the in-memory database alive and shared.
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let connection = Database::connect(options).await.unwrap();
    Migrator::up(&connection, None).await.unwrap();
    connection
}

pub async fn create_test_app() -> TestApp {
    let connection = create_test_database().await;
    let musics = queries::add_musics(&connection, fixtures::ten_first_musics())
        .await
        .unwrap();
    let router = app(DatabaseState {
        connection: connection.clone(),
        pagination: PaginationConfig::default(),
    });
    TestApp {
        router,
        connection,
        musics,
    }
}

impl TestApp {
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }
}

/// Asserts every key of `expected` is present in `actual` with the same value.
pub fn assert_matches_object(actual: &Value, expected: &Value) {
    let expected = expected.as_object().expect("expected an object");
    for (key, value) in expected {
        assert_eq!(&actual[key], value, "field `{}` differs", key);
    }
}

pub mod fixtures {
    use chrono::{NaiveDate, NaiveTime};
    use entities::music_local_model::MusicModel;
    use serde_json::{json, Value};

    /// "Title 1" to "Title 10", all live.
    pub fn ten_first_musics() -> Vec<MusicModel> {
        (1..=10)
            .map(|n| {
                MusicModel::new(
                    format!("Title {}", n),
                    format!("Artist {}", n),
                    NaiveDate::from_ymd_opt(2020, 1, n).unwrap(),
                    NaiveTime::from_hms_opt(0, 3, n * 5).unwrap(),
                )
                .with_number_views(n as i32 * 100)
            })
            .collect()
    }

    pub fn valid_music() -> Value {
        json!({
            "title": "Title Valid",
            "artist": "Artist Valid",
            "releaseDate": "2021-06-15",
            "duration": "00:04:32",
            "numberViews": 120,
            "feat": true
        })
    }

    pub fn minimum_valid_music() -> Value {
        json!({
            "title": "Title Minimum",
            "artist": "Artist Minimum",
            "releaseDate": "2021-06-15",
            "duration": "00:02:58"
        })
    }
}
