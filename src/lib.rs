//! REST resource server for music tracks: paginated listing, lookup,
//! creation, update and soft deletion under `/musics`.

use axum::routing::get;
use axum::{middleware, Router};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;

use crate::endpoint_handlers::{create_music, delete_music, get_music, get_musics, update_music};
use crate::logging_middleware::logging_middleware;
use crate::pagination::PaginationConfig;

pub mod config;
pub mod endpoint_handlers;
pub mod error;
pub mod logging_middleware;
pub mod pagination;
pub mod requests;
pub mod responses;
pub mod validation;

#[derive(Clone)]
pub struct DatabaseState {
    pub connection: DatabaseConnection,
    pub pagination: PaginationConfig,
}

pub fn app(state: DatabaseState) -> Router {
    Router::new()
        .route("/musics", get(get_musics).post(create_music))
        .route(
            "/musics/:id",
            get(get_music).put(update_music).delete(delete_music),
        )
        .layer(middleware::from_fn(logging_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
