use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use entities::music;
use log::info;

use crate::error::ApiError;
use crate::pagination::{Page, PageQuery};
use crate::requests::music_request::MusicPayload;
use crate::validation::validate_music;
use crate::DatabaseState;

/// Ids that are not numbers cannot exist, so they are reported like any other
/// unknown music.
fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound)
}

fn decode_body(body: Result<Json<MusicPayload>, JsonRejection>) -> Result<MusicPayload, ApiError> {
    body.map(|Json(payload)| payload)
        .map_err(|rejection| ApiError::MalformedBody(rejection.body_text()))
}

pub async fn get_musics(
    State(state): State<DatabaseState>,
    query_option: Option<Query<PageQuery>>,
) -> Result<Json<Page<music::Model>>, ApiError> {
    let query = query_option.map(|Query(query)| query).unwrap_or_default();
    let window = state.pagination.window(&query);
    let (musics, total) =
        queries::get_musics_page(&state.connection, window.offset, window.limit).await?;
    Ok(Json(Page::new(musics, window, total)))
}

pub async fn get_music(
    State(state): State<DatabaseState>,
    Path(id): Path<String>,
) -> Result<Json<music::Model>, ApiError> {
    let id = parse_id(&id)?;
    let music = queries::get_music_by_id(&state.connection, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(music))
}

pub async fn create_music(
    State(state): State<DatabaseState>,
    body: Result<Json<MusicPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let music = validate_music(decode_body(body)?)?;
    let created = queries::add_music(&state.connection, music).await?;
    info!("Created music {} with id {}", created.title, created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

/// Validation runs before the lookup: an invalid body is reported as such even
/// when the id does not exist.
pub async fn update_music(
    State(state): State<DatabaseState>,
    Path(id): Path<String>,
    body: Result<Json<MusicPayload>, JsonRejection>,
) -> Result<Json<Vec<u64>>, ApiError> {
    let music = validate_music(decode_body(body)?)?;
    let id = parse_id(&id)?;
    let rows = queries::update_music(&state.connection, id, music).await?;
    if rows == 0 {
        return Err(ApiError::NotFound);
    }
    info!("Updated music {}", id);
    Ok(Json(vec![rows]))
}

pub async fn delete_music(
    State(state): State<DatabaseState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    if !queries::soft_delete_music(&state.connection, id).await? {
        return Err(ApiError::NotFound);
    }
    info!("Logically deleted music {}", id);
    Ok(StatusCode::OK)
}
