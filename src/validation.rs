use entities::music_local_model::MusicModel;
use thiserror::Error;

use crate::requests::music_request::MusicPayload;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required!")]
    TitleRequired,

    #[error("Artist is required!")]
    ArtistRequired,

    #[error("Release Date is required!")]
    ReleaseDateRequired,

    #[error("Duration is required!")]
    DurationRequired,
}

/// Checks the required fields of a music in the order title, artist, release
/// date, duration, stopping at the first one that is missing.
pub fn validate_music(payload: MusicPayload) -> Result<MusicModel, ValidationError> {
    let title = required_text(payload.title).ok_or(ValidationError::TitleRequired)?;
    let artist = required_text(payload.artist).ok_or(ValidationError::ArtistRequired)?;
    let release_date = payload
        .release_date
        .ok_or(ValidationError::ReleaseDateRequired)?;
    let duration = payload.duration.ok_or(ValidationError::DurationRequired)?;

    Ok(MusicModel {
        title,
        artist,
        release_date,
        duration,
        number_views: payload.number_views,
        feat: payload.feat,
    })
}

fn required_text(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
