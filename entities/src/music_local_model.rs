use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sea_orm::ActiveValue::{NotSet, Set};

use crate::music::{ActiveModel, Model};

pub const DEFAULT_NUMBER_VIEWS: i32 = 0;
pub const DEFAULT_FEAT: bool = false;

/// The writable fields of a music track, already checked for presence.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct MusicModel {
    pub title: String,
    pub artist: String,
    pub release_date: NaiveDate,
    pub duration: NaiveTime,
    pub number_views: Option<i32>,
    pub feat: Option<bool>,
}

impl MusicModel {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        release_date: NaiveDate,
        duration: NaiveTime,
    ) -> Self {
        MusicModel {
            title: title.into(),
            artist: artist.into(),
            release_date,
            duration,
            number_views: None,
            feat: None,
        }
    }

    pub fn with_number_views(mut self, number_views: i32) -> Self {
        self.number_views = Some(number_views);
        self
    }

    pub fn with_feat(mut self, feat: bool) -> Self {
        self.feat = Some(feat);
        self
    }

    /// Row for a fresh insert. Omitted optional fields take their defaults and
    /// the record always starts out not deleted.
    pub fn into_insert_model(self, now: DateTime<Utc>) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            title: Set(self.title),
            artist: Set(self.artist),
            release_date: Set(self.release_date),
            duration: Set(self.duration),
            number_views: Set(self.number_views.unwrap_or(DEFAULT_NUMBER_VIEWS)),
            feat: Set(self.feat.unwrap_or(DEFAULT_FEAT)),
            deleted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    /// Column set for an update. `deleted` and `created_at` are never written
    /// here; optional fields that were omitted keep their stored value.
    pub fn into_update_model(self, now: DateTime<Utc>) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            title: Set(self.title),
            artist: Set(self.artist),
            release_date: Set(self.release_date),
            duration: Set(self.duration),
            number_views: self.number_views.map_or(NotSet, Set),
            feat: self.feat.map_or(NotSet, Set),
            deleted: NotSet,
            created_at: NotSet,
            updated_at: Set(now),
        }
    }
}

impl From<Model> for MusicModel {
    fn from(model: Model) -> Self {
        MusicModel {
            title: model.title,
            artist: model.artist,
            release_date: model.release_date,
            duration: model.duration,
            number_views: Some(model.number_views),
            feat: Some(model.feat),
        }
    }
}
