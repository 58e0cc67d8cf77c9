use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A music track as stored in the `musics` table.
///
/// Values handed out by the queries crate are detached copies: mutating one
/// through the setters changes nothing until it is written back.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "musics")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub artist: String,
    pub release_date: Date,
    pub duration: Time,
    pub number_views: i32,
    pub feat: bool,
    pub deleted: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn set_artist(&mut self, artist: impl Into<String>) {
        self.artist = artist.into();
    }

    pub fn release_date(&self) -> Date {
        self.release_date
    }

    pub fn set_release_date(&mut self, release_date: Date) {
        self.release_date = release_date;
    }

    pub fn duration(&self) -> Time {
        self.duration
    }

    pub fn set_duration(&mut self, duration: Time) {
        self.duration = duration;
    }

    pub fn number_views(&self) -> i32 {
        self.number_views
    }

    pub fn set_number_views(&mut self, number_views: i32) {
        self.number_views = number_views;
    }

    pub fn feat(&self) -> bool {
        self.feat
    }

    pub fn set_feat(&mut self, feat: bool) {
        self.feat = feat;
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub fn created_at(&self) -> DateTimeUtc {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTimeUtc {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

    fn sample() -> Model {
        let stamp = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        Model {
            id: 7,
            title: "Title 7".to_string(),
            artist: "Artist 7".to_string(),
            release_date: NaiveDate::from_ymd_opt(2019, 5, 17).unwrap(),
            duration: NaiveTime::from_hms_opt(0, 3, 21).unwrap(),
            number_views: 0,
            feat: false,
            deleted: false,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    #[test]
    fn setters_only_touch_their_field() {
        let mut music = sample();
        music.set_title("Title 11");
        music.set_artist("Artist 11");
        music.set_number_views(11);
        music.set_feat(true);

        assert_eq!(music.title(), "Title 11");
        assert_eq!(music.artist(), "Artist 11");
        assert_eq!(music.number_views(), 11);
        assert!(music.feat());
        assert_eq!(music.id(), 7);
        assert!(!music.is_deleted());
        assert_eq!(music.created_at(), sample().created_at());
    }

    #[test]
    fn serializes_camel_case_with_iso_timestamps() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["releaseDate"], "2019-05-17");
        assert_eq!(json["duration"], "00:03:21");
        assert_eq!(json["numberViews"], 0);
        assert_eq!(json["deleted"], false);
        assert_eq!(json["createdAt"], "2024-03-01T12:00:00Z");
        assert_eq!(json["updatedAt"], "2024-03-01T12:00:00Z");
    }
}
