use chrono::{DateTime, NaiveDate, NaiveTime};
use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Body of `POST /musics` and `PUT /musics/:id`.
///
/// Every field is optional at this stage so that a missing one surfaces as a
/// validation message instead of a decoding failure. Read-only fields sent
/// back by clients (`id`, `deleted`, timestamps) are ignored.
#[derive(Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MusicPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default, deserialize_with = "deserialize_release_date")]
    pub release_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_duration")]
    pub duration: Option<NaiveTime>,
    #[serde(default)]
    pub number_views: Option<i32>,
    #[serde(default)]
    pub feat: Option<bool>,
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp, keeping the UTC date.
pub fn parse_release_date(raw: &str) -> Result<NaiveDate, String> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|timestamp| timestamp.naive_utc().date())
        .map_err(|_| format!("invalid releaseDate `{}`, expected YYYY-MM-DD", raw))
}

/// Accepts `HH:MM:SS[.fff]` or a full RFC 3339 timestamp, keeping the UTC time.
pub fn parse_duration(raw: &str) -> Result<NaiveTime, String> {
    if let Ok(time) = NaiveTime::parse_from_str(raw, "%H:%M:%S%.f") {
        return Ok(time);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|timestamp| timestamp.naive_utc().time())
        .map_err(|_| format!("invalid duration `{}`, expected HH:MM:SS", raw))
}

// An empty string counts as absent.
fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.trim().is_empty())
}

fn deserialize_release_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    non_empty(Option::deserialize(deserializer)?)
        .map(|raw| parse_release_date(&raw).map_err(D::Error::custom))
        .transpose()
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
where
    D: Deserializer<'de>,
{
    non_empty(Option::deserialize(deserializer)?)
        .map(|raw| parse_duration(&raw).map_err(D::Error::custom))
        .transpose()
}
