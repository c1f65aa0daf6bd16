use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// When an objekt was minted, as delivered by the indexer.
///
/// Timestamps with an offset are fixed instants. Timestamps without one
/// are wall-clock times in whatever zone the calendar is built in, so their
/// day-of-month is the written day no matter which zone that is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MintedAt {
    Instant(DateTime<Utc>),
    Floating(NaiveDateTime),
}

impl MintedAt {
    /// Day-of-month of this timestamp as seen from `tz`.
    pub fn day_in<Tz: TimeZone>(&self, tz: &Tz) -> u32 {
        match self {
            MintedAt::Instant(instant) => instant.with_timezone(tz).day(),
            MintedAt::Floating(naive) => naive.day(),
        }
    }
}

impl From<DateTime<Utc>> for MintedAt {
    fn from(instant: DateTime<Utc>) -> Self {
        MintedAt::Instant(instant)
    }
}

impl From<NaiveDateTime> for MintedAt {
    fn from(naive: NaiveDateTime) -> Self {
        MintedAt::Floating(naive)
    }
}

impl std::fmt::Display for MintedAt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MintedAt::Instant(instant) => {
                f.write_str(&instant.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            MintedAt::Floating(naive) => write!(f, "{}", naive.format("%Y-%m-%dT%H:%M:%S%.f")),
        }
    }
}

/// A single COMO-granting mint (or transfer-in) of an objekt.
///
/// The objekt pays out `amount` COMO on the same day-of-month as
/// `minted_at`, every month. Only the day-of-month is used when building
/// a calendar; the year and month of the mint are irrelevant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MintEventRecord", into = "MintEventRecord")]
pub struct MintEvent {
    /// Artist the COMO belongs to. Used as an opaque key, never normalized.
    pub artist_id: String,

    /// When the objekt was minted or received
    pub minted_at: MintedAt,

    /// COMO granted per drop. Sign is not validated.
    pub amount: i64,
}

impl MintEvent {
    pub fn new(artist_id: impl Into<String>, minted_at: impl Into<MintedAt>, amount: i64) -> Self {
        Self {
            artist_id: artist_id.into(),
            minted_at: minted_at.into(),
            amount,
        }
    }
}

/// Wire shape of a mint event, as delivered by an indexer.
///
/// `minted_at` is kept as text so that decoding can report a precise
/// [`CoreError::InvalidTimestamp`] instead of a generic serde failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintEventRecord {
    pub artist_id: String,
    pub minted_at: String,
    pub amount: i64,
}

impl TryFrom<MintEventRecord> for MintEvent {
    type Error = CoreError;

    fn try_from(record: MintEventRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            minted_at: parse_minted_at(&record.minted_at)?,
            artist_id: record.artist_id,
            amount: record.amount,
        })
    }
}

impl From<MintEvent> for MintEventRecord {
    fn from(event: MintEvent) -> Self {
        Self {
            artist_id: event.artist_id,
            minted_at: event.minted_at.to_string(),
            amount: event.amount,
        }
    }
}

/// Parse a `mintedAt` value.
///
/// - RFC 3339 (`2024-03-31T12:00:00Z`) and Postgres-style offsets
///   (`2024-03-31 12:00:00+00`, `+09`, `+0900`) give an instant.
/// - Naive date-times (`2024-03-31T12:00:00`, optional fraction, `T` or
///   space) stay floating.
/// - Bare dates (`2024-03-31`) are midnight UTC.
pub fn parse_minted_at(raw: &str) -> Result<MintedAt, CoreError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(MintedAt::Instant(dt.with_timezone(&Utc)));
    }

    for fmt in ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"] {
        if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
            return Ok(MintedAt::Instant(dt.with_timezone(&Utc)));
        }
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(MintedAt::Floating(naive));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(MintedAt::Instant(naive.and_utc()));
        }
    }

    Err(CoreError::InvalidTimestamp(format!(
        "unrecognized mintedAt value: {raw:?}"
    )))
}
