use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// COMO attributed to one artist on one day of the month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBucket {
    /// Total COMO for this day, organic and carried
    pub count: i64,

    /// Part of `count` moved here from a day the month doesn't have
    pub carried: i64,
}

impl DayBucket {
    pub fn new(count: i64, carried: i64) -> Self {
        Self { count, carried }
    }

    /// Organic part of the bucket (events that really fall on this day).
    pub fn organic(&self) -> i64 {
        self.count - self.carried
    }
}

/// Per-day, per-artist COMO breakdown for one month.
///
/// Sparse: days without activity are absent rather than zero-filled.
/// Serializes as `{"<day>": {"<artistId>": {"count": n, "carried": n}}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Calendar {
    days: BTreeMap<u32, BTreeMap<String, DayBucket>>,
}

impl Calendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get-or-insert the bucket for `(day, artist_id)`.
    pub(crate) fn bucket_mut(&mut self, day: u32, artist_id: &str) -> &mut DayBucket {
        self.days
            .entry(day)
            .or_default()
            .entry(artist_id.to_string())
            .or_default()
    }

    /// Look up a single bucket.
    pub fn get(&self, day: u32, artist_id: &str) -> Option<&DayBucket> {
        self.days.get(&day)?.get(artist_id)
    }

    /// All artists with activity on `day`.
    pub fn day(&self, day: u32) -> Option<&BTreeMap<String, DayBucket>> {
        self.days.get(&day)
    }

    /// Days with activity, ascending.
    pub fn days(&self) -> impl Iterator<Item = u32> + '_ {
        self.days.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &BTreeMap<String, DayBucket>)> + '_ {
        self.days.iter().map(|(day, artists)| (*day, artists))
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of days with activity.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Sum of `count` over every bucket.
    pub fn total(&self) -> i64 {
        self.days
            .values()
            .flat_map(|artists| artists.values())
            .map(|bucket| bucket.count)
            .sum()
    }

    /// Monthly COMO per artist, sorted by artist id.
    pub fn totals_by_artist(&self) -> BTreeMap<String, i64> {
        let mut totals = BTreeMap::new();
        for artists in self.days.values() {
            for (artist_id, bucket) in artists {
                *totals.entry(artist_id.clone()).or_insert(0) += bucket.count;
            }
        }
        totals
    }
}
