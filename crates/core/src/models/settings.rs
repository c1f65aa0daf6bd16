use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Which clock decides the day-of-month of a mint and of the reference date.
///
/// The deployed web client extracted days in the server's local zone.
/// `Utc` is the default because it gives the same answer on every host;
/// `Local` reproduces the old behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DayBoundary {
    #[default]
    Utc,
    /// The host's local time zone
    Local,
    /// A fixed offset east of UTC, in seconds (e.g. 32400 for KST)
    FixedOffset { seconds: i32 },
}

/// Runtime configuration for [`crate::ComoCalendar`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Time zone used to turn instants into days of the month.
    pub day_boundary: DayBoundary,

    /// Base URL of the indexer HTTP API. No indexer source is registered
    /// when unset.
    pub indexer_url: Option<String>,

    /// Timeout for indexer requests.
    pub request_timeout_secs: u64,
}

impl Settings {
    /// Reject values that deserialize fine but can't be used.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let DayBoundary::FixedOffset { seconds } = self.day_boundary {
            if FixedOffset::east_opt(seconds).is_none() {
                return Err(CoreError::Deserialization(format!(
                    "day_boundary offset out of range: {seconds}s"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            day_boundary: DayBoundary::Utc,
            indexer_url: None,
            request_timeout_secs: 30,
        }
    }
}
