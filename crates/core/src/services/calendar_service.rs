use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, TimeZone, Utc};

use crate::models::calendar::Calendar;
use crate::models::mint::MintEvent;
use crate::models::settings::DayBoundary;

/// Number of days in the month containing `date` (28..=31).
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        // Only reachable for December of NaiveDate::MAX's year
        .unwrap_or(31)
}

/// Build the COMO calendar for the month of `reference`.
///
/// Each event lands on its day-of-month, read in `tz` (floating
/// timestamps keep their written day). Events whose day
/// doesn't exist in the reference month (the 29th-31st of a shorter month)
/// are carried onto the month's last day, counted in both `count` and
/// `carried`. Only the year and month of `reference` are used.
///
/// Pure and order-independent: the clock is never consulted, and the
/// result contains only days `1..=days_in_month(reference)`.
pub fn build_calendar<Tz: TimeZone>(
    reference: NaiveDate,
    events: &[MintEvent],
    tz: &Tz,
) -> Calendar {
    let last_day = days_in_month(reference);
    let mut calendar = Calendar::new();

    for event in events {
        let day = event.minted_at.day_in(tz);

        if day <= last_day {
            calendar.bucket_mut(day, &event.artist_id).count += event.amount;
        } else {
            let bucket = calendar.bucket_mut(last_day, &event.artist_id);
            bucket.count += event.amount;
            bucket.carried += event.amount;
        }
    }

    calendar
}

/// Builds calendars using the configured [`DayBoundary`].
pub struct CalendarService {
    day_boundary: DayBoundary,
}

impl CalendarService {
    pub fn new(day_boundary: DayBoundary) -> Self {
        Self { day_boundary }
    }

    pub fn day_boundary(&self) -> DayBoundary {
        self.day_boundary
    }

    /// Build the calendar for the month that `reference` falls in,
    /// as seen from the configured zone.
    pub fn build(&self, reference: DateTime<Utc>, events: &[MintEvent]) -> Calendar {
        let calendar = match self.day_boundary {
            DayBoundary::Utc => Self::build_in(reference, events, &Utc),
            DayBoundary::Local => Self::build_in(reference, events, &Local),
            DayBoundary::FixedOffset { seconds } => match FixedOffset::east_opt(seconds) {
                Some(offset) => Self::build_in(reference, events, &offset),
                None => {
                    tracing::warn!(seconds, "Offset out of range, falling back to UTC");
                    Self::build_in(reference, events, &Utc)
                }
            },
        };

        tracing::debug!(
            events = events.len(),
            days = calendar.len(),
            "Built COMO calendar"
        );
        calendar
    }

    fn build_in<Tz: TimeZone>(
        reference: DateTime<Utc>,
        events: &[MintEvent],
        tz: &Tz,
    ) -> Calendar {
        let reference_date = reference.with_timezone(tz).date_naive();
        build_calendar(reference_date, events, tz)
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new(DayBoundary::default())
    }
}
