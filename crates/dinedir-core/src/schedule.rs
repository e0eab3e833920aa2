//! Open/closed evaluation against a posted weekly schedule.
//!
//! Schedules are stored in the business's own wall-clock time. Callers hand
//! in an instant already expressed in that zone (any [`chrono::TimeZone`]),
//! and the evaluator reads the local weekday and minute-of-day from it.
//!
//! Windows are inclusive on both ends: a venue posted `9:00 AM – 10:00 PM`
//! reports open at exactly 9:00 and at exactly 22:00.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Minutes in a day. Valid minute-of-day values are `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u16 = 1440;

/// One day's posted hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DayHours {
    Closed,
    Open {
        /// Minutes since local midnight.
        open: u16,
        /// Minutes since local midnight. May be less than `open` for venues
        /// that close after midnight; see [`window_contains`].
        close: u16,
    },
}

impl DayHours {
    /// Returns `true` if `minute` falls inside this day's window.
    ///
    /// Malformed entries (minutes outside the day) are treated as closed.
    #[must_use]
    pub fn contains(&self, minute: u16) -> bool {
        match *self {
            DayHours::Closed => false,
            DayHours::Open { open, close } => {
                if open >= MINUTES_PER_DAY || close >= MINUTES_PER_DAY {
                    return false;
                }
                window_contains(open, close, minute)
            }
        }
    }
}

/// Posted hours for a week, Monday first.
///
/// Fewer than seven entries is legal; missing trailing days are closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule {
    days: Vec<DayHours>,
}

impl WeeklySchedule {
    #[must_use]
    pub fn new(days: Vec<DayHours>) -> Self {
        Self { days }
    }

    /// Entry for a day counted from Monday (`0`) to Sunday (`6`).
    #[must_use]
    pub fn day(&self, days_from_monday: usize) -> Option<&DayHours> {
        self.days.get(days_from_monday)
    }

    #[must_use]
    pub fn days(&self) -> &[DayHours] {
        &self.days
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Decides whether the schedule is open at `at`.
///
/// `at` must already be in the schedule's zone. A day with no entry, or an
/// entry marked closed, is never open.
#[must_use]
pub fn is_open_at<Tz: TimeZone>(schedule: &WeeklySchedule, at: &DateTime<Tz>) -> bool {
    let weekday = at.weekday().num_days_from_monday() as usize;
    // hour() < 24 and minute() < 60, so the sum always fits in u16.
    let minute = u16::try_from(at.hour() * 60 + at.minute()).unwrap_or(u16::MAX);

    schedule
        .day(weekday)
        .is_some_and(|entry| entry.contains(minute))
}

/// Decides whether the schedule is open right now in `zone`.
#[must_use]
pub fn is_open_now<Tz: TimeZone>(schedule: &WeeklySchedule, zone: &Tz) -> bool {
    is_open_at(schedule, &Utc::now().with_timezone(zone))
}

/// Inclusive window check on minute-of-day values.
///
/// A window whose close precedes its open spans midnight. Those are routed
/// through [`overnight_window_contains`].
#[must_use]
pub fn window_contains(open: u16, close: u16, minute: u16) -> bool {
    if close < open {
        return overnight_window_contains(open, close, minute);
    }
    open <= minute && minute <= close
}

/// Overnight windows (e.g. 17:00 to 02:00) are not carried into the next
/// calendar day, so the same-day inclusive range is empty and the venue
/// reads as closed at every minute.
///
/// TODO: decide with product whether late-night venues should wrap; if so,
/// this becomes `minute >= open || minute <= close` plus a previous-day
/// lookup in `is_open_at`.
fn overnight_window_contains(_open: u16, _close: u16, _minute: u16) -> bool {
    false
}
