//! Posted-hours parsing.
//!
//! Input lines look like the places API's weekday descriptions:
//!
//! ```text
//! Monday: 11:00 AM – 10:00 PM
//! Tuesday: 5:00 – 10:00 PM
//! Wednesday: Closed
//! Thursday: Open 24 hours
//! Friday: 11:00 AM – 2:00 PM, 5:00 – 11:00 PM
//! ```
//!
//! The scanner is hand-written rather than regex based. Anything it cannot
//! read leaves that day without an entry, which evaluates as closed.

use chrono::Weekday;
use dinedir_core::schedule::MINUTES_PER_DAY;
use dinedir_core::{DayHours, WeeklySchedule};

/// Builds a Monday-first schedule from weekday description lines.
///
/// Returns `None` when no line can be read, so listings without usable hours
/// are distinguishable from listings that are closed all week. Days with no
/// readable line are closed.
#[must_use]
pub fn parse_schedule<S: AsRef<str>>(lines: &[S]) -> Option<WeeklySchedule> {
    let mut days: [Option<DayHours>; 7] = [None; 7];
    let mut any = false;

    for line in lines {
        if let Some((weekday, hours)) = parse_day_line(line.as_ref()) {
            let slot = &mut days[weekday.num_days_from_monday() as usize];
            // First line for a day wins.
            if slot.is_none() {
                *slot = Some(hours);
                any = true;
            }
        }
    }

    any.then(|| {
        WeeklySchedule::new(
            days.into_iter()
                .map(|d| d.unwrap_or(DayHours::Closed))
                .collect(),
        )
    })
}

/// Parses one `"<Weekday>: <hours>"` line.
///
/// Only the first range is kept when a day lists several.
#[must_use]
pub fn parse_day_line(line: &str) -> Option<(Weekday, DayHours)> {
    let line = normalize_spaces(line);
    let (day, rest) = line.split_once(':')?;
    let weekday = day.trim().parse::<Weekday>().ok()?;
    let hours = parse_hours(rest.trim())?;
    Some((weekday, hours))
}

fn parse_hours(text: &str) -> Option<DayHours> {
    let lower = text.to_ascii_lowercase();
    if lower == "closed" {
        return Some(DayHours::Closed);
    }
    if lower.starts_with("open 24 hours") {
        return Some(DayHours::Open {
            open: 0,
            close: MINUTES_PER_DAY - 1,
        });
    }

    let first_range = lower.split(',').next()?;
    let (open_text, close_text) = split_range(first_range)?;
    let open = parse_clock(open_text)?;
    let close = parse_clock(close_text)?;

    // "5:00 – 10:00 PM": a bare side borrows the other side's meridiem.
    let open_meridiem = open.meridiem.or(close.meridiem);
    let close_meridiem = close.meridiem.or(open.meridiem);

    Some(DayHours::Open {
        open: to_minutes(open.hour, open.minute, open_meridiem)?,
        close: to_minutes(close.hour, close.minute, close_meridiem)?,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Clock {
    hour: u16,
    minute: u16,
    meridiem: Option<Meridiem>,
}

/// Replaces the narrow and thin spaces the places API puts around times with
/// ordinary spaces.
fn normalize_spaces(line: &str) -> String {
    line.chars()
        .map(|c| match c {
            '\u{202f}' | '\u{2009}' | '\u{00a0}' => ' ',
            other => other,
        })
        .collect()
}

/// Splits `"11:00 am – 10:00 pm"` on an en dash, em dash, or hyphen.
fn split_range(range: &str) -> Option<(&str, &str)> {
    let idx = range.find(['–', '—', '-'])?;
    let dash_len = range[idx..].chars().next()?.len_utf8();
    let open = range[..idx].trim();
    let close = range[idx + dash_len..].trim();
    if open.is_empty() || close.is_empty() {
        return None;
    }
    Some((open, close))
}

/// Reads `"11:00 am"`, `"5:00"`, `"9 pm"` or `"17:30"`. Input must be
/// pre-lowercased.
fn parse_clock(text: &str) -> Option<Clock> {
    let (digits, meridiem) = if let Some(rest) = text.strip_suffix("am") {
        (rest.trim(), Some(Meridiem::Am))
    } else if let Some(rest) = text.strip_suffix("pm") {
        (rest.trim(), Some(Meridiem::Pm))
    } else {
        (text.trim(), None)
    };

    let (hour_text, minute_text) = digits.split_once(':').unwrap_or((digits, "0"));
    if hour_text.is_empty() || !hour_text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if minute_text.is_empty() || !minute_text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(Clock {
        hour: hour_text.parse().ok()?,
        minute: minute_text.parse().ok()?,
        meridiem,
    })
}

/// Converts a wall-clock reading to minutes since midnight. Without a
/// meridiem the hour is read on a 24-hour clock.
fn to_minutes(hour: u16, minute: u16, meridiem: Option<Meridiem>) -> Option<u16> {
    if minute >= 60 {
        return None;
    }
    let hour = match meridiem {
        Some(_) if hour == 0 || hour > 12 => return None,
        Some(Meridiem::Am) if hour == 12 => 0,
        Some(Meridiem::Pm) if hour != 12 => hour + 12,
        Some(_) => hour,
        None if hour > 23 => return None,
        None => hour,
    };
    Some(hour * 60 + minute)
}
