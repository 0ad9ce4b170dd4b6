//! Day-rollover arithmetic for the daily reminder.

use chrono::{Days, NaiveDateTime, NaiveTime, Timelike};

/// The persisted reminder selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderSchedule {
    pub armed: bool,
    pub hour: u32,
    pub minute: u32,
}

/// Computes the next instant whose time-of-day is `hour:minute` and which is
/// strictly in the future of `now`.
///
/// Seconds and sub-seconds are zeroed on both sides before the comparison; if
/// today's candidate has already passed (or is exactly now), the date advances
/// by exactly one calendar day.
pub fn next_trigger(now: NaiveDateTime, hour: u32, minute: u32) -> NaiveDateTime {
    let target = NaiveTime::from_hms_opt(hour, minute, 0)
        .expect("hour/minute validated at the selection boundary");
    let now = truncate_to_minute(now);
    let candidate = now.date().and_time(target);
    if candidate > now {
        return candidate;
    }
    match candidate.checked_add_days(Days::new(1)) {
        Some(next) => next,
        None => candidate,
    }
}

fn truncate_to_minute(instant: NaiveDateTime) -> NaiveDateTime {
    instant
        .with_second(0)
        .and_then(|i| i.with_nanosecond(0))
        .expect("zeroed seconds are always in range")
}
