//! Birthday scheduling.
//!
//! Date arithmetic behind the upcoming-birthdays query: re-anchoring a
//! birthday onto the current year, the reminder window check, and moving
//! weekend dates to the following Monday.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::warn;

/// Default number of days ahead of today that counts as "upcoming".
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Decides whether, and on which day, a birthday should be congratulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayScheduler {
    window_days: u32,
}

impl BirthdayScheduler {
    /// Create a scheduler with an inclusive window of `window_days` days.
    pub fn new(window_days: u32) -> Self {
        Self { window_days }
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Congratulation date for `birthday` as seen from `today`.
    ///
    /// Returns `None` when this year's occurrence is before `today` or more
    /// than `window_days` after it. Birthdays already passed this year are
    /// not carried over to next year. The weekend shift is applied after the
    /// window check, so a Saturday at the edge of the window still yields
    /// the Monday after it.
    pub fn congratulation_date(
        &self,
        birthday: NaiveDate,
        today: NaiveDate,
    ) -> Option<NaiveDate> {
        let anchored = anchor_to_year(birthday, today.year())?;
        let delta = (anchored - today).num_days();

        if delta < 0 || delta > i64::from(self.window_days) {
            return None;
        }

        Some(roll_weekend_forward(anchored))
    }
}

impl Default for BirthdayScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_DAYS)
    }
}

/// Move `birthday` to the same month and day in `year`.
///
/// Feb 29 becomes Feb 28 in non-leap years.
pub fn anchor_to_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    if let Some(anchored) = birthday.with_year(year) {
        return Some(anchored);
    }

    warn!(%birthday, year, "Birthday does not exist in target year, using Feb 28");
    NaiveDate::from_ymd_opt(year, 2, 28)
}

/// Saturday and Sunday move to the following Monday; weekdays are unchanged.
pub fn roll_weekend_forward(date: NaiveDate) -> NaiveDate {
    let shift = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => return date,
    };

    date.checked_add_days(Days::new(shift)).unwrap_or(date)
}
