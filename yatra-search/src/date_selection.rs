//! Check-in / check-out date range selection.
//!
//! The selection is a small state machine driven by individual day clicks:
//!
//! - `Empty` -> click day D -> `HasCheckIn` (check-in = D)
//! - `HasCheckIn` -> click D after check-in -> `Complete`
//! - `HasCheckIn` -> click D on/before check-in -> range restarts at D
//! - `Complete` -> click any D -> range restarts at D
//!
//! Days strictly before "today" never mutate the selection. "Today" is passed
//! into every transition so the reducer stays pure and clock-free; the UI
//! supplies `Local::now().date_naive()`.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// The three phases of a range selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Empty,
    HasCheckIn,
    Complete,
}

/// One-click shortcuts that overwrite both endpoints directly,
/// bypassing the two-click state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickSelect {
    /// Today -> tomorrow (1 night).
    Tonight,
    /// Tomorrow -> the day after (1 night).
    Tomorrow,
    /// Next occurring Friday -> Sunday (2 nights). A Friday counts as
    /// zero days away; Saturday and Sunday roll to next week's Friday.
    Weekend,
    /// Next occurring Monday -> Friday (4 nights). A Monday rolls a full
    /// week forward to the following Monday.
    NextWeek,
    /// Unset both endpoints.
    Clear,
}

/// A check-in / check-out date pair plus the transient "next click completes
/// the range" flag.
///
/// Invariant: when both dates are set, `check_out > check_in`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateSelection {
    /// Inclusive start date of the stay.
    pub check_in: Option<NaiveDate>,
    /// Exclusive end date of the stay, strictly later than `check_in`.
    pub check_out: Option<NaiveDate>,
    /// True while the next day click should try to complete the range.
    pub selecting_check_out: bool,
}

impl DateSelection {
    /// Empty selection, no dates chosen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a selection from caller-supplied initial dates.
    ///
    /// An initial check-out on or before the check-in violates the range
    /// invariant and is dropped rather than carried into the machine.
    pub fn seeded(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> Self {
        let check_out = match (check_in, check_out) {
            (Some(ci), Some(co)) if co <= ci => None,
            (None, Some(_)) => None,
            (_, co) => co,
        };
        Self {
            check_in,
            check_out,
            selecting_check_out: check_in.is_some() && check_out.is_none(),
        }
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> SelectionPhase {
        match (self.check_in, self.check_out) {
            (None, _) => SelectionPhase::Empty,
            (Some(_), None) => SelectionPhase::HasCheckIn,
            (Some(_), Some(_)) => SelectionPhase::Complete,
        }
    }

    /// Apply a single day click and return the resulting selection.
    ///
    /// Clicking a day strictly before `today` is a no-op in every phase.
    /// If no check-in is set, or both dates are already set, the clicked day
    /// starts a new range. Otherwise a day after the check-in completes the
    /// range and a day on/before it restarts the range.
    pub fn click_day(&self, day: NaiveDate, today: NaiveDate) -> Self {
        if day < today {
            return *self;
        }
        match (self.check_in, self.check_out) {
            (Some(ci), None) if day > ci => Self {
                check_in: Some(ci),
                check_out: Some(day),
                selecting_check_out: false,
            },
            // Bare, completed, or restarted range: the click begins a new one.
            _ => Self {
                check_in: Some(day),
                check_out: None,
                selecting_check_out: true,
            },
        }
    }

    /// Apply a quick-select preset, overwriting the selection.
    pub fn quick_select(preset: QuickSelect, today: NaiveDate) -> Self {
        let pair = match preset {
            QuickSelect::Tonight => Some((today, today + Duration::days(1))),
            QuickSelect::Tomorrow => {
                let tomorrow = today + Duration::days(1);
                Some((tomorrow, tomorrow + Duration::days(1)))
            }
            QuickSelect::Weekend => {
                let friday = today + Duration::days(days_until_friday(today));
                Some((friday, friday + Duration::days(2)))
            }
            QuickSelect::NextWeek => {
                let monday = today + Duration::days(days_until_next_monday(today));
                Some((monday, monday + Duration::days(4)))
            }
            QuickSelect::Clear => None,
        };
        match pair {
            Some((check_in, check_out)) => Self {
                check_in: Some(check_in),
                check_out: Some(check_out),
                selecting_check_out: false,
            },
            None => Self::new(),
        }
    }

    /// Number of nights between the endpoints, 0 while the range is
    /// incomplete.
    pub fn nights(&self) -> i64 {
        match (self.check_in, self.check_out) {
            (Some(ci), Some(co)) => (co - ci).num_days(),
            _ => 0,
        }
    }

    /// The prospective range to highlight while the user hovers `hovered`.
    ///
    /// Only produced mid-selection (check-in set, check-out not yet chosen)
    /// and only for days after the check-in; the hovered day itself is
    /// included. Returns the inclusive (start, end) pair.
    pub fn preview_range(&self, hovered: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match (self.check_in, self.check_out) {
            (Some(ci), None) if self.selecting_check_out && hovered > ci => Some((ci, hovered)),
            _ => None,
        }
    }

    /// True when `day` lies strictly between the two endpoints.
    pub fn is_inside_range(&self, day: NaiveDate) -> bool {
        match (self.check_in, self.check_out) {
            (Some(ci), Some(co)) => day > ci && day < co,
            _ => false,
        }
    }
}

/// Days from `today` to the next occurring Friday. Friday itself is 0;
/// Saturday and Sunday roll forward to next week's Friday.
fn days_until_friday(today: NaiveDate) -> i64 {
    let dow = today.weekday().num_days_from_monday() as i64; // Mon = 0 .. Sun = 6
    (4 - dow).rem_euclid(7)
}

/// Days from `today` to the next occurring Monday. A Monday rolls a full
/// week forward, never 0.
fn days_until_next_monday(today: NaiveDate) -> i64 {
    let dow = today.weekday().num_days_from_sunday() as i64; // Sun = 0 .. Sat = 6
    match (8 - dow) % 7 {
        0 => 7,
        d => d,
    }
}
