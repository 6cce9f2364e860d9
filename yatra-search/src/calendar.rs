//! Calendar grid model for the two-month date range picker.
//!
//! Rendering is kept out of this module; it only produces data the UI can
//! walk: a month laid out in Sunday-first weeks and a per-day classification
//! covering past days, range endpoints, in-range days, hover previews and the
//! today marker.

use crate::date_selection::DateSelection;
use chrono::{Datelike, Duration, NaiveDate};

/// How a single day cell should be presented.
///
/// Variants are ordered by precedence: a past day is always `Past` even if it
/// would otherwise be inside a seeded range, and an endpoint wins over the
/// today marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    /// Before today; disabled and non-interactive.
    Past,
    /// The selected check-in endpoint.
    CheckIn,
    /// The selected check-out endpoint.
    CheckOut,
    /// Strictly between the two selected endpoints.
    InRange,
    /// Part of the prospective range while hovering mid-selection.
    Preview,
    /// Today, when not otherwise an endpoint.
    Today,
    /// An ordinary selectable day.
    Open,
}

/// Classify one day cell given the current selection and hover position.
pub fn classify_day(
    day: NaiveDate,
    today: NaiveDate,
    selection: &DateSelection,
    hovered: Option<NaiveDate>,
) -> DayState {
    if day < today {
        return DayState::Past;
    }
    if selection.check_in == Some(day) {
        return DayState::CheckIn;
    }
    if selection.check_out == Some(day) {
        return DayState::CheckOut;
    }
    if selection.is_inside_range(day) {
        return DayState::InRange;
    }
    if let Some(h) = hovered {
        if let Some((start, end)) = selection.preview_range(h) {
            if day > start && day <= end {
                return DayState::Preview;
            }
        }
    }
    if day == today {
        return DayState::Today;
    }
    DayState::Open
}

/// A (year, month) pair the picker is currently looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewMonth {
    pub year: i32,
    pub month: u32,
}

impl ViewMonth {
    /// The view month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month after this one.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The month before this one.
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Backward navigation is bounded by the current calendar month;
    /// forward navigation is unbounded.
    pub fn can_go_prev(&self, today: NaiveDate) -> bool {
        let floor = ViewMonth::containing(today);
        (self.year, self.month) > (floor.year, floor.month)
    }

    /// First day of the month. Always valid for month 1-12.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// Display label, e.g. "March 2026".
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

/// One month laid out in Sunday-first weeks, padded with `None` at the
/// edges so every week holds exactly seven cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub view: ViewMonth,
    pub weeks: Vec<[Option<NaiveDate>; 7]>,
}

impl MonthGrid {
    /// Build the grid for a view month.
    pub fn build(view: ViewMonth) -> Self {
        let first = view.first_day();
        let days_in_month = (view.next().first_day() - first).num_days();
        let lead = first.weekday().num_days_from_sunday() as usize;

        let mut weeks: Vec<[Option<NaiveDate>; 7]> = Vec::new();
        let mut week: [Option<NaiveDate>; 7] = [None; 7];
        let mut slot = lead;
        for offset in 0..days_in_month {
            week[slot] = Some(first + Duration::days(offset));
            slot += 1;
            if slot == 7 {
                weeks.push(week);
                week = [None; 7];
                slot = 0;
            }
        }
        if slot > 0 {
            weeks.push(week);
        }
        Self { view, weeks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn month_grid_march_2026() {
        // March 1 2026 is a Sunday; 31 days -> 5 weeks, no leading pad.
        let grid = MonthGrid::build(ViewMonth {
            year: 2026,
            month: 3,
        });
        assert_eq!(grid.weeks.len(), 5);
        assert_eq!(grid.weeks[0][0], Some(d(2026, 3, 1)));
        assert_eq!(grid.weeks[4][2], Some(d(2026, 3, 31)));
        assert_eq!(grid.weeks[4][3], None);
    }

    #[test]
    fn month_grid_pads_leading_days() {
        // May 1 2026 is a Friday -> five leading None cells.
        let grid = MonthGrid::build(ViewMonth {
            year: 2026,
            month: 5,
        });
        assert_eq!(grid.weeks[0][..5], [None; 5]);
        assert_eq!(grid.weeks[0][5], Some(d(2026, 5, 1)));
    }

    #[test]
    fn month_grid_counts_every_day_once() {
        for month in 1..=12 {
            let grid = MonthGrid::build(ViewMonth { year: 2026, month });
            let days: Vec<NaiveDate> = grid
                .weeks
                .iter()
                .flatten()
                .filter_map(|c| *c)
                .collect();
            let expected =
                (ViewMonth { year: 2026, month }.next().first_day()
                    - ViewMonth { year: 2026, month }.first_day())
                .num_days() as usize;
            assert_eq!(days.len(), expected, "month {}", month);
            assert!(days.windows(2).all(|w| w[1] == w[0] + Duration::days(1)));
        }
    }

    #[test]
    fn month_grid_handles_leap_february() {
        let grid = MonthGrid::build(ViewMonth {
            year: 2028,
            month: 2,
        });
        let days: Vec<NaiveDate> = grid.weeks.iter().flatten().filter_map(|c| *c).collect();
        assert_eq!(days.len(), 29);
        assert_eq!(days.last(), Some(&d(2028, 2, 29)));
    }

    #[test]
    fn view_month_december_wraps_to_january() {
        let dec = ViewMonth {
            year: 2026,
            month: 12,
        };
        assert_eq!(
            dec.next(),
            ViewMonth {
                year: 2027,
                month: 1
            }
        );
        assert_eq!(
            ViewMonth {
                year: 2027,
                month: 1
            }
            .prev(),
            dec
        );
    }

    #[test]
    fn backward_navigation_bounded_by_current_month() {
        let today = d(2026, 3, 11);
        let current = ViewMonth::containing(today);
        assert!(!current.can_go_prev(today));
        assert!(current.next().can_go_prev(today));
        // Forward navigation is unbounded; a far-future month still allows prev.
        assert!(ViewMonth {
            year: 2030,
            month: 1
        }
        .can_go_prev(today));
    }

    #[test]
    fn view_month_label() {
        let view = ViewMonth {
            year: 2026,
            month: 3,
        };
        assert_eq!(view.label(), "March 2026");
    }

    #[test]
    fn classify_past_wins_over_everything() {
        let today = d(2026, 3, 11);
        // Seeded range entirely in the past.
        let sel = DateSelection::seeded(Some(d(2026, 3, 1)), Some(d(2026, 3, 5)));
        assert_eq!(classify_day(d(2026, 3, 1), today, &sel, None), DayState::Past);
        assert_eq!(classify_day(d(2026, 3, 3), today, &sel, None), DayState::Past);
    }

    #[test]
    fn classify_endpoints_and_range() {
        let today = d(2026, 3, 11);
        let sel = DateSelection::seeded(Some(d(2026, 3, 15)), Some(d(2026, 3, 18)));
        assert_eq!(
            classify_day(d(2026, 3, 15), today, &sel, None),
            DayState::CheckIn
        );
        assert_eq!(
            classify_day(d(2026, 3, 18), today, &sel, None),
            DayState::CheckOut
        );
        assert_eq!(
            classify_day(d(2026, 3, 16), today, &sel, None),
            DayState::InRange
        );
        assert_eq!(
            classify_day(d(2026, 3, 20), today, &sel, None),
            DayState::Open
        );
    }

    #[test]
    fn classify_preview_between_checkin_and_hover() {
        let today = d(2026, 3, 11);
        let sel = DateSelection::new().click_day(d(2026, 3, 15), today);
        let hovered = Some(d(2026, 3, 19));
        assert_eq!(
            classify_day(d(2026, 3, 17), today, &sel, hovered),
            DayState::Preview
        );
        // The hovered day itself is part of the preview.
        assert_eq!(
            classify_day(d(2026, 3, 19), today, &sel, hovered),
            DayState::Preview
        );
        // The check-in endpoint keeps its own state.
        assert_eq!(
            classify_day(d(2026, 3, 15), today, &sel, hovered),
            DayState::CheckIn
        );
        // Days past the hover point are plain.
        assert_eq!(
            classify_day(d(2026, 3, 20), today, &sel, hovered),
            DayState::Open
        );
    }

    #[test]
    fn classify_no_preview_once_complete() {
        let today = d(2026, 3, 11);
        let sel = DateSelection::seeded(Some(d(2026, 3, 15)), Some(d(2026, 3, 18)));
        assert_eq!(
            classify_day(d(2026, 3, 20), today, &sel, Some(d(2026, 3, 25))),
            DayState::Open
        );
    }

    #[test]
    fn classify_today_marker() {
        let today = d(2026, 3, 11);
        let sel = DateSelection::new();
        assert_eq!(classify_day(today, today, &sel, None), DayState::Today);
        // An endpoint on today renders as the endpoint, not the marker.
        let sel = sel.click_day(today, today);
        assert_eq!(classify_day(today, today, &sel, None), DayState::CheckIn);
    }
}
