//! Two-month calendar dropdown for picking a check-in / check-out range.
//!
//! All selection rules live in `yatra_search::date_selection`; this component
//! only renders the grids and forwards clicks and hovers into the reducer.

use crate::state::AppState;
use chrono::{Datelike, Local, NaiveDate};
use dioxus::prelude::*;
use yatra_search::{classify_day, DateSelection, DayState, MonthGrid, QuickSelect};

const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

const QUICK_SELECTS: [(QuickSelect, &str); 5] = [
    (QuickSelect::Tonight, "Tonight"),
    (QuickSelect::Tomorrow, "Tomorrow"),
    (QuickSelect::Weekend, "This weekend"),
    (QuickSelect::NextWeek, "Next week"),
    (QuickSelect::Clear, "Clear"),
];

/// Inline style for a day cell in the given state.
fn day_style(state: DayState) -> &'static str {
    let base = "width: 34px; height: 34px; text-align: center; line-height: 34px; \
                border-radius: 50%; font-size: 13px; cursor: pointer; user-select: none;";
    match state {
        DayState::Past => {
            "width: 34px; height: 34px; text-align: center; line-height: 34px; \
             font-size: 13px; color: #C5C5C5; cursor: default; user-select: none;"
        }
        DayState::CheckIn | DayState::CheckOut => {
            // Endpoints share the filled style.
            "width: 34px; height: 34px; text-align: center; line-height: 34px; \
             border-radius: 50%; font-size: 13px; cursor: pointer; user-select: none; \
             background: #B45309; color: #FFF; font-weight: bold;"
        }
        DayState::InRange => {
            "width: 34px; height: 34px; text-align: center; line-height: 34px; \
             font-size: 13px; cursor: pointer; user-select: none; background: #FEF3C7;"
        }
        DayState::Preview => {
            "width: 34px; height: 34px; text-align: center; line-height: 34px; \
             font-size: 13px; cursor: pointer; user-select: none; background: #FFFBEB;"
        }
        DayState::Today => {
            "width: 34px; height: 34px; text-align: center; line-height: 34px; \
             border-radius: 50%; font-size: 13px; cursor: pointer; user-select: none; \
             box-shadow: inset 0 0 0 1px #B45309;"
        }
        DayState::Open => base,
    }
}

/// The date range picker dropdown: quick-select row, two month grids and a
/// nights readout.
#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let today = Local::now().date_naive();
    let selection = (state.selection)();
    let view = (state.view_month)();

    let months = [MonthGrid::build(view), MonthGrid::build(view.next())];
    let nights = selection.nights();

    rsx! {
        div {
            style: "position: absolute; top: 100%; left: 0; z-index: 20; margin-top: 8px; \
                    padding: 16px; background: #FFF; border: 1px solid #E0E0E0; \
                    border-radius: 8px; box-shadow: 0 8px 24px rgba(0,0,0,0.12);",
            onmouseleave: move |_| state.hovered_day.set(None),

            // Quick-select presets overwrite the range in one click.
            div {
                style: "display: flex; gap: 8px; margin-bottom: 12px;",
                for (preset, label) in QUICK_SELECTS {
                    button {
                        style: "padding: 4px 10px; font-size: 12px; border: 1px solid #D0D0D0; \
                                border-radius: 12px; background: #FAFAFA; cursor: pointer;",
                        onclick: move |_| {
                            let today = Local::now().date_naive();
                            state.selection.set(DateSelection::quick_select(preset, today));
                            state.hovered_day.set(None);
                        },
                        "{label}"
                    }
                }
            }

            div {
                style: "display: flex; align-items: center; gap: 8px; margin-bottom: 8px;",
                button {
                    disabled: !view.can_go_prev(today),
                    style: "width: 28px; height: 28px; border: 1px solid #D0D0D0; \
                            border-radius: 4px; background: #FFF; cursor: pointer;",
                    onclick: move |_| {
                        let today = Local::now().date_naive();
                        let v = (state.view_month)();
                        if v.can_go_prev(today) {
                            state.view_month.set(v.prev());
                        }
                    },
                    "<"
                }
                span { style: "flex: 1;" }
                button {
                    style: "width: 28px; height: 28px; border: 1px solid #D0D0D0; \
                            border-radius: 4px; background: #FFF; cursor: pointer;",
                    onclick: move |_| {
                        let v = (state.view_month)();
                        state.view_month.set(v.next());
                    },
                    ">"
                }
            }

            div {
                style: "display: flex; gap: 24px;",
                for grid in months {
                    MonthCalendar { grid, today }
                }
            }

            div {
                style: "margin-top: 12px; font-size: 13px; color: #616161;",
                if nights > 0 {
                    if nights == 1 {
                        "1 night"
                    } else {
                        "{nights} nights"
                    }
                } else {
                    "Select your dates"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct MonthCalendarProps {
    grid: MonthGrid,
    today: NaiveDate,
}

/// One month of day cells, Sunday-first.
#[component]
fn MonthCalendar(props: MonthCalendarProps) -> Element {
    let mut state = use_context::<AppState>();
    let selection = (state.selection)();
    let hovered = (state.hovered_day)();
    let today = props.today;

    rsx! {
        div {
            h4 {
                style: "margin: 0 0 8px 0; font-size: 14px; text-align: center;",
                "{props.grid.view.label()}"
            }
            div {
                style: "display: flex; gap: 2px;",
                for label in WEEKDAY_LABELS {
                    span {
                        style: "width: 34px; text-align: center; font-size: 11px; color: #9E9E9E;",
                        "{label}"
                    }
                }
            }
            for week in props.grid.weeks.iter() {
                div {
                    style: "display: flex; gap: 2px;",
                    for cell in week.iter().copied() {
                        if let Some(day) = cell {
                            div {
                                style: day_style(classify_day(day, today, &selection, hovered)),
                                onclick: move |_| {
                                    let today = Local::now().date_naive();
                                    let next = (state.selection)().click_day(day, today);
                                    state.selection.set(next);
                                },
                                onmouseenter: move |_| state.hovered_day.set(Some(day)),
                                "{day.day()}"
                            }
                        } else {
                            div { style: "width: 34px; height: 34px;" }
                        }
                    }
                }
            }
        }
    }
}
