//! The main search bar: destination, dates and guests triggers plus the
//! submit button, with one dropdown panel open at a time.

use crate::components::{DateRangePicker, DestinationPicker, GuestEditor};
use crate::dropdown::DropdownId;
use crate::nav;
use crate::state::AppState;
use chrono::NaiveDate;
use dioxus::prelude::*;
use yatra_search::{DateSelection, GuestComposition, SearchQuery};
use yatra_utils::dates::format_short;

#[derive(Props, Clone, PartialEq)]
pub struct SearchBarProps {
    /// Slug pre-selected before the user touches the picker. Need not exist
    /// in the catalog; unknown slugs are displayed title-cased as-is.
    #[props(default)]
    pub initial_location: String,
    #[props(default)]
    pub initial_check_in: Option<NaiveDate>,
    #[props(default)]
    pub initial_check_out: Option<NaiveDate>,
    /// (adults, children, rooms) to seed the guest counters.
    #[props(default)]
    pub initial_guests: Option<(u8, u8, u8)>,
    /// Invoked synchronously with the composed query just before navigation.
    #[props(default)]
    pub on_search: Option<EventHandler<SearchQuery>>,
}

impl SearchBarProps {
    /// The state writes implied by the inbound props. `None` means the
    /// corresponding piece of state is left alone.
    fn seed_values(
        &self,
    ) -> (
        Option<String>,
        Option<DateSelection>,
        Option<GuestComposition>,
    ) {
        let location =
            (!self.initial_location.is_empty()).then(|| self.initial_location.clone());
        let selection = (self.initial_check_in.is_some() || self.initial_check_out.is_some())
            .then(|| DateSelection::seeded(self.initial_check_in, self.initial_check_out));
        let guests = self
            .initial_guests
            .map(|(adults, children, rooms)| {
                GuestComposition::with_counts(adults, children, rooms)
            });
        (location, selection, guests)
    }
}

const TRIGGER_STYLE: &str = "padding: 10px 16px; font-size: 14px; text-align: left; \
                             border: none; background: transparent; cursor: pointer; min-width: 130px;";

/// The stays search bar.
#[component]
pub fn SearchBar(props: SearchBarProps) -> Element {
    let mut state = use_context::<AppState>();

    // Seed state from the inbound props on mount and again whenever the
    // parent re-renders with different initial values. The props are not
    // signals, so `use_reactive!` registers them as the effect's dependency.
    let seed = props.clone();
    use_effect(use_reactive!(|seed| {
        let (location, selection, guests) = seed.seed_values();
        if let Some(location) = location {
            state.location.set(location);
        }
        if let Some(selection) = selection {
            state.selection.set(selection);
        }
        if let Some(guests) = guests {
            state.guests.set(guests);
        }
    }));

    let on_search = props.on_search;
    let submit = move |_| {
        let query = SearchQuery::from_parts(
            &(state.location)(),
            &state.selection.read(),
            &state.guests.read(),
        );
        if let Some(handler) = on_search {
            handler.call(query.clone());
        }
        state.close_dropdowns();
        log::info!("[Yatra] search: navigating to {}", query.search_url());
        nav::navigate_to(&query.search_url());
    };

    let selection = (state.selection)();
    let check_in_label = selection
        .check_in
        .map(|d| format_short(&d))
        .unwrap_or_else(|| "Check-in".to_string());
    let check_out_label = selection
        .check_out
        .map(|d| format_short(&d))
        .unwrap_or_else(|| "Check-out".to_string());
    let location_label = state.location_label();
    let guests_label = state.guests.read().summary();
    let open = (state.open_dropdown)();

    rsx! {
        div {
            style: "position: relative; display: inline-block; font-family: -apple-system, \
                    BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            // Backdrop behind the open panel; clicking it closes the dropdown.
            if open.is_some() {
                div {
                    style: "position: fixed; inset: 0; z-index: 10;",
                    onclick: move |_| state.close_dropdowns(),
                }
            }

            div {
                style: "position: relative; z-index: 15; display: flex; align-items: center; \
                        gap: 4px; padding: 4px; background: #FFF; border: 1px solid #E0E0E0; \
                        border-radius: 28px; box-shadow: 0 2px 8px rgba(0,0,0,0.08);",

                button {
                    style: TRIGGER_STYLE,
                    onclick: move |_| state.toggle_dropdown(DropdownId::Destination),
                    "{location_label}"
                }
                span { style: "color: #E0E0E0;", "|" }
                button {
                    style: TRIGGER_STYLE,
                    onclick: move |_| state.toggle_dropdown(DropdownId::Dates),
                    "{check_in_label} - {check_out_label}"
                }
                span { style: "color: #E0E0E0;", "|" }
                button {
                    style: TRIGGER_STYLE,
                    onclick: move |_| state.toggle_dropdown(DropdownId::Guests),
                    "{guests_label}"
                }
                button {
                    style: "padding: 10px 24px; font-size: 14px; font-weight: bold; color: #FFF; \
                            background: #B45309; border: none; border-radius: 22px; cursor: pointer;",
                    onclick: submit,
                    "Search"
                }
            }

            if open == Some(DropdownId::Destination) {
                DestinationPicker {}
            }
            if open == Some(DropdownId::Dates) {
                DateRangePicker {}
            }
            if open == Some(DropdownId::Guests) {
                GuestEditor {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn props() -> SearchBarProps {
        SearchBarProps {
            initial_location: String::new(),
            initial_check_in: None,
            initial_check_out: None,
            initial_guests: None,
            on_search: None,
        }
    }

    #[test]
    fn default_props_seed_nothing() {
        let (location, selection, guests) = props().seed_values();
        assert_eq!(location, None);
        assert_eq!(selection, None);
        assert_eq!(guests, None);
    }

    #[test]
    fn location_and_dates_seed_state() {
        let p = SearchBarProps {
            initial_location: "kedarnath".to_string(),
            initial_check_in: Some(d(2026, 5, 1)),
            initial_check_out: Some(d(2026, 5, 4)),
            ..props()
        };
        let (location, selection, guests) = p.seed_values();
        assert_eq!(location.as_deref(), Some("kedarnath"));
        let selection = selection.unwrap();
        assert_eq!(selection.check_in, Some(d(2026, 5, 1)));
        assert_eq!(selection.check_out, Some(d(2026, 5, 4)));
        assert_eq!(guests, None);
    }

    #[test]
    fn inverted_initial_dates_drop_the_checkout() {
        let p = SearchBarProps {
            initial_check_in: Some(d(2026, 5, 4)),
            initial_check_out: Some(d(2026, 5, 1)),
            ..props()
        };
        let (_, selection, _) = p.seed_values();
        let selection = selection.unwrap();
        assert_eq!(selection.check_in, Some(d(2026, 5, 4)));
        assert_eq!(selection.check_out, None);
    }

    #[test]
    fn changed_props_imply_fresh_seed_values() {
        // Re-rendering with different initial values must yield different
        // writes, so the reactive effect re-seeds rather than sticking with
        // the mount-time values.
        let first = SearchBarProps {
            initial_location: "kedarnath".to_string(),
            ..props()
        };
        let second = SearchBarProps {
            initial_location: "badrinath".to_string(),
            initial_guests: Some((4, 0, 2)),
            ..props()
        };
        assert!(first != second);
        let (location, _, guests) = second.seed_values();
        assert_eq!(location.as_deref(), Some("badrinath"));
        assert_eq!(guests, Some(GuestComposition::with_counts(4, 0, 2)));
    }
}
