//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::dropdown::DropdownId;
use chrono::Local;
use dioxus::prelude::*;
use yatra_catalog::models::DestinationInfo;
use yatra_catalog::Catalog;
use yatra_search::{DateSelection, GuestComposition, ViewMonth};

/// Shared state for the stays search bar and its dropdowns.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Destination catalog (None until loaded)
    pub catalog: Signal<Option<Catalog>>,
    /// Whether the catalog is still loading
    pub loading: Signal<bool>,
    /// All destinations, for resolving the selected slug to a display name
    pub destinations: Signal<Vec<DestinationInfo>>,
    /// Currently selected destination slug
    pub location: Signal<String>,
    /// Live text in the destination search box
    pub search_text: Signal<String>,
    /// Check-in / check-out selection
    pub selection: Signal<DateSelection>,
    /// Day currently hovered in the calendar, for range previews
    pub hovered_day: Signal<Option<chrono::NaiveDate>>,
    /// Left of the two visible calendar months
    pub view_month: Signal<ViewMonth>,
    /// Adults / children / rooms
    pub guests: Signal<GuestComposition>,
    /// Which dropdown is open, if any
    pub open_dropdown: Signal<Option<DropdownId>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            catalog: Signal::new(None),
            loading: Signal::new(true),
            destinations: Signal::new(Vec::new()),
            location: Signal::new(String::new()),
            search_text: Signal::new(String::new()),
            selection: Signal::new(DateSelection::new()),
            hovered_day: Signal::new(None),
            view_month: Signal::new(ViewMonth::containing(today)),
            guests: Signal::new(GuestComposition::default()),
            open_dropdown: Signal::new(None),
        }
    }

    /// Display name for the selected slug: catalog entry when known,
    /// title-cased raw slug otherwise.
    pub fn location_label(&self) -> String {
        let slug = (self.location)();
        if slug.is_empty() {
            return "Where to?".to_string();
        }
        self.destinations
            .read()
            .iter()
            .find(|d| d.slug == slug)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| yatra_utils::strings::title_case_slug(&slug))
    }
}
