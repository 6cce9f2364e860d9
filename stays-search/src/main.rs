//! Yatra Stays Search
//!
//! The bookable-stays search bar for the Yatra marketing site: destination
//! picker, two-month date range picker and guest composition editor, wired
//! to navigate to `/stays?...` on submit.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/destinations.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is loaded into an in-memory SQLite catalog.
//! 4. The picker components query the catalog live while the user types.
//!
//! A failed catalog load is logged and leaves the picker empty; the rest of
//! the search bar (dates, guests, submit) keeps working.

use dioxus::prelude::*;
use yatra_catalog::Catalog;
use yatra_search::SearchQuery;
use yatra_ui::components::SearchBar;
use yatra_ui::state::AppState;

/// Destination catalog fixture, synced from the backend by `yatra-cli`.
const DESTINATIONS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/destinations.csv"));

/// Slug shown before the user picks anything.
const DEFAULT_LOCATION: &str = "kedarnath";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("stays-search-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the embedded catalog on mount.
    use_effect(move || {
        match Catalog::new() {
            Ok(catalog) => {
                if let Err(e) = catalog.load_destinations(DESTINATIONS_CSV) {
                    // Non-fatal: the picker just shows an empty list.
                    log::warn!("Failed to load destination catalog: {}", e);
                }
                match catalog.query_destinations() {
                    Ok(destinations) => state.destinations.set(destinations),
                    Err(e) => log::warn!("Failed to query destinations: {}", e),
                }
                state.catalog.set(Some(catalog));
            }
            Err(e) => log::warn!("Catalog initialization failed: {}", e),
        }
        state.loading.set(false);
    });

    let on_search = move |query: SearchQuery| {
        log::info!(
            "Search submitted: location={} nights_span={:?}..{:?} guests={}+{} rooms={}",
            query.location,
            query.check_in,
            query.check_out,
            query.adults,
            query.children,
            query.rooms
        );
    };

    rsx! {
        div {
            style: "padding: 32px; display: flex; justify-content: center;",
            SearchBar {
                initial_location: DEFAULT_LOCATION.to_string(),
                on_search: on_search,
            }
        }
    }
}
