//! Destination dropdown: live-filtered catalog list plus a popular row.

use crate::components::LoadingSpinner;
use crate::state::AppState;
use dioxus::prelude::*;
use yatra_catalog::models::DestinationInfo;

/// Cap on the quick-access popular row.
pub const POPULAR_LIMIT: usize = 6;

/// Searchable destination picker. Typing re-filters the catalog on every
/// keystroke; while the search box is empty a popular quick-access row is
/// shown above the full list. Picking an entry records its slug and closes
/// the dropdown. A failed or missing catalog just renders as an empty list.
#[component]
pub fn DestinationPicker() -> Element {
    let mut state = use_context::<AppState>();
    let search = (state.search_text)();
    let loading = (state.loading)();

    let catalog = state.catalog.read().clone();
    let results: Vec<DestinationInfo> = catalog
        .as_ref()
        .map(|c| c.search_destinations(&search).unwrap_or_default())
        .unwrap_or_default();
    let popular: Vec<DestinationInfo> = if search.trim().is_empty() {
        catalog
            .as_ref()
            .map(|c| c.query_popular(POPULAR_LIMIT).unwrap_or_default())
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    rsx! {
        div {
            style: "position: absolute; top: 100%; left: 0; z-index: 20; margin-top: 8px; \
                    width: 320px; padding: 12px; background: #FFF; border: 1px solid #E0E0E0; \
                    border-radius: 8px; box-shadow: 0 8px 24px rgba(0,0,0,0.12);",

            input {
                r#type: "text",
                placeholder: "Search destinations",
                value: "{search}",
                style: "width: 100%; box-sizing: border-box; padding: 8px; font-size: 14px; \
                        border: 1px solid #D0D0D0; border-radius: 4px; margin-bottom: 8px;",
                oninput: move |evt: Event<FormData>| state.search_text.set(evt.value()),
            }

            if loading {
                LoadingSpinner {}
            } else {
                if !popular.is_empty() {
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 6px; margin-bottom: 8px;",
                        for dest in popular {
                            DestinationChip { dest }
                        }
                    }
                }
                if results.is_empty() {
                    div {
                        style: "padding: 16px; text-align: center; color: #9E9E9E; font-size: 13px;",
                        "No destinations found"
                    }
                } else {
                    div {
                        style: "max-height: 260px; overflow-y: auto;",
                        for dest in results {
                            DestinationRow { dest }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct DestinationProps {
    dest: DestinationInfo,
}

/// Compact popular-row entry.
#[component]
fn DestinationChip(props: DestinationProps) -> Element {
    let mut state = use_context::<AppState>();
    let slug = props.dest.slug.clone();

    rsx! {
        button {
            style: "padding: 4px 10px; font-size: 12px; border: 1px solid #D0D0D0; \
                    border-radius: 12px; background: #FAFAFA; cursor: pointer;",
            onclick: move |_| {
                state.location.set(slug.clone());
                state.search_text.set(String::new());
                state.close_dropdowns();
            },
            "{props.dest.name}"
        }
    }
}

/// Full list entry with kind, description and elevation.
#[component]
fn DestinationRow(props: DestinationProps) -> Element {
    let mut state = use_context::<AppState>();
    let slug = props.dest.slug.clone();

    rsx! {
        div {
            style: "padding: 8px; border-radius: 4px; cursor: pointer;",
            onclick: move |_| {
                state.location.set(slug.clone());
                state.search_text.set(String::new());
                state.close_dropdowns();
            },
            div {
                style: "font-size: 14px; font-weight: bold;",
                "{props.dest.name}"
            }
            div {
                style: "font-size: 12px; color: #757575;",
                "{props.dest.description}"
            }
            div {
                style: "font-size: 11px; color: #9E9E9E;",
                "{props.dest.kind} · {props.dest.elevation} m"
            }
        }
    }
}
