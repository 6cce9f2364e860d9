//! Shared Dioxus components for the Yatra stays search bar.
//!
//! This crate provides:
//! - `state`: Reactive AppState with Dioxus Signals
//! - `dropdown`: The at-most-one-open dropdown manager
//! - `nav`: Browser navigation bridge for submitting a search
//! - `components`: The search bar and its pickers (dates, guests, destination)

pub mod components;
pub mod dropdown;
pub mod nav;
pub mod state;
