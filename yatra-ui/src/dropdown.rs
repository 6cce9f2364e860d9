//! Dropdown manager: at most one of the search bar's three dropdowns is
//! open at a time, by construction.
//!
//! Opening a dropdown stores its id in a single signal, so opening a second
//! one implicitly closes the first. A full-viewport backdrop rendered behind
//! the open panel closes it on outside clicks; the backdrop disappears with
//! the panel, so no listener outlives it.

use crate::state::AppState;
use dioxus::prelude::*;

/// The three dropdowns of the search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownId {
    Destination,
    Dates,
    Guests,
}

impl AppState {
    /// True when `id` is the currently open dropdown.
    pub fn is_dropdown_open(&self, id: DropdownId) -> bool {
        (self.open_dropdown)() == Some(id)
    }

    /// Toggle `id`: close it when open, otherwise open it (closing any other).
    pub fn toggle_dropdown(&mut self, id: DropdownId) {
        let next = if self.is_dropdown_open(id) { None } else { Some(id) };
        self.open_dropdown.set(next);
    }

    /// Close whichever dropdown is open.
    pub fn close_dropdowns(&mut self) {
        if (self.open_dropdown)().is_some() {
            self.open_dropdown.set(None);
        }
    }
}
