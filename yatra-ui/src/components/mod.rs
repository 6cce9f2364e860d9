//! Reusable Dioxus RSX components for the stays search bar.

mod date_range_picker;
mod destination_picker;
mod guest_editor;
mod loading_spinner;
mod search_bar;

pub use date_range_picker::DateRangePicker;
pub use destination_picker::DestinationPicker;
pub use guest_editor::GuestEditor;
pub use loading_spinner::LoadingSpinner;
pub use search_bar::{SearchBar, SearchBarProps};
