pub mod calendar;
pub mod date_selection;
pub mod guests;
pub mod query;

pub use calendar::{classify_day, DayState, MonthGrid, ViewMonth};
pub use date_selection::{DateSelection, QuickSelect, SelectionPhase};
pub use guests::GuestComposition;
pub use query::SearchQuery;
