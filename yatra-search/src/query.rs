//! Search query composition: selection state in, `/stays?...` URL out.
//!
//! Submission is never blocked on partial input. A missing date or an empty
//! location is simply omitted from the query string, so downstream consumers
//! must treat single-date queries defensively.

use crate::date_selection::DateSelection;
use crate::guests::GuestComposition;
use chrono::NaiveDate;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

/// Fixed path of the search results page.
pub const SEARCH_PATH: &str = "/stays";

/// Characters that must be escaped inside a query component.
const QUERY_COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'=')
    .add(b'?');

/// Everything a stays search carries: destination slug, optional date range
/// and guest counts. This is both the payload handed to an `on_search`
/// callback and the source of the navigation URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub location: String,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub adults: u8,
    pub children: u8,
    pub rooms: u8,
}

impl SearchQuery {
    /// Assemble a query from the three pieces of search-bar state.
    pub fn from_parts(
        location: &str,
        selection: &DateSelection,
        guests: &GuestComposition,
    ) -> Self {
        Self {
            location: location.to_string(),
            check_in: selection.check_in,
            check_out: selection.check_out,
            adults: guests.adults,
            children: guests.children,
            rooms: guests.rooms,
        }
    }

    /// Ordered key/value pairs for the query string. Date keys are omitted
    /// when unset; counters are always present.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("location", self.location.clone())];
        if let Some(ci) = self.check_in {
            pairs.push(("checkIn", ci.format("%Y-%m-%d").to_string()));
        }
        if let Some(co) = self.check_out {
            pairs.push(("checkOut", co.format("%Y-%m-%d").to_string()));
        }
        pairs.push(("adults", self.adults.to_string()));
        pairs.push(("children", self.children.to_string()));
        pairs.push(("rooms", self.rooms.to_string()));
        pairs
    }

    /// Percent-encoded query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", k, utf8_percent_encode(v, QUERY_COMPONENT)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Full navigation target, e.g.
    /// `/stays?location=kedarnath&checkIn=2026-05-01&...`.
    pub fn search_url(&self) -> String {
        format!("{}?{}", SEARCH_PATH, self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn full_query() -> SearchQuery {
        let selection = DateSelection::seeded(Some(d(2026, 5, 1)), Some(d(2026, 5, 4)));
        let mut guests = GuestComposition::default();
        guests.add_child();
        SearchQuery::from_parts("kedarnath", &selection, &guests)
    }

    #[test]
    fn full_query_contains_all_six_params() {
        let url = full_query().search_url();
        assert!(url.starts_with("/stays?"));
        assert!(url.contains("location=kedarnath"));
        assert!(url.contains("checkIn=2026-05-01"));
        assert!(url.contains("checkOut=2026-05-04"));
        assert!(url.contains("adults=2"));
        assert!(url.contains("children=1"));
        assert!(url.contains("rooms=1"));
    }

    #[test]
    fn unset_dates_are_omitted() {
        let q = SearchQuery::from_parts(
            "badrinath",
            &DateSelection::new(),
            &GuestComposition::default(),
        );
        let qs = q.to_query_string();
        assert!(!qs.contains("checkIn"));
        assert!(!qs.contains("checkOut"));
        assert_eq!(qs, "location=badrinath&adults=2&children=0&rooms=1");
    }

    #[test]
    fn partial_date_selection_keeps_only_checkin() {
        let selection = DateSelection::seeded(Some(d(2026, 5, 1)), None);
        let q = SearchQuery::from_parts("kedarnath", &selection, &GuestComposition::default());
        let qs = q.to_query_string();
        assert!(qs.contains("checkIn=2026-05-01"));
        assert!(!qs.contains("checkOut"));
    }

    #[test]
    fn pairs_preserve_key_order() {
        let keys: Vec<&str> = full_query().query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["location", "checkIn", "checkOut", "adults", "children", "rooms"]
        );
    }

    #[test]
    fn reserved_characters_in_location_are_escaped() {
        let q = SearchQuery::from_parts(
            "char dham & beyond",
            &DateSelection::new(),
            &GuestComposition::default(),
        );
        let qs = q.to_query_string();
        assert!(qs.contains("location=char%20dham%20%26%20beyond"));
    }

    #[test]
    fn query_round_trips_through_json() {
        let q = full_query();
        let json = serde_json::to_string(&q).unwrap();
        let back: SearchQuery = serde_json::from_str(&json).unwrap();
        assert_eq!(q, back);
        assert!(json.contains("\"check_in\":\"2026-05-01\""));
    }
}
