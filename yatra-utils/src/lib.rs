//! Shared utility functions for Yatra crates.

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_iso(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Short display format for the search bar, e.g. "Fri, 13 Mar"
    pub fn format_short(date: &NaiveDate) -> String {
        date.format("%a, %-d %b").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_iso(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

}

/// String utility functions
pub mod strings {
    /// Title-case a slug for display, e.g. "guptkashi-valley" -> "Guptkashi Valley".
    /// Used as the fallback label when a location slug has no catalog entry.
    pub fn title_case_slug(slug: &str) -> String {
        slug.split(['-', '_'])
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

}
