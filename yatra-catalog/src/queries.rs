//! Typed query methods for the destination catalog.
//!
//! All queries return [`crate::models`] structs ready for the picker
//! components. Search is a case-insensitive substring match over name,
//! description and kind, mirroring what the picker's live filter needs.

use crate::models::DestinationInfo;
use crate::Catalog;
use rusqlite::{params, Row};

fn row_to_destination(row: &Row<'_>) -> rusqlite::Result<DestinationInfo> {
    Ok(DestinationInfo {
        slug: row.get(0)?,
        name: row.get(1)?,
        kind: row.get(2)?,
        description: row.get(3)?,
        elevation: row.get(4)?,
        is_popular: row.get::<_, i64>(5)? != 0,
        image_url: row.get(6)?,
    })
}

const DEST_COLUMNS: &str = "slug, name, kind, description, elevation, is_popular, image_url";

impl Catalog {
    /// Get all destinations, popular entries first, then by name.
    pub fn query_destinations(&self) -> anyhow::Result<Vec<DestinationInfo>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM destinations ORDER BY is_popular DESC, name",
            DEST_COLUMNS
        ))?;
        let rows = stmt
            .query_map([], row_to_destination)?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("[Yatra] query: query_destinations returned {} rows", rows.len());
        Ok(rows)
    }

    /// Get the popular subset for the quick-access row, capped at `limit`.
    pub fn query_popular(&self, limit: usize) -> anyhow::Result<Vec<DestinationInfo>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM destinations WHERE is_popular = 1 ORDER BY name LIMIT ?1",
            DEST_COLUMNS
        ))?;
        let rows = stmt
            .query_map(params![limit as i64], row_to_destination)?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("[Yatra] query: query_popular returned {} rows", rows.len());
        Ok(rows)
    }

    /// Case-insensitive substring search over name, description and kind.
    ///
    /// Empty or whitespace-only text returns the full catalog, matching the
    /// picker's behavior of showing everything before the user types.
    pub fn search_destinations(&self, text: &str) -> anyhow::Result<Vec<DestinationInfo>> {
        let needle = text.trim();
        if needle.is_empty() {
            return self.query_destinations();
        }
        let conn = self.conn.borrow();
        // LIKE is case-insensitive for ASCII in SQLite by default. The
        // escape character itself must be escaped before the wildcards.
        let pattern = format!(
            "%{}%",
            needle
                .replace('\\', "\\\\")
                .replace('%', "\\%")
                .replace('_', "\\_")
        );
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM destinations
             WHERE name LIKE ?1 ESCAPE '\\'
                OR description LIKE ?1 ESCAPE '\\'
                OR kind LIKE ?1 ESCAPE '\\'
             ORDER BY is_popular DESC, name",
            DEST_COLUMNS
        ))?;
        let rows = stmt
            .query_map(params![pattern], row_to_destination)?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[Yatra] query: search_destinations('{}') returned {} rows",
            needle,
            rows.len()
        );
        Ok(rows)
    }

    /// Look up a single destination by slug.
    pub fn query_by_slug(&self, slug: &str) -> anyhow::Result<Option<DestinationInfo>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM destinations WHERE slug = ?1",
            DEST_COLUMNS
        ))?;
        let mut rows = stmt.query_map(params![slug], row_to_destination)?;
        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }
}
