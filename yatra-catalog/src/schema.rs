//! SQL schema definitions for the in-memory catalog database.

/// Returns the full SQL schema as a single batch string.
///
/// Creates the `destinations` table: one row per bookable destination with
/// its slug, display name, kind, description, elevation and popularity flag.
/// Substring search is served by LIKE queries over `name`, `description`
/// and `kind`; the table is small enough that no FTS index is needed.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS destinations (
        slug TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        kind TEXT NOT NULL,
        description TEXT NOT NULL,
        elevation INTEGER NOT NULL,
        is_popular INTEGER NOT NULL DEFAULT 0,
        image_url TEXT NOT NULL DEFAULT ''
    );
    CREATE INDEX IF NOT EXISTS idx_dest_popular ON destinations(is_popular);

    "#
}
