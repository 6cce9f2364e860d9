//! CSV loading for the destination catalog.
//!
//! The fixture is produced by the `yatra-cli` sync tool from the hosted
//! backend's `destinations` table and embedded into the WASM binary by the
//! consuming app via `include_str!`.
//!
//! # CSV Format
//!
//! With headers: `SLUG,NAME,KIND,DESCRIPTION,ELEVATION,IS_POPULAR,IMAGE_URL`
//!
//! `IS_POPULAR` is `1`/`0`; `ELEVATION` is metres (0 when unknown). Rows
//! with an empty slug or name are skipped.

use crate::Catalog;
use rusqlite::params;

impl Catalog {
    /// Load destination rows from a CSV string, upserting on slug.
    ///
    /// # Example CSV
    /// ```text
    /// SLUG,NAME,KIND,DESCRIPTION,ELEVATION,IS_POPULAR,IMAGE_URL
    /// kedarnath,Kedarnath,temple-town,Jyotirlinga shrine in the Garhwal Himalayas,3583,1,/img/kedarnath.jpg
    /// ```
    pub fn load_destinations(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let slug = r.get(0).unwrap_or("").trim();
            let name = r.get(1).unwrap_or("").trim();
            let kind = r.get(2).unwrap_or("").trim();
            let description = r.get(3).unwrap_or("").trim();
            let elevation: i64 = r.get(4).unwrap_or("0").trim().parse().unwrap_or(0);
            let is_popular: i64 = match r.get(5).unwrap_or("0").trim() {
                "1" | "true" => 1,
                _ => 0,
            };
            let image_url = r.get(6).unwrap_or("").trim();

            if slug.is_empty() || name.is_empty() {
                skipped += 1;
                continue;
            }

            conn.execute(
                "INSERT OR REPLACE INTO destinations
                 (slug, name, kind, description, elevation, is_popular, image_url)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![slug, name, kind, description, elevation, is_popular, image_url],
            )?;
            count += 1;
        }
        log::info!(
            "[Yatra] loader: Loaded {} destinations, skipped {} invalid",
            count,
            skipped
        );
        Ok(())
    }
}
