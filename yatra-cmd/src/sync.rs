//! Catalog sync: pull the `destinations` table from the hosted backend's
//! REST endpoint and write the CSV fixture embedded by the web app.
//!
//! # Backend API
//!
//! The backend exposes PostgREST-style endpoints. One GET returns the whole
//! table as a JSON array:
//!
//! `GET {api_url}/rest/v1/destinations?select=slug,name,type,description,elevation,is_popular,image_url`
//!
//! with `apikey` and `Authorization: Bearer` headers. Rows missing a slug or
//! name are skipped with a log line; any other field defaults to empty/zero.

use anyhow::Context;
use log::info;
use serde::Deserialize;

/// One row of the backend `destinations` table. Field names follow the
/// backend columns; `type` is renamed since it is a keyword.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DestinationRow {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub elevation: i32,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub image_url: String,
}

/// Parse the backend's JSON array response, dropping rows without a slug
/// or name.
pub fn parse_destinations(body: &str) -> anyhow::Result<Vec<DestinationRow>> {
    let rows: Vec<DestinationRow> =
        serde_json::from_str(body).context("destinations response is not a JSON array")?;
    let total = rows.len();
    let rows: Vec<DestinationRow> = rows
        .into_iter()
        .filter(|r| {
            let keep = !r.slug.is_empty() && !r.name.is_empty();
            if !keep {
                info!("Skipping destination row without slug/name: {:?}", r.name);
            }
            keep
        })
        .collect();
    info!("Parsed {} destination rows ({} skipped)", rows.len(), total - rows.len());
    Ok(rows)
}

/// Render rows in the fixture CSV format consumed by `yatra-catalog`.
pub fn rows_to_csv(rows: &[DestinationRow]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["SLUG", "NAME", "KIND", "DESCRIPTION", "ELEVATION", "IS_POPULAR", "IMAGE_URL"])?;
    for row in rows {
        wtr.write_record([
            row.slug.as_str(),
            row.name.as_str(),
            row.kind.as_str(),
            row.description.as_str(),
            &row.elevation.to_string(),
            if row.is_popular { "1" } else { "0" },
            row.image_url.as_str(),
        ])?;
    }
    let bytes = wtr.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

/// Fetch the catalog and write the fixture to `output_csv`.
pub async fn run_sync(api_url: &str, api_key: &str, output_csv: &str) -> anyhow::Result<()> {
    let url = format!(
        "{}/rest/v1/destinations?select=slug,name,type,description,elevation,is_popular,image_url",
        api_url.trim_end_matches('/')
    );
    info!("Fetching destination catalog from {}", url);

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;
    let response = client
        .get(&url)
        .header("apikey", api_key)
        .header("Authorization", format!("Bearer {}", api_key))
        .send()
        .await
        .context("catalog request failed")?;

    if !response.status().is_success() {
        anyhow::bail!("catalog request returned {}", response.status());
    }

    let body = response.text().await?;
    let rows = parse_destinations(&body)?;
    if rows.is_empty() {
        anyhow::bail!("backend returned no usable destination rows; fixture left untouched");
    }

    let csv_out = rows_to_csv(&rows)?;

    // Round-trip through the catalog loader so a fixture that cannot load
    // in the app never lands on disk.
    let catalog = yatra_catalog::Catalog::new()?;
    catalog.load_destinations(&csv_out)?;
    let loaded = catalog.query_destinations()?.len();

    std::fs::write(output_csv, &csv_out)?;
    info!("Sync complete. {} destinations written to {}", loaded, output_csv);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JSON: &str = r#"[
        {"slug": "kedarnath", "name": "Kedarnath", "type": "temple-town",
         "description": "Jyotirlinga shrine", "elevation": 3583,
         "is_popular": true, "image_url": "/img/kedarnath.jpg"},
        {"slug": "chopta", "name": "Chopta", "type": "valley",
         "description": "Meadows on the Tungnath trail", "elevation": 2680,
         "is_popular": false, "image_url": "/img/chopta.jpg"},
        {"slug": "", "name": "Broken Row", "type": "valley",
         "description": "", "elevation": 0, "is_popular": false, "image_url": ""}
    ]"#;

    #[test]
    fn parse_destinations_drops_rows_without_slug() {
        let rows = parse_destinations(SAMPLE_JSON).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].slug, "kedarnath");
        assert_eq!(rows[0].kind, "temple-town");
        assert!(rows[0].is_popular);
    }

    #[test]
    fn parse_destinations_tolerates_missing_fields() {
        let rows = parse_destinations(r#"[{"slug": "auli", "name": "Auli"}]"#).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].elevation, 0);
        assert!(!rows[0].is_popular);
        assert_eq!(rows[0].image_url, "");
    }

    #[test]
    fn parse_destinations_rejects_non_array() {
        assert!(parse_destinations(r#"{"error": "nope"}"#).is_err());
        assert!(parse_destinations("not json").is_err());
    }

    #[test]
    fn rows_to_csv_loads_back_into_catalog() {
        let rows = parse_destinations(SAMPLE_JSON).unwrap();
        let csv_out = rows_to_csv(&rows).unwrap();
        assert!(csv_out.starts_with("SLUG,NAME,KIND,DESCRIPTION,ELEVATION,IS_POPULAR,IMAGE_URL"));

        let catalog = yatra_catalog::Catalog::new().unwrap();
        catalog.load_destinations(&csv_out).unwrap();
        let loaded = catalog.query_destinations().unwrap();
        assert_eq!(loaded.len(), 2);
        let kedarnath = loaded.iter().find(|d| d.slug == "kedarnath").unwrap();
        assert_eq!(kedarnath.elevation, 3583);
        assert!(kedarnath.is_popular);
    }

    #[test]
    fn rows_to_csv_quotes_commas_in_descriptions() {
        let rows = vec![DestinationRow {
            slug: "rishikesh".into(),
            name: "Rishikesh".into(),
            kind: "river-town".into(),
            description: "Yoga, rafting and ghats".into(),
            elevation: 372,
            is_popular: true,
            image_url: String::new(),
        }];
        let csv_out = rows_to_csv(&rows).unwrap();
        assert!(csv_out.contains("\"Yoga, rafting and ghats\""));

        let catalog = yatra_catalog::Catalog::new().unwrap();
        catalog.load_destinations(&csv_out).unwrap();
        let loaded = catalog.query_destinations().unwrap();
        assert_eq!(loaded[0].description, "Yoga, rafting and ghats");
    }
}
