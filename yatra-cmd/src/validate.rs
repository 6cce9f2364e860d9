//! Fixture validation: load an existing destinations CSV the same way the
//! web app does and report what it contains.

use log::info;

/// Load `csv_path` into a fresh catalog and report the row count. Fails if
/// the file is missing, malformed, or loads zero destinations.
pub fn run_validate(csv_path: &str) -> anyhow::Result<()> {
    let data = std::fs::read_to_string(csv_path)
        .map_err(|e| anyhow::anyhow!("cannot read {}: {}", csv_path, e))?;

    let catalog = yatra_catalog::Catalog::new()?;
    catalog.load_destinations(&data)?;
    let destinations = catalog.query_destinations()?;

    if destinations.is_empty() {
        anyhow::bail!("{} loaded zero destinations", csv_path);
    }

    let popular = destinations.iter().filter(|d| d.is_popular).count();
    info!(
        "{}: {} destinations ({} popular)",
        csv_path,
        destinations.len(),
        popular
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_good_fixture() {
        let dir = std::env::temp_dir().join("yatra-validate-good");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("destinations.csv");
        std::fs::write(
            &path,
            "SLUG,NAME,KIND,DESCRIPTION,ELEVATION,IS_POPULAR,IMAGE_URL\n\
             kedarnath,Kedarnath,temple-town,Shrine,3583,1,/img/k.jpg\n",
        )
        .unwrap();
        assert!(run_validate(path.to_str().unwrap()).is_ok());
    }

    #[test]
    fn validate_rejects_missing_file() {
        assert!(run_validate("/nonexistent/destinations.csv").is_err());
    }

    #[test]
    fn validate_rejects_empty_fixture() {
        let dir = std::env::temp_dir().join("yatra-validate-empty");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("destinations.csv");
        std::fs::write(
            &path,
            "SLUG,NAME,KIND,DESCRIPTION,ELEVATION,IS_POPULAR,IMAGE_URL\n",
        )
        .unwrap();
        assert!(run_validate(path.to_str().unwrap()).is_err());
    }
}
