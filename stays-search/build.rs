use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy the destination fixture to OUT_DIR for include_str!. A minimal
    // built-in catalog stands in when the fixture has not been synced yet.
    let fixture = Path::new("../fixtures/destinations.csv");
    let dest = Path::new(&out_dir).join("destinations.csv");
    if fixture.exists() {
        // Re-write through the csv crate so a malformed fixture fails the
        // build here instead of at app startup.
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(fixture)
            .expect("Failed to open destinations.csv");
        let rows = rdr.records().filter_map(|r| r.ok()).count();
        assert!(rows > 0, "destinations.csv fixture is empty");
        fs::copy(fixture, &dest).unwrap();
    } else {
        fs::write(
            &dest,
            "SLUG,NAME,KIND,DESCRIPTION,ELEVATION,IS_POPULAR,IMAGE_URL\n\
             kedarnath,Kedarnath,temple-town,Jyotirlinga shrine in the Garhwal Himalayas,3583,1,/img/kedarnath.jpg\n",
        )
        .unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/destinations.csv");
}
