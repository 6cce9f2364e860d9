//! Query result model structs for the destination catalog.
//!
//! All structs derive `Serialize`/`Deserialize` so they can cross between
//! the WASM frontend, the CSV fixtures and the catalog sync tool.

use serde::{Deserialize, Serialize};

/// One destination record as shown in the picker.
///
/// `slug` is the URL-safe identifier that ends up in the search query;
/// everything else is display metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DestinationInfo {
    /// URL-safe identifier (e.g. "kedarnath").
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Destination kind (e.g. "temple-town", "lake", "valley").
    pub kind: String,
    /// One-line description shown under the name.
    pub description: String,
    /// Elevation in metres above sea level.
    pub elevation: i32,
    /// Whether this destination appears in the quick-access popular row.
    pub is_popular: bool,
    /// Thumbnail image path or URL.
    pub image_url: String,
}
