//! In-memory SQLite catalog of pilgrimage destinations.
//!
//! This crate loads a destination CSV export into an in-memory SQLite
//! database and exposes typed query methods for the Dioxus search UI
//! compiled to WASM.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - CSV data loaded via `include_str!` at compile time in the consuming app
//! - Typed query methods returning serializable structs for the picker components
//!
//! # Usage
//!
//! ```rust
//! use yatra_catalog::Catalog;
//!
//! let catalog = Catalog::new().unwrap();
//! catalog.load_destinations(
//!     "SLUG,NAME,KIND,DESCRIPTION,ELEVATION,IS_POPULAR,IMAGE_URL\n\
//!      kedarnath,Kedarnath,temple-town,Jyotirlinga shrine in the Garhwal Himalayas,3583,1,/img/kedarnath.jpg\n",
//! )
//! .unwrap();
//!
//! let all = catalog.query_destinations().unwrap();
//! let hits = catalog.search_destinations("kedar").unwrap();
//! assert_eq!(all.len(), hits.len());
//! ```
//!
//! The catalog is read-only from the UI's point of view; the CSV fixture is
//! produced offline by the `yatra-cli` sync tool.

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the destination catalog.
///
/// Cheaply cloneable (via `Rc`) and suitable for sharing across Dioxus
/// components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Catalog {
    conn: Rc<RefCell<Connection>>,
}

impl Catalog {
    /// Create a new in-memory catalog with the schema applied.
    ///
    /// The catalog is empty after creation; use
    /// [`load_destinations`](Self::load_destinations) to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
