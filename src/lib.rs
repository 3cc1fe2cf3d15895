//! countries_rs
//!
//! A small Rust library for retrieving, filtering, sorting, and exporting country data
//! from the public REST Countries API. Pairs with the `countries` CLI and the
//! `countries-gui` desktop viewer.
//!
//! ### Features
//! - Fetch every country once and flatten it into a tidy [`CountryRecord`]
//! - Filter by region, sort by any column in either direction
//! - Export the displayed rows as CSV (or JSON)
//! - Explicit, invalidatable in-memory cache of fetch results
//!
//! ### Example
//! ```no_run
//! use countries_rs::{Client, Column, FetchCache, RegionFilter, SortOrder, SortSpec, TableView};
//!
//! let client = Client::default();
//! let mut cache = FetchCache::new();
//! let outcome = client.load_cached(&mut cache);
//! if let Some(err) = &outcome.error {
//!     eprintln!("{err}");
//! }
//! let mut view = TableView::new(outcome.rows);
//! view.set_region(RegionFilter::Region("Europe".into()));
//! view.set_sort(SortSpec { column: Column::Population, order: SortOrder::Descending });
//! countries_rs::export::save_csv(view.displayed(), "europe.csv")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod models;
pub mod view;

pub use api::{Client, LoadOutcome};
pub use cache::FetchCache;
pub use config::ClientConfig;
pub use error::FetchError;
pub use models::{Column, CountryRecord, RegionFilter, SortOrder, SortSpec};
pub use view::TableView;
