//! The static property portfolio and its pure query layer.
//!
//! Nothing here performs I/O. The catalog is a fixed, ordered dataset;
//! every operation is a total function over it, and absence (an unknown
//! property id) is an `Option`, never an error.

mod domain;
mod listings;
mod query;

pub use domain::{Property, PropertyType, Unit};
pub use query::{neighborhood_slug, Catalog, ListingFilter};
