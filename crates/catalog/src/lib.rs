//! Product catalog domain module.
//!
//! Read-only product data for the storefront: validated product records and
//! an ordered, paginated catalog, implemented purely as deterministic domain
//! logic (no IO, no HTTP, no storage). The cart never reads the catalog
//! itself; callers look products up here and pass the records into commands.

pub mod catalog;
pub mod product;

mod seed;

pub use catalog::{Catalog, PAGE_SIZE};
pub use product::Product;
