mod elements;
mod error;
mod loader;
mod parser;
mod types;

#[cfg(test)]
pub mod fixtures;

pub use elements::MeanOrbit;
pub use loader::CatalogFetcher;
pub use types::{Catalog, CatalogRecord};
