//! Catalog domain module.
//!
//! Holds the immutable product assortment and answers category-filtered queries.
//! Pure domain logic (no IO, no rendering).

pub mod catalog;
pub mod dataset;
pub mod product;

pub use catalog::{ALL_CATEGORIES, Catalog, Category};
pub use product::{Product, ProductId, discount_percent};
