use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use techstore_core::{DomainError, DomainResult, Entity, ValueObject};

use crate::product::{Product, ProductId};

/// Sentinel category meaning "no filter applied".
pub const ALL_CATEGORIES: &str = "All";

/// A category name as shown in the category filter bar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The "All" sentinel.
    pub fn all() -> Self {
        Self(ALL_CATEGORIES.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_all(&self) -> bool {
        self.0 == ALL_CATEGORIES
    }
}

impl ValueObject for Category {}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Category {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Category {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Read-only product catalog.
///
/// Built once at startup; every query is a pure function of the product list.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog, validating every product and the id uniqueness invariant.
    ///
    /// Categories are derived from the products in first-appearance order, with
    /// the "All" sentinel in front.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen_ids = HashSet::with_capacity(products.len());
        let mut categories = vec![Category::all()];

        for product in &products {
            product.validate()?;

            if !seen_ids.insert(*product.id()) {
                return Err(DomainError::validation(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }

            if product.category == ALL_CATEGORIES {
                return Err(DomainError::validation(format!(
                    "product {} uses the reserved category \"{ALL_CATEGORIES}\"",
                    product.id
                )));
            }

            if !categories.iter().any(|c| *c == product.category.as_str()) {
                categories.push(Category::new(product.category.clone()));
            }
        }

        tracing::debug!(
            products = products.len(),
            categories = categories.len() - 1,
            "catalog loaded"
        );

        Ok(Self {
            products,
            categories,
        })
    }

    /// All products in dataset order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// "All" followed by each distinct category exactly once.
    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    /// Products in `category`, preserving dataset order.
    ///
    /// The "All" sentinel yields every product; an unknown category yields
    /// nothing.
    pub fn filter_by_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        let everything = category == ALL_CATEGORIES;
        self.products
            .iter()
            .filter(move |p| everything || p.category == category)
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| *p.id() == id)
    }
}
