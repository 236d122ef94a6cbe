use serde::{Deserialize, Serialize};

use techstore_core::{DomainError, DomainResult, Entity};

/// Product identifier (unique within a catalog).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ProductId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A product offered by the store.
///
/// Products are defined once when the catalog is built and never mutated
/// afterwards. Prices are whole currency units, consistent across a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: u64,
    /// Prior price, shown struck through next to a discount badge.
    pub old_price: Option<u64>,
    pub category: String,
    pub specs: Vec<String>,
    /// Average customer rating in `[0, 5]`.
    pub rating: f64,
    pub review_count: u32,
    pub image_url: String,
}

impl Product {
    /// Discount relative to `old_price`, in whole percent.
    pub fn discount_percent(&self) -> Option<u64> {
        discount_percent(self)
    }

    /// Check the per-product invariants a catalog relies on.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {} has an empty name",
                self.id
            )));
        }

        if self.category.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {} has an empty category",
                self.id
            )));
        }

        if let Some(old_price) = self.old_price {
            if old_price < self.price {
                return Err(DomainError::validation(format!(
                    "product {}: old_price {} is below price {}",
                    self.id, old_price, self.price
                )));
            }
        }

        if !(0.0..=5.0).contains(&self.rating) {
            return Err(DomainError::validation(format!(
                "product {}: rating {} outside [0, 5]",
                self.id, self.rating
            )));
        }

        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// `round((1 - price / old_price) * 100)`, rounding halves up.
///
/// Returns `None` when there is no prior price, when it is zero, or when it is
/// below the current price; no discount badge is shown then. Computed in
/// integers so the rounding is exact.
pub fn discount_percent(product: &Product) -> Option<u64> {
    let old_price = product.old_price.filter(|p| *p > 0)?;
    let saved = u128::from(old_price.checked_sub(product.price)?);
    let old_price = u128::from(old_price);

    // (200 * saved + old) / (2 * old) == floor(100 * saved / old + 1/2)
    let percent = (200 * saved + old_price) / (2 * old_price);
    Some(percent as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: u32, price: u64, old_price: Option<u64>) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price,
            old_price,
            category: "Audio".to_string(),
            specs: vec!["Bluetooth 5.3".to_string()],
            rating: 4.5,
            review_count: 10,
            image_url: String::new(),
        }
    }

    #[test]
    fn discount_for_flagship_phone_rounds_to_ten() {
        let product = test_product(1, 89990, Some(99990));
        assert_eq!(product.discount_percent(), Some(10));
    }

    #[test]
    fn discount_rounds_half_up() {
        // 1 - 87.5 / 100 = 12.5% -> 13 in integer units: 875 / 1000
        let product = test_product(1, 875, Some(1000));
        assert_eq!(discount_percent(&product), Some(13));

        // 1 - 33 / 49 = 32.65% -> 33
        let product = test_product(2, 33, Some(49));
        assert_eq!(discount_percent(&product), Some(33));
    }

    #[test]
    fn no_discount_without_old_price() {
        assert_eq!(test_product(1, 100, None).discount_percent(), None);
        assert_eq!(test_product(1, 0, Some(0)).discount_percent(), None);
    }

    #[test]
    fn equal_prices_give_zero_discount() {
        assert_eq!(test_product(1, 500, Some(500)).discount_percent(), Some(0));
    }

    #[test]
    fn price_above_old_price_shows_no_badge() {
        let product = test_product(1, 120, Some(100));
        assert!(product.validate().is_err());
        assert_eq!(product.discount_percent(), None);
    }

    #[test]
    fn free_product_is_full_discount() {
        assert_eq!(test_product(1, 0, Some(500)).discount_percent(), Some(100));
    }

    #[test]
    fn validate_rejects_old_price_below_price() {
        let err = test_product(3, 200, Some(100)).validate().unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("old_price") => {}
            _ => panic!("Expected validation error for old_price below price"),
        }
    }

    #[test]
    fn validate_rejects_out_of_range_rating() {
        let mut product = test_product(3, 100, None);
        product.rating = 5.1;
        assert!(product.validate().is_err());

        product.rating = -0.1;
        assert!(product.validate().is_err());

        product.rating = 5.0;
        assert!(product.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_category() {
        let mut product = test_product(3, 100, None);
        product.category = "  ".to_string();
        assert!(matches!(product.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn product_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&ProductId::new(42)).unwrap();
        assert_eq!(json, "42");
    }
}
