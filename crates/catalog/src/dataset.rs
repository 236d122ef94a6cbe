//! The built-in TechStore assortment.

use techstore_core::DomainResult;

use crate::catalog::Catalog;
use crate::product::{Product, ProductId};

const IMAGE_BASE: &str = "https://cdn.poehali.dev/projects/44b068fc-86b0-4cc6-bf5e-28a6dfb37924/files";

fn image(file: &str) -> String {
    format!("{IMAGE_BASE}/{file}")
}

fn specs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Products sold by the store, in display order.
pub fn techstore_products() -> Vec<Product> {
    let phone = image("b83a3df6-241f-4c27-b4c1-404b8fa12cd3.jpg");
    let audio = image("03789012-5613-4076-ba12-7f9d1e4753a6.jpg");
    let watch = image("3830ce76-67d0-4a3c-b3a6-1be46f52904e.jpg");

    vec![
        Product {
            id: ProductId::new(1),
            name: "ProMax Ultra smartphone".to_string(),
            price: 89990,
            old_price: Some(99990),
            category: "Smartphones".to_string(),
            specs: specs(&["6.7\" AMOLED", "256 GB", "5G", "108 MP"]),
            rating: 4.8,
            review_count: 342,
            image_url: phone.clone(),
        },
        Product {
            id: ProductId::new(2),
            name: "AirSound Pro wireless headphones".to_string(),
            price: 24990,
            old_price: None,
            category: "Audio".to_string(),
            specs: specs(&["Active ANC", "40 hours", "Bluetooth 5.3", "Hi-Res Audio"]),
            rating: 4.9,
            review_count: 567,
            image_url: audio.clone(),
        },
        Product {
            id: ProductId::new(3),
            name: "SmartWatch Elite".to_string(),
            price: 34990,
            old_price: Some(39990),
            category: "Wearables".to_string(),
            specs: specs(&["AMOLED display", "GPS", "Heart rate monitor", "7 days"]),
            rating: 4.7,
            review_count: 234,
            image_url: watch,
        },
        Product {
            id: ProductId::new(4),
            name: "UltraBook Pro 15 laptop".to_string(),
            price: 129990,
            old_price: None,
            category: "Computers".to_string(),
            specs: specs(&["Intel i7", "16 GB RAM", "512 GB SSD", "15.6\" 4K"]),
            rating: 4.6,
            review_count: 189,
            image_url: phone.clone(),
        },
        Product {
            id: ProductId::new(5),
            name: "TabPro Max tablet".to_string(),
            price: 64990,
            old_price: Some(74990),
            category: "Tablets".to_string(),
            specs: specs(&["12.9\" Retina", "256 GB", "Apple M2", "Face ID"]),
            rating: 4.9,
            review_count: 421,
            image_url: phone,
        },
        Product {
            id: ProductId::new(6),
            name: "BoomBox 360 portable speaker".to_string(),
            price: 12990,
            old_price: None,
            category: "Audio".to_string(),
            specs: specs(&["360° sound", "IPX7", "24 hours", "Bass Boost"]),
            rating: 4.5,
            review_count: 156,
            image_url: audio,
        },
    ]
}

impl Catalog {
    /// Catalog holding [`techstore_products`].
    pub fn techstore() -> DomainResult<Self> {
        Self::new(techstore_products())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::techstore().unwrap();
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn builtin_categories_follow_store_order() {
        let catalog = Catalog::techstore().unwrap();
        let names: Vec<&str> = catalog
            .list_categories()
            .iter()
            .map(|c| c.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["All", "Smartphones", "Audio", "Wearables", "Computers", "Tablets"]
        );
    }

    #[test]
    fn audio_filter_returns_headphones_then_speaker() {
        let catalog = Catalog::techstore().unwrap();
        let audio: Vec<u32> = catalog
            .filter_by_category("Audio")
            .map(|p| p.id.get())
            .collect();
        assert_eq!(audio, vec![2, 6]);
    }

    #[test]
    fn discounted_products_have_expected_badges() {
        let catalog = Catalog::techstore().unwrap();
        let badges: Vec<(u32, u64)> = catalog
            .products()
            .iter()
            .filter_map(|p| p.discount_percent().map(|d| (p.id.get(), d)))
            .collect();
        // 89990/99990 -> 10, 34990/39990 -> 13 (12.50...), 64990/74990 -> 13 (13.33...)
        assert_eq!(badges, vec![(1, 10), (3, 13), (5, 13)]);
    }
}
