//! Static informational sections: delivery terms, reviews, contacts.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoCard {
    pub title: &'static str,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub author: &'static str,
    /// Whole stars, 1 to 5.
    pub rating: u8,
    pub text: &'static str,
}

impl Review {
    /// Author initial shown in the avatar bubble.
    pub fn initial(&self) -> Option<char> {
        self.author.chars().next()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contacts {
    pub phone: &'static str,
    pub email: &'static str,
}

/// Delivery, payment and warranty cards.
pub fn delivery_terms(free_delivery_from: u64, currency: &str) -> Vec<InfoCard> {
    vec![
        InfoCard {
            title: "Fast delivery",
            body: format!(
                "Moscow: 1 day. Russia: 2-5 days. Free from {} {currency}",
                crate::render::group_thousands(u128::from(free_delivery_from))
            ),
        },
        InfoCard {
            title: "Convenient payment",
            body: "Card online, cash to the courier, 0% installments for up to 12 months"
                .to_string(),
        },
        InfoCard {
            title: "Quality guarantee",
            body: "Official warranty on every product. Exchange and return within 14 days"
                .to_string(),
        },
    ]
}

pub fn reviews() -> Vec<Review> {
    vec![
        Review {
            author: "Alexey M.",
            rating: 5,
            text: "Great store! Fast delivery, the product matched the description. Recommended!",
        },
        Review {
            author: "Maria K.",
            rating: 5,
            text: "Bought a smartphone on sale. Very happy with the quality and service. Thanks!",
        },
        Review {
            author: "Dmitry P.",
            rating: 4,
            text: "Good choice of electronics, fair prices. Will order again.",
        },
    ]
}

pub fn contacts() -> Contacts {
    Contacts {
        phone: "+7 (495) 123-45-67",
        email: "info@techstore.ru",
    }
}

/// Whether a cart total qualifies for free delivery.
pub fn free_delivery(cart_total: u128, free_delivery_from: u64) -> bool {
    cart_total >= u128::from(free_delivery_from)
}
