//! Plain-text rendering of the storefront page.

use std::fmt::Write as _;

use techstore_catalog::Product;

use crate::config::StorefrontConfig;
use crate::content;
use crate::session::StorefrontSession;

/// `89990` -> `"89 990"`.
pub fn group_thousands(amount: u128) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

pub fn format_price(amount: impl Into<u128>, currency: &str) -> String {
    format!("{} {currency}", group_thousands(amount.into()))
}

pub fn render_product(product: &Product, currency: &str) -> String {
    let mut out = String::new();
    let _ = write!(out, "#{} {} [{}]", product.id, product.name, product.category);
    if let Some(discount) = product.discount_percent() {
        let _ = write!(out, " -{discount}%");
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "    ★ {:.1} ({} reviews) | {}",
        product.rating,
        product.review_count,
        product.specs.join(" · ")
    );
    let _ = write!(out, "    {}", format_price(product.price, currency));
    if let Some(old_price) = product.old_price {
        let _ = write!(out, " (was {})", format_price(old_price, currency));
    }
    out
}

/// Category bar plus the products under the selected filter.
pub fn render_catalog(session: &StorefrontSession, config: &StorefrontConfig) -> String {
    let mut out = String::new();
    let bar: Vec<String> = session
        .categories()
        .iter()
        .map(|c| {
            if c == session.selected_category() {
                format!("[{c}]")
            } else {
                c.to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "{}", bar.join("  "));

    let products = session.visible_products();
    if products.is_empty() {
        let _ = writeln!(out, "No products in this category.");
    }
    for product in products {
        let _ = writeln!(out, "{}", render_product(product, &config.currency));
    }
    out
}

pub fn render_cart(session: &StorefrontSession, config: &StorefrontConfig) -> String {
    let cart = session.cart();
    let mut out = String::new();
    let _ = writeln!(out, "Cart ({})", cart.cart_count());

    if cart.is_empty() {
        let _ = writeln!(out, "Your cart is empty.");
        return out;
    }

    for line in cart.lines() {
        let _ = writeln!(
            out,
            "  {} x{} @ {} = {}",
            line.product.name,
            line.quantity,
            format_price(line.product.price, &config.currency),
            format_price(line.line_total(), &config.currency)
        );
    }

    let total = cart.cart_total();
    let _ = writeln!(out, "Total: {}", format_price(total, &config.currency));
    if content::free_delivery(total, config.free_delivery_from) {
        let _ = writeln!(out, "Free delivery");
    }
    out
}

/// Delivery terms, reviews and contacts.
pub fn render_info(config: &StorefrontConfig) -> String {
    let mut out = String::new();
    for card in content::delivery_terms(config.free_delivery_from, &config.currency) {
        let _ = writeln!(out, "{}: {}", card.title, card.body);
    }
    for review in content::reviews() {
        let stars = "★".repeat(usize::from(review.rating));
        let _ = writeln!(out, "{} {stars} {}", review.author, review.text);
    }
    let contacts = content::contacts();
    let _ = writeln!(out, "{} | {}", contacts.phone, contacts.email);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use techstore_catalog::{Catalog, ProductId};

    fn session() -> StorefrontSession {
        StorefrontSession::new(Catalog::techstore().unwrap())
    }

    #[test]
    fn groups_thousands_with_spaces() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(5000), "5 000");
        assert_eq!(group_thousands(89990), "89 990");
        assert_eq!(group_thousands(129990), "129 990");
        assert_eq!(group_thousands(1234567), "1 234 567");
        assert_eq!(
            group_thousands(u128::from(u64::MAX) * 2),
            "36 893 488 147 419 103 230"
        );
    }

    #[test]
    fn product_card_shows_discount_and_old_price() {
        let catalog = Catalog::techstore().unwrap();
        let phone = catalog.product(ProductId::new(1)).unwrap();
        let card = render_product(phone, "₽");

        assert!(card.contains("-10%"));
        assert!(card.contains("89 990 ₽ (was 99 990 ₽)"));
    }

    #[test]
    fn empty_cart_message() {
        let out = render_cart(&session(), &StorefrontConfig::default());
        assert!(out.contains("Your cart is empty."));
        assert!(!out.contains("Total"));
    }

    #[test]
    fn cart_lists_lines_and_total() {
        let mut session = session();
        session.add_product(ProductId::new(2));
        session.add_product(ProductId::new(3));
        session.add_product(ProductId::new(3));

        let out = render_cart(&session, &StorefrontConfig::default());
        assert!(out.starts_with("Cart (3)"));
        assert!(out.contains("x2 @ 34 990 ₽ = 69 980 ₽"));
        assert!(out.contains("Total: 94 970 ₽"));
        assert!(out.contains("Free delivery"));
    }

    #[test]
    fn catalog_marks_selected_category() {
        let mut session = session();
        session.select_category("Tablets");
        let out = render_catalog(&session, &StorefrontConfig::default());

        assert!(out.lines().next().unwrap().contains("[Tablets]"));
        assert!(out.contains("TabPro Max tablet"));
        assert!(!out.contains("SmartWatch"));
    }

    #[test]
    fn info_section_lists_contacts() {
        let out = render_info(&StorefrontConfig::default());
        assert!(out.contains("info@techstore.ru"));
        assert!(out.contains("Free from 5 000 ₽"));
    }
}
