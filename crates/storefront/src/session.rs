use chrono::Utc;
use serde::Serialize;

use techstore_cart::{Cart, CartEvent, CartLineItem};
use techstore_catalog::{ALL_CATEGORIES, Catalog, Category, Product, ProductId};
use techstore_core::{AggregateRoot, DomainError, DomainResult, SessionId};
use techstore_events::{Event, EventEnvelope};

use crate::checkout::{CheckoutError, CheckoutHook, CheckoutReceipt, OrderDraft};

/// Serializable view of the cart handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSnapshot {
    pub session_id: SessionId,
    pub lines: Vec<CartLineItem>,
    pub total: u128,
    pub count: u64,
}

/// One shopper's page session: the catalog, their cart, and the category filter.
///
/// All user actions go through this type. Every cart mutation that changed
/// something is appended to the session journal; an empty return means the
/// view does not need to re-render.
#[derive(Debug, Clone)]
pub struct StorefrontSession {
    catalog: Catalog,
    cart: Cart,
    selected_category: Category,
    journal: Vec<EventEnvelope<CartEvent>>,
}

impl StorefrontSession {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_id(SessionId::new(), catalog)
    }

    pub fn with_id(session_id: SessionId, catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::empty(session_id),
            selected_category: Category::all(),
            journal: Vec::new(),
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.cart.session_id()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn journal(&self) -> &[EventEnvelope<CartEvent>] {
        &self.journal
    }

    // -- catalog ----------------------------------------------------------

    pub fn categories(&self) -> &[Category] {
        self.catalog.list_categories()
    }

    pub fn selected_category(&self) -> &Category {
        &self.selected_category
    }

    /// Switch the category filter.
    ///
    /// Names outside the catalog's category list are accepted and simply match
    /// nothing.
    pub fn select_category(&mut self, category: &str) {
        if !self.catalog.list_categories().iter().any(|c| *c == category) {
            tracing::warn!(category, "selected category is not in the catalog");
        }
        self.selected_category = Category::new(category);
    }

    /// Products shown under the current filter.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog
            .filter_by_category(self.selected_category.as_str())
            .collect()
    }

    pub fn reset_filter(&mut self) {
        self.selected_category = Category::new(ALL_CATEGORIES);
    }

    // -- cart -------------------------------------------------------------

    /// "Add to cart" button on a product card.
    ///
    /// Unknown product ids (stale UI) are ignored.
    pub fn add_product(&mut self, product_id: ProductId) -> Vec<CartEvent> {
        let Some(product) = self.catalog.product(product_id) else {
            tracing::warn!(%product_id, "add to cart for unknown product ignored");
            return Vec::new();
        };
        let events = self.cart.add_to_cart(product);
        self.record(events)
    }

    pub fn remove_product(&mut self, product_id: ProductId) -> Vec<CartEvent> {
        let events = self.cart.remove_from_cart(product_id);
        self.record(events)
    }

    pub fn set_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> DomainResult<Vec<CartEvent>> {
        match self.cart.set_quantity(product_id, quantity) {
            Ok(events) => Ok(self.record(events)),
            Err(e) => {
                tracing::warn!(%product_id, quantity, error = %e, "quantity change rejected");
                Err(e)
            }
        }
    }

    /// "+" button next to a cart line.
    pub fn increment(&mut self, product_id: ProductId) -> Vec<CartEvent> {
        match self.cart.line(product_id) {
            Some(line) => {
                let product = line.product.clone();
                let events = self.cart.add_to_cart(&product);
                self.record(events)
            }
            None => Vec::new(),
        }
    }

    /// "-" button next to a cart line; going below 1 removes the line.
    pub fn decrement(&mut self, product_id: ProductId) -> Vec<CartEvent> {
        match self.cart.line(product_id).map(|l| i64::from(l.quantity)) {
            Some(quantity) => self
                .set_quantity(product_id, quantity - 1)
                .unwrap_or_default(),
            None => Vec::new(),
        }
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            session_id: self.session_id(),
            lines: self.cart.lines().to_vec(),
            total: self.cart.cart_total(),
            count: self.cart.cart_count(),
        }
    }

    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
    }

    // -- checkout ---------------------------------------------------------

    /// "Place order": hand the cart to `hook`.
    ///
    /// The cart is left as it is; clearing it is up to whoever confirms the
    /// order.
    pub fn checkout(&self, hook: &dyn CheckoutHook) -> Result<CheckoutReceipt, CheckoutError> {
        if self.cart.is_empty() {
            return Err(DomainError::validation("cannot check out an empty cart").into());
        }

        let draft = OrderDraft {
            session_id: self.session_id(),
            lines: self.cart.lines().to_vec(),
            total: self.cart.cart_total(),
            item_count: self.cart.cart_count(),
            created_at: Utc::now(),
        };

        tracing::info!(session_id = %draft.session_id, total = %draft.total, "checkout");
        hook.submit(&draft)
    }

    fn record(&mut self, events: Vec<CartEvent>) -> Vec<CartEvent> {
        let session_id = self.session_id();
        for event in &events {
            let sequence_number = self.journal.len() as u64 + 1;
            tracing::debug!(
                %session_id,
                sequence_number,
                event_type = event.event_type(),
                product_id = %event.product_id(),
                version = self.cart.version(),
                "cart changed"
            );
            self.journal
                .push(EventEnvelope::new(session_id, sequence_number, event.clone()));
        }
        events
    }
}
