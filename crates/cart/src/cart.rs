use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use techstore_catalog::{Product, ProductId};
use techstore_core::{Aggregate, AggregateRoot, DomainError, DomainResult, SessionId, ValueObject};
use techstore_events::Event;

/// Cart line: a product snapshot and how many of it are in the cart.
///
/// The snapshot is taken when the product is first added; later additions only
/// bump `quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub product: Product,
    /// Always at least 1; a line that would reach 0 is removed instead.
    pub quantity: u32,
}

impl CartLineItem {
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Snapshot price times quantity.
    ///
    /// Widened to `u128`: any `u64` price times any `u32` quantity fits.
    pub fn line_total(&self) -> u128 {
        u128::from(self.product.price) * u128::from(self.quantity)
    }
}

impl ValueObject for CartLineItem {}

/// Aggregate root: Cart.
///
/// One cart per storefront session, starting empty. Lines keep the order in
/// which distinct products were first added, with at most one line per product.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    id: SessionId,
    lines: Vec<CartLineItem>,
    version: u64,
}

impl Cart {
    /// Create an empty cart for a session.
    pub fn empty(id: SessionId) -> Self {
        Self {
            id,
            lines: Vec::new(),
            version: 0,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.id
    }

    /// Read-only snapshot of the lines, in first-added order.
    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLineItem> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.line(product_id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `price * quantity` over all lines, using snapshot prices.
    ///
    /// Exact for every reachable cart: at most one line per `u32` product id,
    /// each below 2^96.
    pub fn cart_total(&self) -> u128 {
        self.lines.iter().map(CartLineItem::line_total).sum()
    }

    /// Sum of quantities (not the number of distinct lines).
    pub fn cart_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Add one unit of `product`.
    pub fn add_to_cart(&mut self, product: &Product) -> Vec<CartEvent> {
        let events = self.decide_add(&AddToCart {
            product: product.clone(),
            occurred_at: Utc::now(),
        });
        self.apply_all(&events);
        events
    }

    /// Remove the line for `product_id`; absent ids are a no-op.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> Vec<CartEvent> {
        let events = self.decide_remove(&RemoveFromCart {
            product_id,
            occurred_at: Utc::now(),
        });
        self.apply_all(&events);
        events
    }

    /// Replace the quantity for `product_id`.
    ///
    /// `0` removes the line, negative values are rejected with
    /// [`DomainError::InvalidQuantity`] and leave the cart untouched.
    pub fn set_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> DomainResult<Vec<CartEvent>> {
        self.execute(&CartCommand::SetQuantity(SetQuantity {
            product_id,
            quantity,
            occurred_at: Utc::now(),
        }))
    }

    fn apply_all(&mut self, events: &[CartEvent]) {
        for event in events {
            self.apply(event);
        }
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.lines.iter().position(|l| l.product.id == product_id)
    }
}

impl AggregateRoot for Cart {
    type Id = SessionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddToCart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddToCart {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveFromCart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveFromCart {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: SetQuantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetQuantity {
    pub product_id: ProductId,
    /// Signed so that negative input can be rejected rather than wrapped.
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CartCommand {
    AddToCart(AddToCart),
    RemoveFromCart(RemoveFromCart),
    SetQuantity(SetQuantity),
}

/// Event: ItemAdded (new line with quantity 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Event: QuantityIncremented (same product added again).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityIncremented {
    pub product_id: ProductId,
    /// Quantity after the increment.
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: QuantityChanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityChanged {
    pub product_id: ProductId,
    pub from: u32,
    pub to: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub product_id: ProductId,
    /// Quantity the line held when it was removed.
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CartEvent {
    ItemAdded(ItemAdded),
    QuantityIncremented(QuantityIncremented),
    QuantityChanged(QuantityChanged),
    ItemRemoved(ItemRemoved),
}

impl CartEvent {
    pub fn product_id(&self) -> ProductId {
        match self {
            CartEvent::ItemAdded(e) => e.product.id,
            CartEvent::QuantityIncremented(e) => e.product_id,
            CartEvent::QuantityChanged(e) => e.product_id,
            CartEvent::ItemRemoved(e) => e.product_id,
        }
    }
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded(_) => "cart.item.added",
            CartEvent::QuantityIncremented(_) => "cart.item.quantity_incremented",
            CartEvent::QuantityChanged(_) => "cart.item.quantity_changed",
            CartEvent::ItemRemoved(_) => "cart.item.removed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::ItemAdded(e) => e.occurred_at,
            CartEvent::QuantityIncremented(e) => e.occurred_at,
            CartEvent::QuantityChanged(e) => e.occurred_at,
            CartEvent::ItemRemoved(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::ItemAdded(e) => {
                self.lines.push(CartLineItem {
                    product: e.product.clone(),
                    quantity: 1,
                });
            }
            CartEvent::QuantityIncremented(e) => {
                if let Some(idx) = self.position(e.product_id) {
                    self.lines[idx].quantity = e.quantity;
                }
            }
            CartEvent::QuantityChanged(e) => {
                if let Some(idx) = self.position(e.product_id) {
                    self.lines[idx].quantity = e.to;
                }
            }
            CartEvent::ItemRemoved(e) => {
                self.lines.retain(|l| l.product.id != e.product_id);
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CartCommand::AddToCart(cmd) => Ok(self.decide_add(cmd)),
            CartCommand::RemoveFromCart(cmd) => Ok(self.decide_remove(cmd)),
            CartCommand::SetQuantity(cmd) => self.decide_set_quantity(cmd),
        }
    }
}

impl Cart {
    fn decide_add(&self, cmd: &AddToCart) -> Vec<CartEvent> {
        match self.line(cmd.product.id) {
            Some(line) => vec![CartEvent::QuantityIncremented(QuantityIncremented {
                product_id: cmd.product.id,
                quantity: line.quantity.saturating_add(1),
                occurred_at: cmd.occurred_at,
            })],
            None => vec![CartEvent::ItemAdded(ItemAdded {
                product: cmd.product.clone(),
                occurred_at: cmd.occurred_at,
            })],
        }
    }

    fn decide_remove(&self, cmd: &RemoveFromCart) -> Vec<CartEvent> {
        match self.line(cmd.product_id) {
            Some(line) => vec![CartEvent::ItemRemoved(ItemRemoved {
                product_id: cmd.product_id,
                quantity: line.quantity,
                occurred_at: cmd.occurred_at,
            })],
            None => Vec::new(),
        }
    }

    fn decide_set_quantity(&self, cmd: &SetQuantity) -> DomainResult<Vec<CartEvent>> {
        if cmd.quantity < 0 {
            return Err(DomainError::invalid_quantity(cmd.quantity));
        }

        if cmd.quantity == 0 {
            return Ok(self.decide_remove(&RemoveFromCart {
                product_id: cmd.product_id,
                occurred_at: cmd.occurred_at,
            }));
        }

        let to = u32::try_from(cmd.quantity)
            .map_err(|_| DomainError::invalid_quantity(cmd.quantity))?;

        match self.line(cmd.product_id) {
            Some(line) if line.quantity != to => {
                Ok(vec![CartEvent::QuantityChanged(QuantityChanged {
                    product_id: cmd.product_id,
                    from: line.quantity,
                    to,
                    occurred_at: cmd.occurred_at,
                })])
            }
            _ => Ok(Vec::new()),
        }
    }
}
