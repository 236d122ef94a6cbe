//! Shopping cart domain module (event-driven).
//!
//! This crate contains the cart's business rules, implemented purely as
//! deterministic domain logic (no IO, no rendering, no persistence).

pub mod cart;

pub use cart::{
    AddToCart, Cart, CartCommand, CartEvent, CartLineItem, ItemAdded, ItemRemoved,
    QuantityChanged, QuantityIncremented, RemoveFromCart, SetQuantity,
};
pub use techstore_catalog::discount_percent;
