//! Storefront session: binds catalog queries and cart mutations to user actions.
//!
//! Rendering here is plain text; a real front end would replace `render` and
//! `main.rs` while keeping `session` as its only entry point into the domain.

pub mod checkout;
pub mod config;
pub mod content;
pub mod render;
pub mod session;

pub use checkout::{CheckoutError, CheckoutHook, CheckoutReceipt, NoopCheckout, OrderDraft};
pub use config::{ConfigWarning, StorefrontConfig};
pub use session::{CartSnapshot, StorefrontSession};
