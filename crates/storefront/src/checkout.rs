//! "Place order" hook point.
//!
//! The storefront does not submit orders itself. It hands an [`OrderDraft`] to
//! whatever [`CheckoutHook`] the presentation layer wires in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use techstore_cart::CartLineItem;
use techstore_core::{DomainError, SessionId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// The cart could not be turned into an order (e.g. it is empty).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The order-submission collaborator refused or failed.
    #[error("order submission failed: {0}")]
    Submission(String),
}

/// Everything an order-submission service needs to know about the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub session_id: SessionId,
    pub lines: Vec<CartLineItem>,
    pub total: u128,
    pub item_count: u64,
    pub created_at: DateTime<Utc>,
}

/// Acknowledgement returned by a [`CheckoutHook`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    pub reference: Uuid,
    pub session_id: SessionId,
    pub total: u128,
}

/// Order-submission seam.
pub trait CheckoutHook {
    fn submit(&self, draft: &OrderDraft) -> Result<CheckoutReceipt, CheckoutError>;
}

/// Default hook: logs the draft and acknowledges it without placing an order.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCheckout;

impl CheckoutHook for NoopCheckout {
    fn submit(&self, draft: &OrderDraft) -> Result<CheckoutReceipt, CheckoutError> {
        let reference = Uuid::now_v7();
        tracing::info!(
            session_id = %draft.session_id,
            %reference,
            lines = draft.lines.len(),
            items = draft.item_count,
            total = %draft.total,
            "checkout requested; no order service configured"
        );

        Ok(CheckoutReceipt {
            reference,
            session_id: draft.session_id,
            total: draft.total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> OrderDraft {
        OrderDraft {
            session_id: SessionId::new(),
            lines: Vec::new(),
            total: 94970,
            item_count: 3,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn noop_checkout_echoes_total() {
        let draft = draft();
        let receipt = NoopCheckout.submit(&draft).unwrap();
        assert_eq!(receipt.session_id, draft.session_id);
        assert_eq!(receipt.total, 94970);
    }

    #[test]
    fn domain_errors_pass_through_transparently() {
        let err: CheckoutError = DomainError::validation("cannot check out an empty cart").into();
        assert_eq!(err.to_string(), "validation failed: cannot check out an empty cart");
    }
}
