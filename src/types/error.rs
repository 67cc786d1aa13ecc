//! Error types for the Ticket Purchase Engine
//!
//! # Error Categories
//!
//! - **Invalid purchases**: the request broke a business rule and was
//!   rejected before any collaborator was called
//! - **Collaborator failures**: seat reservation or payment failed; the
//!   collaborator's own error is kept as the source, untouched

use super::ticket::AccountId;
use thiserror::Error;

/// Error type returned by the external collaborators
///
/// Boxed so that any collaborator error type can pass through the engine
/// without being translated.
pub type ServiceError = Box<dyn std::error::Error + Send + Sync>;

/// Reasons a purchase request is rejected
///
/// Each variant renders the human-readable reason reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPurchase {
    /// Account identifier is zero or negative
    #[error("Account ID must be greater than Zero")]
    InvalidAccount {
        /// The rejected account identifier
        account_id: AccountId,
    },

    /// The ticket list is missing, or one of its entries has no ticket type
    #[error("Ticket request or Ticket type must not be null")]
    MalformedRequest,

    /// Number of seated tickets is zero or above the per-purchase maximum
    #[error(
        "Ticket request must be greater than zero and less than or equals to {}",
        max_in_words(*max)
    )]
    QuantityOutOfRange {
        /// Total number of non-infant tickets requested
        requested: u64,
        /// Maximum allowed per purchase
        max: u32,
    },

    /// No adult ticket in the request
    #[error("Ticket request must have an adult")]
    MissingAdult,
}

fn max_in_words(max: u32) -> String {
    match max {
        20 => "twenty".to_string(),
        other => other.to_string(),
    }
}

/// Main error type for ticket purchases
#[derive(Debug, Error)]
pub enum PurchaseError {
    /// The request was rejected by validation; no collaborator was called
    #[error(transparent)]
    InvalidPurchase(#[from] InvalidPurchase),

    /// Seat reservation failed; payment was not attempted
    #[error("Seat reservation failed for account {account_id}: {source}")]
    Reservation {
        account_id: AccountId,
        #[source]
        source: ServiceError,
    },

    /// Payment failed after seats were reserved; the reservation is not
    /// released
    #[error("Payment failed for account {account_id}: {source}")]
    Payment {
        account_id: AccountId,
        #[source]
        source: ServiceError,
    },
}

impl InvalidPurchase {
    /// Create an InvalidAccount error
    pub fn invalid_account(account_id: AccountId) -> Self {
        InvalidPurchase::InvalidAccount { account_id }
    }

    /// Create a QuantityOutOfRange error
    pub fn quantity_out_of_range(requested: u64, max: u32) -> Self {
        InvalidPurchase::QuantityOutOfRange { requested, max }
    }

    /// Stable tag for this rejection, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            InvalidPurchase::InvalidAccount { .. } => "invalid_account",
            InvalidPurchase::MalformedRequest => "malformed_request",
            InvalidPurchase::QuantityOutOfRange { .. } => "quantity_out_of_range",
            InvalidPurchase::MissingAdult => "missing_adult",
        }
    }
}

impl PurchaseError {
    /// Create a Reservation error
    pub fn reservation(account_id: AccountId, source: ServiceError) -> Self {
        PurchaseError::Reservation { account_id, source }
    }

    /// Create a Payment error
    pub fn payment(account_id: AccountId, source: ServiceError) -> Self {
        PurchaseError::Payment { account_id, source }
    }

    /// The validation failure, if this purchase was rejected as invalid
    pub fn as_invalid_purchase(&self) -> Option<&InvalidPurchase> {
        match self {
            PurchaseError::InvalidPurchase(reason) => Some(reason),
            _ => None,
        }
    }
}
