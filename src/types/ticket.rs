//! Ticket-related types for the Ticket Purchase Engine
//!
//! This module defines the ticket types with their fixed prices, the
//! per-type ticket requests and the purchase request that groups them
//! under one account.

use serde::{Deserialize, Serialize};

/// Account identifier
///
/// Signed so that out-of-range identifiers (zero, negatives) can reach the
/// validator and be rejected with a proper error instead of failing to parse.
pub type AccountId = i64;

/// Ticket types that can be purchased
///
/// The price table is closed: every variant carries its own unit price and
/// whether it occupies a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    /// Full-price ticket; at least one is required per purchase
    Adult,

    /// Reduced-price ticket with its own seat
    Child,

    /// Free ticket; infants sit on an adult's lap and take no seat
    Infant,
}

impl TicketType {
    /// Unit price of a single ticket of this type
    pub const fn unit_price(self) -> u32 {
        match self {
            TicketType::Adult => 20,
            TicketType::Child => 10,
            TicketType::Infant => 0,
        }
    }

    /// Whether tickets of this type are allocated a seat and count toward
    /// the per-purchase ticket limit
    pub const fn occupies_seat(self) -> bool {
        !matches!(self, TicketType::Infant)
    }
}

/// Request for a number of tickets of a single type
///
/// The ticket type is optional because requests built from external input
/// may arrive without one; such requests are rejected during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    #[serde(rename = "type", default)]
    ticket_type: Option<TicketType>,
    quantity: u32,
}

impl TicketTypeRequest {
    /// Create a request for `quantity` tickets of `ticket_type`
    pub const fn new(ticket_type: TicketType, quantity: u32) -> Self {
        TicketTypeRequest {
            ticket_type: Some(ticket_type),
            quantity,
        }
    }

    /// Create a request with no ticket type
    pub const fn untyped(quantity: u32) -> Self {
        TicketTypeRequest {
            ticket_type: None,
            quantity,
        }
    }

    pub const fn ticket_type(&self) -> Option<TicketType> {
        self.ticket_type
    }

    pub const fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// A single purchase: one account and an ordered batch of ticket requests
///
/// `tickets` is `None` when the caller supplied no request list at all,
/// which is distinct from an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub account_id: AccountId,

    #[serde(default)]
    pub tickets: Option<Vec<TicketTypeRequest>>,
}

impl PurchaseRequest {
    /// Create a purchase request for the given account and tickets
    pub fn new(account_id: AccountId, tickets: impl Into<Vec<TicketTypeRequest>>) -> Self {
        PurchaseRequest {
            account_id,
            tickets: Some(tickets.into()),
        }
    }

    /// Create a purchase request with no ticket list
    pub fn without_tickets(account_id: AccountId) -> Self {
        PurchaseRequest {
            account_id,
            tickets: None,
        }
    }
}
