//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `ticket`: Ticket types, ticket requests and purchase requests
//! - `error`: Error types for the purchase engine

pub mod error;
pub mod ticket;

pub use error::{InvalidPurchase, PurchaseError, ServiceError};
pub use ticket::{AccountId, PurchaseRequest, TicketType, TicketTypeRequest};
