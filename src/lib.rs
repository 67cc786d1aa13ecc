//! Ticket Purchase Engine Library
//! # Overview
//!
//! This library validates ticket purchase requests, works out how many seats
//! to reserve and how much to charge, and hands both off to external seat
//! reservation and payment services.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (ticket types, requests, errors)
//! - [`core`] - Business logic components:
//!   - [`core::validator`] - Ordered purchase rules
//!   - [`core::aggregator`] - Seat and price totals
//!   - [`core::processor`] - Purchase orchestration
//!   - [`core::traits`] - Collaborator interfaces
//!   - [`core::in_memory`] - Recording collaborators for tests and local use
//!
//! # Ticket Types
//!
//! | Type   | Price | Seat |
//! |--------|-------|------|
//! | Adult  | 20    | yes  |
//! | Child  | 10    | yes  |
//! | Infant | 0     | no   |
//!
//! # Purchase Rules
//!
//! Checked in this order; the first one broken is reported:
//!
//! - The account ID must be greater than zero
//! - The ticket list must be present and every entry must have a type
//! - Between 1 and 20 adult and child tickets per purchase
//! - At least one adult ticket
//!
//! # Example
//!
//! ```
//! use ticket_purchase_engine::{
//!     InMemoryPaymentGateway, InMemorySeatReservation, TicketPurchaseProcessor, TicketService,
//!     TicketType, TicketTypeRequest,
//! };
//!
//! let processor =
//!     TicketPurchaseProcessor::new(InMemorySeatReservation::new(), InMemoryPaymentGateway::new());
//!
//! let totals = processor
//!     .purchase_tickets(
//!         451,
//!         &[
//!             TicketTypeRequest::new(TicketType::Adult, 10),
//!             TicketTypeRequest::new(TicketType::Child, 6),
//!             TicketTypeRequest::new(TicketType::Infant, 4),
//!         ],
//!     )
//!     .unwrap();
//!
//! assert_eq!(totals.total_seats, 16);
//! assert_eq!(totals.total_price, 260);
//! ```

// Module declarations
pub mod core;
pub mod types;

pub use crate::core::{
    InMemoryPaymentGateway, InMemorySeatReservation, PurchaseRules, PurchaseTotals,
    SeatReservationService, TicketPaymentService, TicketPurchaseProcessor, TicketService,
};
pub use types::{
    AccountId, InvalidPurchase, PurchaseError, PurchaseRequest, ServiceError, TicketType,
    TicketTypeRequest,
};
