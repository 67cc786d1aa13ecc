//! Core business logic module
//!
//! This module contains the purchase processing components:
//! - `traits` - Collaborator and entry-point trait abstractions
//! - `rules` - Purchase rule configuration
//! - `validator` - Ordered validation of purchase requests
//! - `aggregator` - Seat and price totals
//! - `processor` - Purchase orchestration
//! - `in_memory` - Recording in-memory collaborators

pub mod aggregator;
pub mod in_memory;
pub mod processor;
pub mod rules;
pub mod traits;
pub mod validator;

pub use aggregator::PurchaseTotals;
pub use in_memory::{InMemoryPaymentGateway, InMemorySeatReservation};
pub use processor::TicketPurchaseProcessor;
pub use rules::PurchaseRules;
pub use traits::{SeatReservationService, TicketPaymentService, TicketService};
pub use validator::{validate, ValidatedPurchase};
