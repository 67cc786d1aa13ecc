//! In-memory collaborators
//!
//! Recording implementations of the seat reservation and payment services.
//! Each keeps an ordered log of the calls it accepted, in the way the
//! account and transaction stores keep their state in plain maps. They can
//! be switched into a failing mode to exercise error propagation.

use crate::core::traits::{SeatReservationService, TicketPaymentService};
use crate::types::{AccountId, ServiceError};
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::debug;

/// Error returned by an in-memory collaborator in failing mode
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{service} unavailable: {reason}")]
pub struct CollaboratorUnavailable {
    pub service: &'static str,
    pub reason: String,
}

/// A seat reservation accepted by [`InMemorySeatReservation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reservation {
    pub account_id: AccountId,
    pub total_seats: u32,
}

/// A payment accepted by [`InMemoryPaymentGateway`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payment {
    pub account_id: AccountId,
    pub total_amount: u64,
}

/// Seat reservation service that records reservations in memory
#[derive(Debug, Default)]
pub struct InMemorySeatReservation {
    reservations: Mutex<Vec<Reservation>>,
    failure: Option<String>,
}

impl InMemorySeatReservation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service that rejects every reservation with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        InMemorySeatReservation {
            reservations: Mutex::default(),
            failure: Some(reason.into()),
        }
    }

    /// Reservations accepted so far, in call order
    pub fn reservations(&self) -> Vec<Reservation> {
        lock(&self.reservations).clone()
    }
}

impl SeatReservationService for InMemorySeatReservation {
    fn reserve_seat(&self, account_id: AccountId, total_seats: u32) -> Result<(), ServiceError> {
        if let Some(reason) = &self.failure {
            return Err(Box::new(CollaboratorUnavailable {
                service: "seat reservation",
                reason: reason.clone(),
            }));
        }

        debug!(account_id, total_seats, "seats reserved");
        lock(&self.reservations).push(Reservation {
            account_id,
            total_seats,
        });
        Ok(())
    }
}

/// Payment service that records payments in memory
#[derive(Debug, Default)]
pub struct InMemoryPaymentGateway {
    payments: Mutex<Vec<Payment>>,
    failure: Option<String>,
}

impl InMemoryPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gateway that declines every payment with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        InMemoryPaymentGateway {
            payments: Mutex::default(),
            failure: Some(reason.into()),
        }
    }

    /// Payments accepted so far, in call order
    pub fn payments(&self) -> Vec<Payment> {
        lock(&self.payments).clone()
    }

    /// Sum of all accepted payments for an account
    pub fn total_charged(&self, account_id: AccountId) -> u64 {
        lock(&self.payments)
            .iter()
            .filter(|payment| payment.account_id == account_id)
            .map(|payment| payment.total_amount)
            .sum()
    }
}

impl TicketPaymentService for InMemoryPaymentGateway {
    fn make_payment(&self, account_id: AccountId, total_amount: u64) -> Result<(), ServiceError> {
        if let Some(reason) = &self.failure {
            return Err(Box::new(CollaboratorUnavailable {
                service: "payment gateway",
                reason: reason.clone(),
            }));
        }

        debug!(account_id, total_amount, "payment taken");
        lock(&self.payments).push(Payment {
            account_id,
            total_amount,
        });
        Ok(())
    }
}

// A panic while pushing cannot leave a Vec half-written, so a poisoned log is
// still usable.
fn lock<T>(log: &Mutex<T>) -> MutexGuard<'_, T> {
    log.lock().unwrap_or_else(PoisonError::into_inner)
}
