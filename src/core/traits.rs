//! Core traits for the external collaborators and the purchase entry point
//!
//! The seat reservation and payment services are implemented outside this
//! crate; the engine only depends on these traits. Both are synchronous and
//! report failure through their `Result`.

use crate::core::aggregator::PurchaseTotals;
use crate::types::{AccountId, PurchaseError, PurchaseRequest, ServiceError, TicketTypeRequest};
use std::sync::Arc;

/// Reserves seats for an account
#[cfg_attr(test, mockall::automock)]
pub trait SeatReservationService {
    /// Reserve `total_seats` seats for the account
    fn reserve_seat(&self, account_id: AccountId, total_seats: u32) -> Result<(), ServiceError>;
}

/// Takes payment from an account
#[cfg_attr(test, mockall::automock)]
pub trait TicketPaymentService {
    /// Charge `total_amount` to the account
    fn make_payment(&self, account_id: AccountId, total_amount: u64) -> Result<(), ServiceError>;
}

/// Purchase entry point
pub trait TicketService {
    /// Validate a purchase, reserve its seats and charge for it
    ///
    /// # Errors
    ///
    /// Returns `PurchaseError::InvalidPurchase` if the request breaks a
    /// purchase rule (nothing is reserved or charged in that case), or the
    /// collaborator's error if reservation or payment fails.
    fn purchase(&self, request: &PurchaseRequest) -> Result<PurchaseTotals, PurchaseError>;

    /// Convenience form of [`TicketService::purchase`] taking the account and
    /// ticket requests directly
    fn purchase_tickets(
        &self,
        account_id: AccountId,
        tickets: &[TicketTypeRequest],
    ) -> Result<PurchaseTotals, PurchaseError> {
        self.purchase(&PurchaseRequest::new(account_id, tickets))
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Arc<T> {
    fn reserve_seat(&self, account_id: AccountId, total_seats: u32) -> Result<(), ServiceError> {
        (**self).reserve_seat(account_id, total_seats)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for &T {
    fn reserve_seat(&self, account_id: AccountId, total_seats: u32) -> Result<(), ServiceError> {
        (**self).reserve_seat(account_id, total_seats)
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Arc<T> {
    fn make_payment(&self, account_id: AccountId, total_amount: u64) -> Result<(), ServiceError> {
        (**self).make_payment(account_id, total_amount)
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for &T {
    fn make_payment(&self, account_id: AccountId, total_amount: u64) -> Result<(), ServiceError> {
        (**self).make_payment(account_id, total_amount)
    }
}
