//! Ticket purchase processor
//!
//! This module provides the TicketPurchaseProcessor that orchestrates a
//! purchase by coordinating between the validator, the aggregator and the two
//! external collaborators.
//!
//! Every purchase runs the same fixed sequence:
//! validate → compute totals → reserve seats → take payment
//!
//! There is no rollback. If payment fails after seats were reserved, the
//! reservation stays in place and the payment error is returned.

use crate::core::aggregator::{totals, PurchaseTotals};
use crate::core::rules::PurchaseRules;
use crate::core::traits::{SeatReservationService, TicketPaymentService, TicketService};
use crate::core::validator::validate;
use crate::types::{PurchaseError, PurchaseRequest};
use tracing::{debug, error, info, warn};

/// Ticket purchase processor
///
/// Holds the two collaborators and the purchase rules. Keeps no state between
/// purchases: calling [`TicketService::purchase`] twice with the same request
/// reserves and charges twice.
#[derive(Debug)]
pub struct TicketPurchaseProcessor<R, P> {
    seat_reservation: R,
    payment: P,
    rules: PurchaseRules,
}

impl<R, P> TicketPurchaseProcessor<R, P>
where
    R: SeatReservationService,
    P: TicketPaymentService,
{
    /// Create a processor using the default purchase rules
    pub fn new(seat_reservation: R, payment: P) -> Self {
        Self::with_rules(seat_reservation, payment, PurchaseRules::default())
    }

    /// Create a processor with custom purchase rules
    pub fn with_rules(seat_reservation: R, payment: P, rules: PurchaseRules) -> Self {
        TicketPurchaseProcessor {
            seat_reservation,
            payment,
            rules,
        }
    }

    pub fn rules(&self) -> &PurchaseRules {
        &self.rules
    }
}

impl<R, P> TicketService for TicketPurchaseProcessor<R, P>
where
    R: SeatReservationService,
    P: TicketPaymentService,
{
    /// Process a purchase
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The request fails validation (no collaborator is called)
    /// - Seat reservation fails (payment is not attempted)
    /// - Payment fails (the reservation is kept)
    fn purchase(&self, request: &PurchaseRequest) -> Result<PurchaseTotals, PurchaseError> {
        let account_id = request.account_id;
        debug!(
            account_id,
            entries = request.tickets.as_ref().map_or(0, Vec::len),
            "processing ticket purchase"
        );

        let validated = validate(request, &self.rules).map_err(|reason| {
            warn!(account_id, kind = reason.kind(), %reason, "purchase rejected");
            reason
        })?;

        let totals = totals(&validated);

        self.seat_reservation
            .reserve_seat(account_id, totals.total_seats)
            .map_err(|source| {
                error!(account_id, seats = totals.total_seats, error = %source, "seat reservation failed");
                PurchaseError::reservation(account_id, source)
            })?;

        self.payment
            .make_payment(account_id, totals.total_price)
            .map_err(|source| {
                error!(account_id, amount = totals.total_price, error = %source, "payment failed");
                PurchaseError::payment(account_id, source)
            })?;

        info!(
            account_id,
            seats = totals.total_seats,
            amount = totals.total_price,
            "ticket purchase completed"
        );
        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::{MockSeatReservationService, MockTicketPaymentService};
    use crate::types::{InvalidPurchase, TicketType, TicketTypeRequest};
    use mockall::predicate::eq;
    use mockall::Sequence;
    use rstest::rstest;

    fn processor(
        seat_reservation: MockSeatReservationService,
        payment: MockTicketPaymentService,
    ) -> TicketPurchaseProcessor<MockSeatReservationService, MockTicketPaymentService> {
        TicketPurchaseProcessor::new(seat_reservation, payment)
    }

    #[rstest]
    #[case::adults_only(24, vec![TicketTypeRequest::new(TicketType::Adult, 4)], 4, 80)]
    #[case::family(
        451,
        vec![
            TicketTypeRequest::new(TicketType::Adult, 10),
            TicketTypeRequest::new(TicketType::Child, 6),
            TicketTypeRequest::new(TicketType::Infant, 4),
        ],
        16,
        260
    )]
    #[case::one_of_each(
        367,
        vec![
            TicketTypeRequest::new(TicketType::Adult, 1),
            TicketTypeRequest::new(TicketType::Child, 1),
            TicketTypeRequest::new(TicketType::Infant, 1),
        ],
        2,
        30
    )]
    #[case::twenty_tickets(
        501,
        vec![
            TicketTypeRequest::new(TicketType::Adult, 12),
            TicketTypeRequest::new(TicketType::Child, 8),
            TicketTypeRequest::new(TicketType::Infant, 2),
        ],
        20,
        320
    )]
    fn test_purchase_reserves_then_charges(
        #[case] account_id: i64,
        #[case] tickets: Vec<TicketTypeRequest>,
        #[case] seats: u32,
        #[case] amount: u64,
    ) {
        let mut seq = Sequence::new();
        let mut seat_reservation = MockSeatReservationService::new();
        let mut payment = MockTicketPaymentService::new();

        seat_reservation
            .expect_reserve_seat()
            .with(eq(account_id), eq(seats))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        payment
            .expect_make_payment()
            .with(eq(account_id), eq(amount))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let totals = processor(seat_reservation, payment)
            .purchase_tickets(account_id, &tickets)
            .unwrap();

        assert_eq!(totals.total_seats, seats);
        assert_eq!(totals.total_price, amount);
    }

    #[rstest]
    #[case::invalid_account(PurchaseRequest::new(0, [TicketTypeRequest::new(TicketType::Adult, 2)]))]
    #[case::missing_list(PurchaseRequest::without_tickets(1))]
    #[case::too_many(PurchaseRequest::new(1, [TicketTypeRequest::new(TicketType::Adult, 21)]))]
    #[case::no_adult(PurchaseRequest::new(1, [TicketTypeRequest::new(TicketType::Child, 1)]))]
    fn test_rejected_purchase_calls_no_collaborator(#[case] request: PurchaseRequest) {
        let mut seat_reservation = MockSeatReservationService::new();
        let mut payment = MockTicketPaymentService::new();
        seat_reservation.expect_reserve_seat().never();
        payment.expect_make_payment().never();

        let result = processor(seat_reservation, payment).purchase(&request);

        assert!(matches!(result, Err(PurchaseError::InvalidPurchase(_))));
    }

    #[test]
    fn test_reservation_failure_skips_payment() {
        let mut seat_reservation = MockSeatReservationService::new();
        let mut payment = MockTicketPaymentService::new();
        seat_reservation
            .expect_reserve_seat()
            .times(1)
            .returning(|_, _| Err("no seats left".into()));
        payment.expect_make_payment().never();

        let result = processor(seat_reservation, payment)
            .purchase_tickets(5, &[TicketTypeRequest::new(TicketType::Adult, 2)]);

        match result {
            Err(PurchaseError::Reservation { account_id, source }) => {
                assert_eq!(account_id, 5);
                assert_eq!(source.to_string(), "no seats left");
            }
            other => panic!("Expected reservation error, got {:?}", other),
        }
    }

    #[test]
    fn test_payment_failure_is_returned_after_reservation() {
        let mut seat_reservation = MockSeatReservationService::new();
        let mut payment = MockTicketPaymentService::new();
        seat_reservation
            .expect_reserve_seat()
            .with(eq(6), eq(3))
            .times(1)
            .returning(|_, _| Ok(()));
        payment
            .expect_make_payment()
            .with(eq(6), eq(60))
            .times(1)
            .returning(|_, _| Err("card declined".into()));

        let result = processor(seat_reservation, payment)
            .purchase_tickets(6, &[TicketTypeRequest::new(TicketType::Adult, 3)]);

        assert!(matches!(
            result,
            Err(PurchaseError::Payment { account_id: 6, .. })
        ));
    }

    #[test]
    fn test_custom_rules_are_applied() {
        let mut seat_reservation = MockSeatReservationService::new();
        let mut payment = MockTicketPaymentService::new();
        seat_reservation.expect_reserve_seat().never();
        payment.expect_make_payment().never();

        let processor =
            TicketPurchaseProcessor::with_rules(seat_reservation, payment, PurchaseRules::new(2));
        let result = processor.purchase_tickets(1, &[TicketTypeRequest::new(TicketType::Adult, 3)]);

        assert_eq!(processor.rules().max_tickets_per_purchase, 2);
        assert_eq!(
            result.unwrap_err().as_invalid_purchase(),
            Some(&InvalidPurchase::quantity_out_of_range(3, 2))
        );
    }
}
