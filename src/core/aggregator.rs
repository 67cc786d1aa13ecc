//! Purchase totals
//!
//! Computes the seat count and price of a validated purchase. Infants are
//! skipped entirely: they neither take a seat nor pay.

use crate::core::validator::ValidatedPurchase;

/// Seats to reserve and amount to charge for one purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PurchaseTotals {
    pub total_seats: u32,
    pub total_price: u64,
}

/// Compute the totals of a validated purchase
pub fn totals(purchase: &ValidatedPurchase) -> PurchaseTotals {
    purchase
        .lines()
        .iter()
        .filter(|(ticket_type, _)| ticket_type.occupies_seat())
        .fold(PurchaseTotals::default(), |acc, &(ticket_type, quantity)| {
            PurchaseTotals {
                // Bounded by the validated ticket limit
                total_seats: acc.total_seats.saturating_add(quantity),
                total_price: acc.total_price
                    + u64::from(ticket_type.unit_price()) * u64::from(quantity),
            }
        })
}
