//! Purchase request validation
//!
//! Rules run in a fixed order and the first failure is reported:
//!
//! 1. account identifier
//! 2. request structure (list present, every entry typed)
//! 3. number of seated tickets
//! 4. adult presence
//!
//! The same request can break several rules at once, so the order decides
//! which reason the caller sees. An infant-only request, for instance, is
//! rejected by the quantity rule before the adult rule runs.

use crate::core::rules::PurchaseRules;
use crate::types::{AccountId, InvalidPurchase, PurchaseRequest, TicketType};

/// A purchase request that passed every rule
///
/// Only [`validate`] constructs this, so holding one proves the account is
/// valid and every ticket line carries a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPurchase {
    account_id: AccountId,
    lines: Vec<(TicketType, u32)>,
}

impl ValidatedPurchase {
    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// Ticket lines in request order
    pub fn lines(&self) -> &[(TicketType, u32)] {
        &self.lines
    }
}

type Rule = fn(&PurchaseRequest, &PurchaseRules) -> Result<(), InvalidPurchase>;

/// Validation rules in evaluation order
const RULES: [(&str, Rule); 4] = [
    ("account", check_account),
    ("structure", check_structure),
    ("quantity", check_quantity),
    ("adult", check_adult),
];

/// Validate a purchase request against the rules, in order
///
/// # Errors
///
/// Returns the [`InvalidPurchase`] of the first rule that fails.
pub fn validate(
    request: &PurchaseRequest,
    rules: &PurchaseRules,
) -> Result<ValidatedPurchase, InvalidPurchase> {
    for (_, rule) in RULES {
        rule(request, rules)?;
    }

    Ok(ValidatedPurchase {
        account_id: request.account_id,
        lines: typed_lines(request).collect(),
    })
}

fn typed_lines(request: &PurchaseRequest) -> impl Iterator<Item = (TicketType, u32)> + '_ {
    request
        .tickets
        .iter()
        .flatten()
        .filter_map(|ticket| ticket.ticket_type().map(|t| (t, ticket.quantity())))
}

/// Sum of quantities of tickets that take a seat
///
/// Summed in u64 so a long list of large quantities cannot overflow before
/// the range check sees it.
fn seated_quantity(request: &PurchaseRequest) -> u64 {
    typed_lines(request)
        .filter(|(ticket_type, _)| ticket_type.occupies_seat())
        .map(|(_, quantity)| u64::from(quantity))
        .sum()
}

fn check_account(request: &PurchaseRequest, _: &PurchaseRules) -> Result<(), InvalidPurchase> {
    if request.account_id < 1 {
        return Err(InvalidPurchase::invalid_account(request.account_id));
    }
    Ok(())
}

fn check_structure(request: &PurchaseRequest, _: &PurchaseRules) -> Result<(), InvalidPurchase> {
    match &request.tickets {
        Some(tickets) if tickets.iter().all(|t| t.ticket_type().is_some()) => Ok(()),
        _ => Err(InvalidPurchase::MalformedRequest),
    }
}

fn check_quantity(request: &PurchaseRequest, rules: &PurchaseRules) -> Result<(), InvalidPurchase> {
    let requested = seated_quantity(request);
    let max = rules.max_tickets_per_purchase;

    if requested < 1 || requested > u64::from(max) {
        return Err(InvalidPurchase::quantity_out_of_range(requested, max));
    }
    Ok(())
}

fn check_adult(request: &PurchaseRequest, _: &PurchaseRules) -> Result<(), InvalidPurchase> {
    if typed_lines(request).any(|(ticket_type, _)| ticket_type == TicketType::Adult) {
        Ok(())
    } else {
        Err(InvalidPurchase::MissingAdult)
    }
}
