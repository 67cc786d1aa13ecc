//! Purchase rule configuration

use serde::Deserialize;
use tracing::warn;

/// Maximum number of seated tickets in a single purchase unless configured
/// otherwise
pub const DEFAULT_MAX_TICKETS_PER_PURCHASE: u32 = 20;

/// Configurable limits applied during validation
///
/// Prices are fixed by [`crate::types::TicketType`] and are not part of this
/// configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PurchaseRules {
    /// Maximum number of non-infant tickets per purchase
    pub max_tickets_per_purchase: u32,
}

impl Default for PurchaseRules {
    fn default() -> Self {
        Self {
            max_tickets_per_purchase: DEFAULT_MAX_TICKETS_PER_PURCHASE,
        }
    }
}

impl PurchaseRules {
    /// Create rules with a custom ticket limit
    ///
    /// A limit of zero would reject every purchase, so it falls back to the
    /// default with a warning.
    pub fn new(max_tickets_per_purchase: u32) -> Self {
        let default = Self::default();

        let max_tickets_per_purchase = if max_tickets_per_purchase == 0 {
            warn!(
                requested = max_tickets_per_purchase,
                fallback = default.max_tickets_per_purchase,
                "invalid max_tickets_per_purchase, using default"
            );
            default.max_tickets_per_purchase
        } else {
            max_tickets_per_purchase
        };

        Self {
            max_tickets_per_purchase,
        }
    }
}
