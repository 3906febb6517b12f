//! Booking policy knobs
//!
//! The cancellation fee schedule, the no-show charge, and the
//! maintenance lead window are configuration, not code: an embedding
//! application deserializes its own [`BookingPolicy`] and the defaults
//! match the documented house rules.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::Rate;

/// One tier of the cancellation fee schedule
///
/// Applies when the cancellation happens at least `min_days_before`
/// calendar days ahead of check-in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeeTier {
    pub min_days_before: i64,
    pub rate: Rate,
}

/// Cancellation fee schedule, matched most-lenient tier first
///
/// Default schedule: 7+ days out free, 3 to 6 days out 50%, under 3
/// days 100%. Days are the integer calendar-day difference between the
/// hotel-local business date and the check-in date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancellationPolicy {
    tiers: Vec<FeeTier>,
}

impl CancellationPolicy {
    /// Builds a schedule; tiers are kept sorted by threshold descending
    pub fn new(mut tiers: Vec<FeeTier>) -> Self {
        tiers.sort_by(|a, b| b.min_days_before.cmp(&a.min_days_before));
        Self { tiers }
    }

    /// The fee rate for a cancellation `days_until_check_in` days out
    ///
    /// A negative value (check-in date already passed) falls through
    /// every tier and charges in full.
    pub fn rate_for(&self, days_until_check_in: i64) -> Rate {
        for tier in &self.tiers {
            if days_until_check_in >= tier.min_days_before {
                return tier.rate;
            }
        }
        Rate::full()
    }
}

impl Default for CancellationPolicy {
    fn default() -> Self {
        Self::new(vec![
            FeeTier {
                min_days_before: 7,
                rate: Rate::zero(),
            },
            FeeTier {
                min_days_before: 3,
                rate: Rate::from_percentage(dec!(50)),
            },
            FeeTier {
                min_days_before: 0,
                rate: Rate::full(),
            },
        ])
    }
}

/// All policy knobs consumed by the booking service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingPolicy {
    pub cancellation: CancellationPolicy,
    /// Nights charged when a guest never arrives
    pub no_show_nights: u32,
    /// A room cannot enter maintenance while a live booking arrives
    /// within this many days
    pub maintenance_lead_days: i64,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            cancellation: CancellationPolicy::default(),
            no_show_nights: 1,
            maintenance_lead_days: 7,
        }
    }
}
