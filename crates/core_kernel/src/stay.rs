//! Stay periods
//!
//! A [`StayPeriod`] is the half-open date range `[check_in, check_out)`
//! of a reservation. The overlap test defined here is the single
//! source of truth for room availability: two live bookings clash iff
//! their stay periods overlap.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors for stay period construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StayError {
    #[error("Check-out date {check_out} must be after check-in date {check_in}")]
    InvalidRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
}

/// A half-open date range `[check_in, check_out)` for one stay
///
/// The check-out date is exclusive: a booking checking out on the 10th
/// does not clash with one checking in on the 10th.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StayPeriod {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayPeriod {
    /// Creates a stay period, rejecting empty or inverted ranges
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, StayError> {
        if check_out <= check_in {
            return Err(StayError::InvalidRange {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Returns the check-in date
    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// Returns the check-out date (exclusive)
    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of nights in the stay, always at least one
    pub fn nights(&self) -> u32 {
        (self.check_out - self.check_in).num_days() as u32
    }

    /// The date-range intersection test
    ///
    /// `a.check_in < b.check_out && a.check_out > b.check_in` over the
    /// half-open ranges. Back-to-back stays (one ends the day the other
    /// starts) do not overlap.
    pub fn overlaps(&self, other: &StayPeriod) -> bool {
        self.check_in < other.check_out && self.check_out > other.check_in
    }

    /// Whether `date` falls within `[check_in, check_out)`
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.check_in && date < self.check_out
    }

    /// Calendar days from `today` until check-in; negative once the
    /// check-in date has passed
    pub fn days_until_check_in(&self, today: NaiveDate) -> i64 {
        (self.check_in - today).num_days()
    }
}

impl fmt::Display for StayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.check_in, self.check_out)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_stay() -> impl Strategy<Value = StayPeriod> {
        (0i64..2000, 1i64..60).prop_map(|(start, len)| {
            let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
            let check_in = base + chrono::Days::new(start as u64);
            let check_out = check_in + chrono::Days::new(len as u64);
            StayPeriod::new(check_in, check_out).unwrap()
        })
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in arb_stay(), b in arb_stay()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn stay_overlaps_itself(a in arb_stay()) {
            prop_assert!(a.overlaps(&a));
        }
    }
}
