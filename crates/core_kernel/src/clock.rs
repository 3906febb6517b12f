//! Injectable clocks
//!
//! Cancellation fees and no-show rules are decided against the hotel's
//! local business date, so the date source is a trait rather than a
//! direct call to `Utc::now()`. Tests pin time with [`FixedClock`].

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// A source of the current time and the hotel-local business date
pub trait Clock {
    /// Current instant, used for audit timestamps
    fn now(&self) -> DateTime<Utc>;

    /// Today's business date in the hotel's timezone
    fn today(&self) -> NaiveDate;
}

/// Wall-clock time localised to a hotel timezone
#[derive(Debug, Clone)]
pub struct SystemClock {
    timezone: Tz,
}

impl SystemClock {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::UTC,
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }
}

/// A clock frozen at a known instant, for tests of date-based rules
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: DateTime<Utc>,
    today: NaiveDate,
}

impl FixedClock {
    /// Creates a clock pinned to the given business date at noon UTC
    pub fn on(today: NaiveDate) -> Self {
        let now = today
            .and_hms_opt(12, 0, 0)
            .expect("valid time")
            .and_utc();
        Self { now, today }
    }

    /// Advances the business date by whole days
    pub fn advance_days(&mut self, days: u64) {
        self.today = self.today + chrono::Days::new(days);
        self.now += chrono::Duration::days(days as i64);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
