//! Common fixtures

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use core_kernel::{Currency, Money};

static TRACING: Lazy<()> = Lazy::new(|| {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .init();
});

/// Installs the test tracing subscriber once per process
pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// The pinned business date most suites start from
pub fn business_date() -> NaiveDate {
    date(2025, 6, 1)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn usd(amount: Decimal) -> Money {
    Money::new(amount, Currency::USD)
}
