//! Test Utilities
//!
//! Fixtures, builders, assertions, and proptest generators shared by
//! the domain test suites. Only ever a dev-dependency.

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;

pub use assertions::assert_ledger_balanced;
pub use builders::{TestHotel, TestHotelBuilder};
pub use fixtures::{business_date, date, init_tracing, usd};
