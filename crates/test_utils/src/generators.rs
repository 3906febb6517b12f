//! Proptest strategies and fake data

use chrono::{Days, NaiveDate};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use proptest::prelude::*;

use core_kernel::{Currency, Money, StayPeriod};
use domain_booking::GuestDetails;

/// Arbitrary stays of 1 to 30 nights starting within two years of 2025
pub fn stay_strategy() -> impl Strategy<Value = StayPeriod> {
    (0u64..730, 1u64..30).prop_map(|(offset, nights)| {
        let base = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
        let check_in = base + Days::new(offset);
        let check_out = check_in + Days::new(nights);
        StayPeriod::new(check_in, check_out).expect("non-empty range")
    })
}

/// Positive USD amounts up to `max_minor` cents
pub fn money_strategy(max_minor: i64) -> impl Strategy<Value = Money> {
    (1..max_minor).prop_map(|minor| Money::from_minor(minor, Currency::USD))
}

/// A guest with generated name and contact details
pub fn fake_guest() -> GuestDetails {
    GuestDetails::new(Name().fake::<String>())
        .with_email(SafeEmail().fake::<String>())
        .with_phone(PhoneNumber().fake::<String>())
}
