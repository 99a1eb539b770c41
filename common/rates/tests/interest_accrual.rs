// Interest accrual engine: exact formula values, idempotence, monotonicity,
// and the shared penalty/fraction helpers.

use common_constants::{SCALE, SCALE_PRECISION, SECONDS_PER_YEAR};
use common_math::SharedMathModule;
use common_rates::InterestAccrual;
use multiversx_sc::types::{BigUint, ManagedDecimal};
use multiversx_sc_scenario::api::StaticApi;

pub struct RatesTester;

impl multiversx_sc::contract_base::ContractBase for RatesTester {
    type Api = StaticApi;
}

impl SharedMathModule for RatesTester {}
impl InterestAccrual for RatesTester {}

fn amount(raw: u64, precision: usize) -> ManagedDecimal<StaticApi, usize> {
    ManagedDecimal::from_raw_units(BigUint::from(raw), precision)
}

/// Yearly rate as a percentage, at protocol scale.
fn rate(percent: u64) -> ManagedDecimal<StaticApi, usize> {
    ManagedDecimal::from_raw_units(
        BigUint::from(SCALE) * BigUint::from(percent) / BigUint::from(100u64),
        SCALE_PRECISION,
    )
}

#[test]
fn test_interest_full_year() {
    let tester = RatesTester;

    // 1_000_000 units at 10% for one year -> 100_000
    let interest = tester.calculate_interest(&amount(1_000_000, 6), &rate(10), SECONDS_PER_YEAR);
    assert_eq!(
        interest.into_raw_units(),
        &BigUint::<StaticApi>::from(100_000u64)
    );
}

#[test]
fn test_interest_half_year() {
    let tester = RatesTester;

    let interest =
        tester.calculate_interest(&amount(1_000_000, 6), &rate(10), SECONDS_PER_YEAR / 2);
    assert_eq!(
        interest.into_raw_units(),
        &BigUint::<StaticApi>::from(50_000u64)
    );
}

#[test]
fn test_interest_zero_time() {
    let tester = RatesTester;

    let interest = tester.calculate_interest(&amount(1_000_000, 6), &rate(10), 0);
    assert_eq!(interest.into_raw_units(), &BigUint::<StaticApi>::zero());
}

#[test]
fn test_interest_monotonic_in_time() {
    let tester = RatesTester;

    let principal = amount(123_456_789, 6);
    let borrow_rate = rate(37);

    let mut previous = tester.calculate_interest(&principal, &borrow_rate, 0);
    for seconds in [1u64, 60, 3_600, 86_400, SECONDS_PER_YEAR, SECONDS_PER_YEAR * 3] {
        let current = tester.calculate_interest(&principal, &borrow_rate, seconds);
        assert!(current >= previous);
        previous = current;
    }
}

#[test]
fn test_accrued_is_idempotent() {
    let tester = RatesTester;

    let principal = amount(5_000_000, 6);
    let borrow_rate = rate(12);
    let snapshot = amount(1_234, 6);

    let first = tester.calculate_interest_accrued(&principal, &borrow_rate, &snapshot, 100, 9_000);
    let second = tester.calculate_interest_accrued(&principal, &borrow_rate, &snapshot, 100, 9_000);
    assert_eq!(first, second);
}

#[test]
fn test_accrued_adds_snapshot() {
    let tester = RatesTester;

    let principal = amount(1_000_000, 6);
    let borrow_rate = rate(10);
    let snapshot = amount(7_000, 6);

    let accrued = tester.calculate_interest_accrued(
        &principal,
        &borrow_rate,
        &snapshot,
        0,
        SECONDS_PER_YEAR,
    );
    // 100_000 fresh + 7_000 snapshot
    assert_eq!(
        accrued.into_raw_units(),
        &BigUint::<StaticApi>::from(107_000u64)
    );
}

#[test]
fn test_accrued_clock_not_advanced() {
    let tester = RatesTester;

    let principal = amount(1_000_000, 6);
    let borrow_rate = rate(10);
    let snapshot = amount(42, 6);

    // current timestamp at (or before) the last update returns the snapshot
    let accrued = tester.calculate_interest_accrued(&principal, &borrow_rate, &snapshot, 500, 500);
    assert_eq!(accrued, snapshot);
}

#[test]
fn test_interest_wide_arithmetic() {
    let tester = RatesTester;

    // 10^24 raw units at 200% over 10 years; the naive product is ~10^62
    // and must not overflow.
    let principal = ManagedDecimal::<StaticApi, usize>::from_raw_units(
        BigUint::from(10u64).pow(24),
        18,
    );
    let interest = tester.calculate_interest(&principal, &rate(200), SECONDS_PER_YEAR * 10);
    assert_eq!(
        interest.into_raw_units(),
        &(BigUint::<StaticApi>::from(10u64).pow(24) * 20u64)
    );
}

#[test]
fn test_time_penalty_shape() {
    let tester = RatesTester;

    // fraction 10%, rate 10%, base 1_000_000, one year -> 10_000
    let penalty = tester.calculate_time_penalty(
        &amount(1_000_000, 6),
        &rate(10),
        &rate(10),
        SECONDS_PER_YEAR,
    );
    assert_eq!(
        penalty.into_raw_units(),
        &BigUint::<StaticApi>::from(10_000u64)
    );
}

#[test]
fn test_fraction_of_floors() {
    let tester = RatesTester;

    // 1% of 12345 = 123.45 -> 123
    let fee = tester.calculate_fraction_of(&amount(12_345, 6), &rate(1));
    assert_eq!(fee.into_raw_units(), &BigUint::<StaticApi>::from(123u64));
}

#[test]
fn test_fraction_of_full_scale_is_identity() {
    let tester = RatesTester;

    let value = amount(98_765, 6);
    let all = tester.calculate_fraction_of(&value, &rate(100));
    assert_eq!(all, value);
}

#[test]
fn test_interest_per_second_matches_one_second() {
    let tester = RatesTester;

    let principal = amount(u64::MAX / 2, 6);
    let borrow_rate = rate(50);

    let per_second = tester.calculate_interest_per_second(&principal, &borrow_rate);
    let one_second = tester.calculate_interest(&principal, &borrow_rate, 1);
    assert_eq!(per_second, one_second);
}
