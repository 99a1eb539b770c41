// Rounding behaviour of the shared math helpers: floor for value-out paths,
// half-up for comparisons and display rescaling.

use common_constants::{SCALE, SCALE_PRECISION};
use common_math::SharedMathModule;
use multiversx_sc::types::{BigUint, ManagedDecimal};
use multiversx_sc_scenario::api::StaticApi;

pub struct MathTester;

impl multiversx_sc::contract_base::ContractBase for MathTester {
    type Api = StaticApi;
}

impl SharedMathModule for MathTester {}

fn dec(raw: u64, precision: usize) -> ManagedDecimal<StaticApi, usize> {
    ManagedDecimal::from_raw_units(BigUint::from(raw), precision)
}

#[test]
fn test_mul_floor_truncates() {
    let tester = MathTester;

    // 1.5 * 1.3 = 1.95 -> 1.9 at one decimal
    let a = dec(15, 1);
    let b = dec(13, 1);
    let result = tester.mul_floor(&a, &b, 1);

    assert_eq!(result.into_raw_units(), &BigUint::<StaticApi>::from(19u64));
}

#[test]
fn test_mul_half_up_rounds() {
    let tester = MathTester;

    // 1.5 * 1.3 = 1.95 -> 2.0 at one decimal
    let a = dec(15, 1);
    let b = dec(13, 1);
    let result = tester.mul_half_up(&a, &b, 1);

    assert_eq!(result.into_raw_units(), &BigUint::<StaticApi>::from(20u64));
}

#[test]
fn test_div_floor_truncates() {
    let tester = MathTester;

    // 1.0 / 3.0 = 0.333... -> 0.33 at two decimals
    let a = dec(100, 2);
    let b = dec(300, 2);
    let result = tester.div_floor(&a, &b, 2);

    assert_eq!(result.into_raw_units(), &BigUint::<StaticApi>::from(33u64));
}

#[test]
fn test_div_half_up_rounds() {
    let tester = MathTester;

    // 2.0 / 3.0 = 0.666... -> 0.67 at two decimals
    let a = dec(200, 2);
    let b = dec(300, 2);
    let result = tester.div_half_up(&a, &b, 2);

    assert_eq!(result.into_raw_units(), &BigUint::<StaticApi>::from(67u64));
}

#[test]
fn test_unit_is_scale() {
    let tester = MathTester;

    let unit = tester.unit();
    assert_eq!(unit.into_raw_units(), &BigUint::<StaticApi>::from(SCALE));
    assert_eq!(unit.scale(), SCALE_PRECISION);
}

#[test]
fn test_unit_zero() {
    let tester = MathTester;

    let zero = tester.unit_zero();
    assert_eq!(zero.into_raw_units(), &BigUint::<StaticApi>::zero());
    assert_eq!(zero.scale(), SCALE_PRECISION);
}

#[test]
fn test_rescale_floor_drops_dust() {
    let tester = MathTester;

    // 1.99 at two decimals -> 1.9 floored, 2.0 half-up
    let value = dec(199, 2);

    let floored = tester.rescale_floor(&value, 1);
    assert_eq!(floored.into_raw_units(), &BigUint::<StaticApi>::from(19u64));

    let rounded = tester.rescale_half_up(&value, 1);
    assert_eq!(rounded.into_raw_units(), &BigUint::<StaticApi>::from(20u64));
}

#[test]
fn test_rescale_up_is_exact() {
    let tester = MathTester;

    let value = dec(19, 1);
    let rescaled = tester.rescale_floor(&value, 3);
    assert_eq!(
        rescaled.into_raw_units(),
        &BigUint::<StaticApi>::from(1900u64)
    );
}

#[test]
fn test_min_max() {
    let tester = MathTester;

    let a = dec(10, 2);
    let b = dec(20, 2);

    assert_eq!(tester.get_min(a.clone(), b.clone()), a);
    assert_eq!(tester.get_max(a, b.clone()), b);
}

#[test]
fn test_mul_floor_never_exceeds_half_up() {
    let tester = MathTester;

    for raw_a in [1u64, 7, 33, 99, 1234] {
        for raw_b in [1u64, 3, 50, 777] {
            let a = dec(raw_a, 2);
            let b = dec(raw_b, 2);
            let floored = tester.mul_floor(&a, &b, 2);
            let rounded = tester.mul_half_up(&a, &b, 2);
            assert!(floored <= rounded);
        }
    }
}
