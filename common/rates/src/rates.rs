#![no_std]

use common_constants::{SCALE, SECONDS_PER_YEAR};

multiversx_sc::imports!();

/// The InterestAccrual module is the protocol's accounting core: simple
/// interest over elapsed time, plus the fraction and fraction-rate-time
/// helpers every fee and penalty is built from.
///
/// All functions are pure; callers snapshot the result before mutating
/// principal so that accrued interest is monotonically non-decreasing
/// between principal updates.
#[multiversx_sc::module]
pub trait InterestAccrual: common_math::SharedMathModule {
    /// Simple interest accrued by `principal` at `borrow_rate` over
    /// `time_seconds`.
    ///
    /// **Formula**: `principal * borrow_rate * time / SCALE / SECONDS_PER_YEAR`,
    /// rounded down.
    ///
    /// `borrow_rate` is a yearly rate at protocol scale (`SCALE` = 100%).
    /// The full product is computed in `BigUint` before any division, so the
    /// intermediate `principal * rate * time` cannot overflow.
    fn calculate_interest(
        &self,
        principal: &ManagedDecimal<Self::Api, NumDecimals>,
        borrow_rate: &ManagedDecimal<Self::Api, NumDecimals>,
        time_seconds: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let interest_raw = principal.into_raw_units()
            * borrow_rate.into_raw_units()
            * BigUint::from(time_seconds)
            / BigUint::from(SCALE)
            / BigUint::from(SECONDS_PER_YEAR);

        self.to_decimal(interest_raw, principal.scale())
    }

    /// Total interest owed right now: the snapshot taken at the last
    /// principal update plus fresh interest since then.
    ///
    /// Pure and idempotent: two calls with the same arguments return the
    /// identical value.
    fn calculate_interest_accrued(
        &self,
        principal: &ManagedDecimal<Self::Api, NumDecimals>,
        borrow_rate: &ManagedDecimal<Self::Api, NumDecimals>,
        interest_till_last_update: &ManagedDecimal<Self::Api, NumDecimals>,
        last_update_timestamp: u64,
        current_timestamp: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if current_timestamp <= last_update_timestamp {
            return interest_till_last_update.clone();
        }

        let fresh = self.calculate_interest(
            principal,
            borrow_rate,
            current_timestamp - last_update_timestamp,
        );

        interest_till_last_update.clone() + fresh
    }

    /// Shared shape of the cancellation and grace-period penalties:
    /// `fraction * rate * base * time / (SCALE * SCALE * SECONDS_PER_YEAR)`,
    /// rounded down. Only the fraction and the time window differ between
    /// the two call sites.
    fn calculate_time_penalty(
        &self,
        base: &ManagedDecimal<Self::Api, NumDecimals>,
        borrow_rate: &ManagedDecimal<Self::Api, NumDecimals>,
        fraction: &ManagedDecimal<Self::Api, NumDecimals>,
        time_seconds: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let penalty_raw = base.into_raw_units()
            * borrow_rate.into_raw_units()
            * fraction.into_raw_units()
            * BigUint::from(time_seconds)
            / BigUint::from(SCALE)
            / BigUint::from(SCALE)
            / BigUint::from(SECONDS_PER_YEAR);

        self.to_decimal(penalty_raw, base.scale())
    }

    /// `amount * fraction / SCALE`, rounded down. Protocol fees, liquidator
    /// rewards and vote thresholds all reduce to this.
    fn calculate_fraction_of(
        &self,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        fraction: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let raw = amount.into_raw_units() * fraction.into_raw_units() / BigUint::from(SCALE);

        self.to_decimal(raw, amount.scale())
    }

    /// Interest accrued per second at the current principal, used by the
    /// repayment schedule projections. Rounded down.
    fn calculate_interest_per_second(
        &self,
        principal: &ManagedDecimal<Self::Api, NumDecimals>,
        borrow_rate: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.calculate_interest(principal, borrow_rate, 1)
    }
}
