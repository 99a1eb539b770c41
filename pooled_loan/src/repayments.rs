multiversx_sc::imports!();

use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_INTEREST_NOT_SETTLED, ERROR_POOL_NOT_ACTIVE,
};
use common_structs::PoolStatus;

use crate::{cache::Cache, storage, utils};

/// Repayment schedule, owned by the pool. Instalment deadlines are derived
/// from the loan start, the repayment interval and any extension shift;
/// interest due per instalment is a pure schedule function so it is
/// monotonically non-decreasing between payments.
#[multiversx_sc::module]
pub trait RepaymentsModule:
    storage::StorageModule
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestAccrual
{
    /// The instalment the loan is currently in, 1-based, capped at the
    /// configured number of intervals.
    fn current_instalment(&self, cache: &Cache<Self>) -> u64 {
        let elapsed = cache
            .timestamp
            .saturating_sub(cache.loan_start_time)
            .saturating_sub(cache.extension_shift);
        let index = elapsed / cache.config.repayment_interval + 1;
        core::cmp::min(index, cache.config.no_of_repayment_intervals)
    }

    /// Number of instalment deadlines already behind us.
    fn elapsed_instalments(&self, cache: &Cache<Self>) -> u64 {
        let elapsed = cache
            .timestamp
            .saturating_sub(cache.loan_start_time)
            .saturating_sub(cache.extension_shift);
        core::cmp::min(
            elapsed / cache.config.repayment_interval,
            cache.config.no_of_repayment_intervals,
        )
    }

    fn instalment_deadline(&self, cache: &Cache<Self>, instalment: u64) -> u64 {
        cache.loan_start_time
            + cache.extension_shift
            + instalment * cache.config.repayment_interval
    }

    /// Interest owed by the end of instalment `instalment`, from the
    /// schedule alone.
    fn interest_due_till_instalment(
        &self,
        cache: &Cache<Self>,
        instalment: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.calculate_interest(
            &cache.principal_outstanding(),
            &cache.config.borrow_rate,
            instalment * cache.config.repayment_interval,
        )
    }

    fn grace_period_seconds(&self, cache: &Cache<Self>) -> u64 {
        self.fraction_of_duration(
            cache.config.repayment_interval,
            &cache.params.grace_period_fraction,
        )
    }

    /// A loan defaults when an instalment's interest (or, past maturity,
    /// the principal) is still unpaid after the grace window.
    fn has_defaulted(&self, cache: &Cache<Self>) -> bool {
        if cache.status != PoolStatus::Active {
            return false;
        }

        let elapsed = self.elapsed_instalments(cache);
        if elapsed == 0 {
            return false;
        }

        let deadline = self.instalment_deadline(cache, elapsed);
        if cache.timestamp <= deadline + self.grace_period_seconds(cache) {
            return false;
        }

        let due = self.interest_due_till_instalment(cache, elapsed);
        if cache.interest_repaid < due {
            return true;
        }

        let final_deadline =
            self.instalment_deadline(cache, cache.config.no_of_repayment_intervals);
        cache.timestamp > final_deadline + self.grace_period_seconds(cache)
            && cache.principal_outstanding() > cache.zero
    }

    /// Repays the loan: any grace penalty first, then interest due, then
    /// overflow into principal. Excess payment is refunded.
    #[payable("*")]
    #[endpoint(repayAmount)]
    fn repay_amount(&self) {
        let mut cache = Cache::new(self);
        require!(cache.status == PoolStatus::Active, ERROR_POOL_NOT_ACTIVE);

        self.sync_accrual(&mut cache);

        let caller = self.blockchain().get_caller();
        let mut remaining =
            self.get_payment_amount(&cache.config.borrow_asset, cache.config.borrow_decimals);
        require!(
            remaining > cache.zero,
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );

        let mut penalty_paid = cache.zero.clone();
        let elapsed = self.elapsed_instalments(&cache);
        if elapsed >= 1 {
            let deadline = self.instalment_deadline(&cache, elapsed);
            let due = self.interest_due_till_instalment(&cache, elapsed);
            if cache.interest_repaid < due && cache.timestamp > deadline {
                let penalty = self.calculate_time_penalty(
                    &cache.principal_outstanding(),
                    &cache.config.borrow_rate,
                    &cache.params.grace_penalty_fraction,
                    cache.timestamp - deadline,
                );
                penalty_paid = self.get_min(remaining.clone(), penalty);
                remaining -= &penalty_paid;
            }
        }

        let interest_paid = self.get_min(remaining.clone(), cache.interest_outstanding());
        remaining -= &interest_paid;
        cache.interest_repaid += &interest_paid;

        let principal_paid = self.get_min(remaining.clone(), cache.principal_outstanding());
        remaining -= &principal_paid;
        cache.principal_repaid += &principal_paid;

        if remaining > cache.zero {
            self.send_asset(&cache.config.borrow_asset, &remaining, &caller);
        }

        let retained = penalty_paid.clone() + interest_paid.clone() + principal_paid.clone();
        cache.lender_claim_funds += &retained;

        self.repayment_event(
            interest_paid.into_raw_units(),
            penalty_paid.into_raw_units(),
            principal_paid.into_raw_units(),
        );
    }

    /// Repays principal directly. Only possible once all interest accrued
    /// so far is settled.
    #[payable("*")]
    #[endpoint(repayPrincipal)]
    fn repay_principal(&self) {
        let mut cache = Cache::new(self);
        require!(cache.status == PoolStatus::Active, ERROR_POOL_NOT_ACTIVE);

        self.sync_accrual(&mut cache);
        require!(
            cache.interest_outstanding() == cache.zero,
            ERROR_INTEREST_NOT_SETTLED
        );

        let caller = self.blockchain().get_caller();
        let mut remaining =
            self.get_payment_amount(&cache.config.borrow_asset, cache.config.borrow_decimals);
        require!(
            remaining > cache.zero,
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );

        let principal_paid = self.get_min(remaining.clone(), cache.principal_outstanding());
        remaining -= &principal_paid;
        cache.principal_repaid += &principal_paid;

        if remaining > cache.zero {
            self.send_asset(&cache.config.borrow_asset, &remaining, &caller);
        }

        cache.lender_claim_funds += &principal_paid;

        self.repayment_event(
            cache.zero.into_raw_units(),
            cache.zero.into_raw_units(),
            principal_paid.into_raw_units(),
        );
    }
}
