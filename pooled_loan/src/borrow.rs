multiversx_sc::imports!();

use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_BELOW_MIN_BORROW_FRACTION,
    ERROR_CANCEL_DEADLINE_NOT_REACHED, ERROR_CANNOT_CANCEL, ERROR_COLLATERAL_RATIO_BELOW_IDEAL,
    ERROR_LOAN_NOT_REPAID, ERROR_LOAN_NOT_STARTED, ERROR_NOT_COLLECTION_STAGE,
    ERROR_ONLY_BORROWER, ERROR_POOL_NOT_ACTIVE, ERROR_WITHDRAW_DEADLINE_PASSED,
};
use common_structs::PoolStatus;

use crate::{cache::Cache, storage, utils};

#[multiversx_sc::module]
pub trait BorrowModule:
    storage::StorageModule
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestAccrual
{
    /// Locks collateral into the pool's strategy. Open to any depositor so
    /// the borrower can be topped up by an affiliated account.
    #[payable("*")]
    #[endpoint(depositCollateral)]
    fn deposit_collateral(&self) {
        let mut cache = Cache::new(self);
        require!(
            matches!(cache.status, PoolStatus::Collection | PoolStatus::Active),
            ERROR_POOL_NOT_ACTIVE
        );

        let amount = self.get_payment_amount(
            &cache.config.collateral_asset,
            cache.config.collateral_decimals,
        );
        require!(
            amount > cache.collateral_zero,
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );

        let shares = self.lock_collateral(&cache, &amount);
        cache.base_collateral_shares += &shares;

        self.pool_collateral_deposited_event(
            &self.blockchain().get_caller(),
            amount.into_raw_units(),
            shares.into_raw_units(),
        );
    }

    /// Disburses the collected liquidity to the borrower once the loan has
    /// started. This is the transition from Collection to Active: the
    /// minimum-fraction gate, the collateral-ratio gate and the protocol fee
    /// all apply here.
    #[endpoint(withdrawBorrowedAmount)]
    fn withdraw_borrowed_amount(&self) {
        let mut cache = Cache::new(self);
        let caller = self.blockchain().get_caller();
        require!(cache.is_borrower(&caller), ERROR_ONLY_BORROWER);
        require!(
            cache.status == PoolStatus::Collection,
            ERROR_NOT_COLLECTION_STAGE
        );
        require!(
            cache.timestamp >= cache.loan_start_time,
            ERROR_LOAN_NOT_STARTED
        );
        require!(
            cache.timestamp <= cache.loan_withdrawal_deadline,
            ERROR_WITHDRAW_DEADLINE_PASSED
        );

        let min_required =
            self.calculate_fraction_of(&cache.config.pool_size, &cache.config.min_borrow_fraction);
        require!(
            cache.total_supply >= min_required,
            ERROR_BELOW_MIN_BORROW_FRACTION
        );

        let ratio = self.collateral_ratio_against(&cache, &cache.total_supply);
        require!(
            ratio >= cache.config.ideal_collateral_ratio,
            ERROR_COLLATERAL_RATIO_BELOW_IDEAL
        );

        cache.principal = cache.total_supply.clone();
        cache.interest_till_last_update = cache.zero.clone();
        // Interest and the instalment schedule run from the scheduled loan
        // start, not from the moment of withdrawal.
        cache.last_update_timestamp = cache.loan_start_time;
        cache.status = PoolStatus::Active;

        let fee =
            self.calculate_fraction_of(&cache.principal, &cache.params.protocol_fee_fraction);
        let disbursed = cache.principal.clone() - fee.clone();

        self.send_asset(
            &cache.config.borrow_asset,
            &fee,
            &cache.params.protocol_fee_collector,
        );
        self.send_asset(&cache.config.borrow_asset, &disbursed, &caller);

        self.borrowed_amount_withdrawn_event(
            &caller,
            disbursed.into_raw_units(),
            fee.into_raw_units(),
        );
    }

    /// Cancels a pool that never reached disbursement. The borrower may
    /// cancel at any point before withdrawing; anyone may cancel once the
    /// withdrawal deadline has lapsed unanswered. The cancellation penalty
    /// comes out of the borrower's collateral and is left for lender claims.
    #[endpoint(cancelPool)]
    fn cancel_pool(&self) {
        let mut cache = Cache::new(self);
        require!(cache.status == PoolStatus::Collection, ERROR_CANNOT_CANCEL);

        let caller = self.blockchain().get_caller();
        if !cache.is_borrower(&caller) {
            require!(
                cache.timestamp > cache.loan_withdrawal_deadline,
                ERROR_CANCEL_DEADLINE_NOT_REACHED
            );
        }

        // One instalment's worth of penalty time, plus whatever remains of
        // the collection period when the borrower bails out early.
        let penalty_time = cache.config.repayment_interval
            + cache.loan_start_time.saturating_sub(cache.timestamp);
        let penalty_uncapped = self.calculate_time_penalty(
            &cache.base_collateral_shares,
            &cache.config.borrow_rate,
            &cache.params.cancel_penalty_fraction,
            penalty_time,
        );
        let penalty_shares = self.get_min(penalty_uncapped, cache.base_collateral_shares.clone());

        cache.base_collateral_shares -= &penalty_shares;
        cache.seized_collateral_shares += &penalty_shares;

        // The lent tokens never left the pool; they become lender claims.
        cache.lender_claim_funds += &cache.total_supply.clone();

        let remaining = cache.base_collateral_shares.clone();
        cache.base_collateral_shares = cache.collateral_zero.clone();
        let returned = self.unlock_collateral(&cache, &remaining);
        self.send_asset(
            &cache.config.collateral_asset,
            &returned,
            &cache.config.borrower,
        );

        cache.status = PoolStatus::Cancelled;
        self.pool_cancelled_event(&caller, penalty_shares.into_raw_units());
    }

    /// Closes a fully repaid loan and returns all collateral to the
    /// borrower. Lenders collect their principal and interest through
    /// `withdrawLiquidity`.
    #[endpoint(closePool)]
    fn close_pool(&self) {
        let mut cache = Cache::new(self);
        let caller = self.blockchain().get_caller();
        require!(cache.is_borrower(&caller), ERROR_ONLY_BORROWER);
        require!(cache.status == PoolStatus::Active, ERROR_POOL_NOT_ACTIVE);

        self.sync_accrual(&mut cache);
        require!(
            cache.principal_outstanding() == cache.zero
                && cache.interest_outstanding() == cache.zero,
            ERROR_LOAN_NOT_REPAID
        );

        let mut shares = cache.base_collateral_shares.clone();
        shares += self.drain_margin_collateral(&cache);
        cache.base_collateral_shares = cache.collateral_zero.clone();

        let tokens = self.unlock_collateral(&cache, &shares);
        self.send_asset(
            &cache.config.collateral_asset,
            &tokens,
            &cache.config.borrower,
        );

        cache.status = PoolStatus::Closed;
        self.pool_closed_event(tokens.into_raw_units());
    }

    /// Factory-owner escape hatch: freezes all further economic operations.
    #[only_owner]
    #[endpoint(terminatePool)]
    fn terminate_pool(&self) {
        let mut cache = Cache::new(self);
        require!(
            matches!(cache.status, PoolStatus::Collection | PoolStatus::Active),
            ERROR_POOL_NOT_ACTIVE
        );

        cache.status = PoolStatus::Terminated;
        self.pool_terminated_event(&self.blockchain().get_caller());
    }
}
