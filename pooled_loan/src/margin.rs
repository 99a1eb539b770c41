multiversx_sc::imports!();

use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_MARGIN_CALL_ALREADY_ACTIVE,
    ERROR_MARGIN_CALL_NOT_ELIGIBLE, ERROR_MARGIN_CALL_STILL_OPEN, ERROR_NO_MARGIN_CALL,
    ERROR_NO_POOL_TOKENS, ERROR_POOL_NOT_ACTIVE, ERROR_REPAYMENT_NOT_DEFAULTED,
};
use common_structs::PoolStatus;

use crate::{cache::Cache, repayments, storage, utils};

#[multiversx_sc::module]
pub trait MarginModule:
    storage::StorageModule
    + utils::UtilsModule
    + repayments::RepaymentsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestAccrual
{
    /// A lender opens a margin call when the pool's collateral ratio has
    /// slipped below the ideal ratio. The borrower then has the margin-call
    /// window to restore it.
    #[endpoint(requestMarginCall)]
    fn request_margin_call(&self) {
        let mut cache = Cache::new(self);
        require!(cache.status == PoolStatus::Active, ERROR_POOL_NOT_ACTIVE);

        let caller = self.blockchain().get_caller();
        let balance = self.read_pool_token_balance(&cache, &caller);
        require!(balance > cache.zero, ERROR_NO_POOL_TOKENS);
        require!(
            !self.margin_calls().contains(&caller),
            ERROR_MARGIN_CALL_ALREADY_ACTIVE
        );

        self.sync_accrual(&mut cache);
        let debt = cache.principal_outstanding() + cache.interest_outstanding();
        let ratio = self.collateral_ratio_against(&cache, &debt);
        require!(
            ratio < cache.config.ideal_collateral_ratio,
            ERROR_MARGIN_CALL_NOT_ELIGIBLE
        );

        let deadline = cache.timestamp + cache.params.margin_call_duration;
        self.margin_call_deadline(&caller).set(deadline);
        self.margin_calls().insert(caller.clone());

        self.margin_call_requested_event(&caller, deadline);
    }

    /// The borrower answers an open margin call with extra collateral. The
    /// call closes as soon as the pool-wide ratio is back at the ideal.
    #[payable("*")]
    #[endpoint(addCollateralInMarginCall)]
    fn add_collateral_in_margin_call(&self, lender: ManagedAddress) {
        let mut cache = Cache::new(self);
        require!(cache.status == PoolStatus::Active, ERROR_POOL_NOT_ACTIVE);
        require!(
            self.margin_calls().contains(&lender),
            ERROR_NO_MARGIN_CALL
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
        let held = self.read_margin_shares(&cache, &lender);
        self.margin_collateral_shares(&lender)
            .set(held + shares.clone());

        self.pool_collateral_deposited_event(
            &self.blockchain().get_caller(),
            amount.into_raw_units(),
            shares.into_raw_units(),
        );

        self.sync_accrual(&mut cache);
        let debt = cache.principal_outstanding() + cache.interest_outstanding();
        let ratio = self.collateral_ratio_against(&cache, &debt);
        if ratio >= cache.config.ideal_collateral_ratio {
            self.close_margin_call(&mut cache, &lender);
        }
    }

    /// Seizes an unanswered margin-called lender's proportional collateral:
    /// the liquidation caller earns the reward fraction, the lender exits
    /// with the rest, and the lender's pool tokens are burned.
    #[endpoint(liquidateLender)]
    fn liquidate_lender(&self, lender: ManagedAddress) {
        let mut cache = Cache::new(self);
        require!(cache.status == PoolStatus::Active, ERROR_POOL_NOT_ACTIVE);
        require!(
            self.margin_calls().contains(&lender),
            ERROR_NO_MARGIN_CALL
        );
        require!(
            cache.timestamp > self.margin_call_deadline(&lender).get(),
            ERROR_MARGIN_CALL_STILL_OPEN
        );

        self.sync_accrual(&mut cache);
        let debt = cache.principal_outstanding() + cache.interest_outstanding();
        let ratio = self.collateral_ratio_against(&cache, &debt);
        if ratio >= cache.config.ideal_collateral_ratio {
            // The market answered the call for the borrower.
            self.close_margin_call(&mut cache, &lender);
            return;
        }

        let balance = self.read_pool_token_balance(&cache, &lender);
        require!(balance > cache.zero, ERROR_NO_POOL_TOKENS);

        let supply_before = cache.total_supply.clone();
        let base_part = self.pro_rata(&cache.base_collateral_shares, &balance, &supply_before);
        let margin_part = self.read_margin_shares(&cache, &lender);
        let seized = base_part.clone() + margin_part;

        cache.base_collateral_shares -= &base_part;
        self.margin_collateral_shares(&lender).clear();
        self.margin_call_deadline(&lender).clear();
        self.margin_calls().swap_remove(&lender);

        // The exiting lender's slice of the debt bookkeeping goes with them.
        let principal_part = self.pro_rata(&cache.principal, &balance, &supply_before);
        let principal_repaid_part =
            self.pro_rata(&cache.principal_repaid, &balance, &supply_before);
        let interest_part =
            self.pro_rata(&cache.interest_till_last_update, &balance, &supply_before);
        let interest_repaid_part =
            self.pro_rata(&cache.interest_repaid, &balance, &supply_before);
        cache.principal -= &principal_part;
        cache.principal_repaid -= &principal_repaid_part;
        cache.interest_till_last_update -= &interest_part;
        cache.interest_repaid -= &interest_repaid_part;

        cache.total_supply -= &balance;
        self.pool_token_balance(&lender).set(cache.zero.clone());
        self.lenders().swap_remove(&lender);

        let caller = self.blockchain().get_caller();
        let reward_shares =
            self.calculate_fraction_of(&seized, &cache.params.liquidator_reward_fraction);
        let lender_shares = seized - reward_shares.clone();

        let reward_tokens = self.unlock_collateral(&cache, &reward_shares);
        self.send_asset(&cache.config.collateral_asset, &reward_tokens, &caller);
        let lender_tokens = self.unlock_collateral(&cache, &lender_shares);
        self.send_asset(&cache.config.collateral_asset, &lender_tokens, &lender);

        self.lender_liquidated_event(
            &lender,
            &caller,
            lender_tokens.into_raw_units(),
            reward_tokens.into_raw_units(),
        );
    }

    /// Liquidates the whole pool after a repayment stayed missed beyond the
    /// grace period. All collateral is seized for lender claims, minus the
    /// caller's reward.
    #[endpoint(liquidatePool)]
    fn liquidate_pool(&self) {
        let mut cache = Cache::new(self);
        require!(cache.status == PoolStatus::Active, ERROR_POOL_NOT_ACTIVE);

        self.sync_accrual(&mut cache);
        require!(self.has_defaulted(&cache), ERROR_REPAYMENT_NOT_DEFAULTED);

        let mut total_shares = cache.base_collateral_shares.clone();
        total_shares += self.drain_margin_collateral(&cache);
        cache.base_collateral_shares = cache.collateral_zero.clone();

        let caller = self.blockchain().get_caller();
        let reward_shares =
            self.calculate_fraction_of(&total_shares, &cache.params.liquidator_reward_fraction);
        let seized = total_shares - reward_shares.clone();

        let reward_tokens = self.unlock_collateral(&cache, &reward_shares);
        self.send_asset(&cache.config.collateral_asset, &reward_tokens, &caller);
        cache.seized_collateral_shares += &seized;

        cache.status = PoolStatus::Defaulted;
        self.pool_defaulted_event(&caller, seized.into_raw_units());
    }

    fn close_margin_call(&self, cache: &mut Cache<Self>, lender: &ManagedAddress) {
        let margin = self.read_margin_shares(cache, lender);
        cache.base_collateral_shares += &margin;
        self.margin_collateral_shares(lender).clear();
        self.margin_call_deadline(lender).clear();
        self.margin_calls().swap_remove(lender);

        self.margin_call_closed_event(lender);
    }
}
