#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod storage;

use common_constants::{
    MAX_GRACE_PERIOD_FRACTION, MAX_LIQUIDATOR_REWARD_FRACTION, MAX_PROTOCOL_FEE_FRACTION,
    MAX_VOTE_PASS_RATIO, MIN_VOTE_PASS_RATIO, SCALE,
};
use common_errors::{
    ERROR_ADDRESS_IS_ZERO, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_INVALID_DURATION,
    ERROR_INVALID_FRACTION, ERROR_NO_PRICE_FEED, ERROR_POOL_NOT_TRACKED,
    ERROR_STRATEGY_NOT_WHITELISTED, ERROR_TEMPLATE_EMPTY,
};
use common_proxies::{proxy_pool, proxy_price_feed, proxy_strategy_registry};
use common_structs::ProtocolParams;

/// Deploys pooled loans from a template and owns the protocol-wide
/// parameters. Each pool gets a snapshot of the parameters at creation, so
/// later admin changes never rewrite a live loan.
#[multiversx_sc::contract]
pub trait PoolFactory:
    storage::StorageModule + common_events::EventsModule + common_math::SharedMathModule
{
    #[init]
    #[allow(clippy::too_many_arguments)]
    fn init(
        &self,
        pool_template: ManagedAddress,
        price_feed: ManagedAddress,
        strategy_registry: ManagedAddress,
        protocol_fee_fraction: BigUint,
        protocol_fee_collector: ManagedAddress,
        cancel_penalty_fraction: BigUint,
        grace_penalty_fraction: BigUint,
        grace_period_fraction: BigUint,
        liquidator_reward_fraction: BigUint,
        vote_pass_ratio: BigUint,
        margin_call_duration: u64,
        extension_vote_duration: u64,
    ) {
        require!(!pool_template.is_zero(), ERROR_ADDRESS_IS_ZERO);
        require!(!price_feed.is_zero(), ERROR_ADDRESS_IS_ZERO);
        require!(!strategy_registry.is_zero(), ERROR_ADDRESS_IS_ZERO);

        self.pool_template_address().set(&pool_template);
        self.price_feed_address().set(&price_feed);
        self.strategy_registry_address().set(&strategy_registry);

        self.store_protocol_params(
            protocol_fee_fraction,
            protocol_fee_collector,
            cancel_penalty_fraction,
            grace_penalty_fraction,
            grace_period_fraction,
            liquidator_reward_fraction,
            vote_pass_ratio,
            margin_call_duration,
            extension_vote_duration,
        );
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Creates a pool for the calling borrower. Loan terms are validated
    /// here once; the pool itself trusts its deployer.
    #[allow(clippy::too_many_arguments)]
    #[endpoint(createPool)]
    fn create_pool(
        &self,
        borrow_asset: EgldOrEsdtTokenIdentifier,
        borrow_decimals: usize,
        collateral_asset: EgldOrEsdtTokenIdentifier,
        collateral_decimals: usize,
        collateral_strategy: ManagedAddress,
        pool_size: BigUint,
        borrow_rate: BigUint,
        ideal_collateral_ratio: BigUint,
        min_borrow_fraction: BigUint,
        collection_period: u64,
        loan_withdrawal_duration: u64,
        repayment_interval: u64,
        no_of_repayment_intervals: u64,
    ) -> ManagedAddress {
        require!(
            !self.pool_template_address().is_empty(),
            ERROR_TEMPLATE_EMPTY
        );
        require!(pool_size > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        require!(
            min_borrow_fraction <= BigUint::from(SCALE),
            ERROR_INVALID_FRACTION
        );
        require!(
            collection_period > 0
                && loan_withdrawal_duration > 0
                && repayment_interval > 0
                && no_of_repayment_intervals > 0,
            ERROR_INVALID_DURATION
        );

        let registry = self.strategy_registry_address().get();
        let is_valid = self
            .tx()
            .to(&registry)
            .typed(proxy_strategy_registry::StrategyRegistryProxy)
            .is_valid_strategy(collateral_strategy.clone())
            .returns(ReturnsResult)
            .sync_call();
        require!(is_valid, ERROR_STRATEGY_NOT_WHITELISTED);

        let has_feed = self
            .tx()
            .to(&self.price_feed_address().get())
            .typed(proxy_price_feed::PriceFeedProxy)
            .has_price_feed(collateral_asset.clone(), borrow_asset.clone())
            .returns(ReturnsResult)
            .sync_call();
        require!(has_feed, ERROR_NO_PRICE_FEED);

        let borrower = self.blockchain().get_caller();
        let pool = self
            .tx()
            .typed(proxy_pool::PooledLoanProxy)
            .init(
                borrower.clone(),
                borrow_asset.clone(),
                borrow_decimals,
                collateral_asset.clone(),
                collateral_decimals,
                collateral_strategy,
                pool_size.clone(),
                borrow_rate,
                ideal_collateral_ratio,
                min_borrow_fraction,
                collection_period,
                loan_withdrawal_duration,
                repayment_interval,
                no_of_repayment_intervals,
                self.protocol_params().get(),
            )
            .from_source(self.pool_template_address().get())
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE)
            .returns(ReturnsNewManagedAddress)
            .sync_call();

        self.pools().insert(pool.clone());

        self.pool_created_event(
            &pool,
            &borrower,
            &borrow_asset,
            &collateral_asset,
            &pool_size,
        );

        pool
    }

    /// Freezes a deployed pool. The factory is every pool's owner, so the
    /// call is relayed as an owner-only endpoint on the pool itself.
    #[only_owner]
    #[endpoint(terminatePool)]
    fn terminate_pool(&self, pool: ManagedAddress) {
        require!(self.pools().contains(&pool), ERROR_POOL_NOT_TRACKED);

        self.tx()
            .to(&pool)
            .typed(proxy_pool::PooledLoanProxy)
            .terminate_pool()
            .sync_call();
    }

    /// Replaces the protocol parameters used by pools created from now on.
    #[only_owner]
    #[allow(clippy::too_many_arguments)]
    #[endpoint(updateProtocolParams)]
    fn update_protocol_params(
        &self,
        protocol_fee_fraction: BigUint,
        protocol_fee_collector: ManagedAddress,
        cancel_penalty_fraction: BigUint,
        grace_penalty_fraction: BigUint,
        grace_period_fraction: BigUint,
        liquidator_reward_fraction: BigUint,
        vote_pass_ratio: BigUint,
        margin_call_duration: u64,
        extension_vote_duration: u64,
    ) {
        self.store_protocol_params(
            protocol_fee_fraction,
            protocol_fee_collector,
            cancel_penalty_fraction,
            grace_penalty_fraction,
            grace_period_fraction,
            liquidator_reward_fraction,
            vote_pass_ratio,
            margin_call_duration,
            extension_vote_duration,
        );
    }

    #[allow(clippy::too_many_arguments)]
    fn store_protocol_params(
        &self,
        protocol_fee_fraction: BigUint,
        protocol_fee_collector: ManagedAddress,
        cancel_penalty_fraction: BigUint,
        grace_penalty_fraction: BigUint,
        grace_period_fraction: BigUint,
        liquidator_reward_fraction: BigUint,
        vote_pass_ratio: BigUint,
        margin_call_duration: u64,
        extension_vote_duration: u64,
    ) {
        require!(!protocol_fee_collector.is_zero(), ERROR_ADDRESS_IS_ZERO);
        require!(
            protocol_fee_fraction <= BigUint::from(MAX_PROTOCOL_FEE_FRACTION),
            ERROR_INVALID_FRACTION
        );
        require!(
            cancel_penalty_fraction <= BigUint::from(SCALE)
                && grace_penalty_fraction <= BigUint::from(SCALE)
                && grace_period_fraction <= BigUint::from(MAX_GRACE_PERIOD_FRACTION),
            ERROR_INVALID_FRACTION
        );
        require!(
            liquidator_reward_fraction <= BigUint::from(MAX_LIQUIDATOR_REWARD_FRACTION),
            ERROR_INVALID_FRACTION
        );
        require!(
            vote_pass_ratio >= BigUint::from(MIN_VOTE_PASS_RATIO)
                && vote_pass_ratio <= BigUint::from(MAX_VOTE_PASS_RATIO),
            ERROR_INVALID_FRACTION
        );
        require!(
            margin_call_duration > 0 && extension_vote_duration > 0,
            ERROR_INVALID_DURATION
        );

        self.protocol_params().set(&ProtocolParams {
            protocol_fee_fraction: self.to_decimal_scaled(protocol_fee_fraction),
            protocol_fee_collector,
            cancel_penalty_fraction: self.to_decimal_scaled(cancel_penalty_fraction),
            grace_penalty_fraction: self.to_decimal_scaled(grace_penalty_fraction),
            grace_period_fraction: self.to_decimal_scaled(grace_period_fraction),
            liquidator_reward_fraction: self.to_decimal_scaled(liquidator_reward_fraction),
            vote_pass_ratio: self.to_decimal_scaled(vote_pass_ratio),
            margin_call_duration,
            extension_vote_duration,
            price_feed: self.price_feed_address().get(),
        });
    }
}
