#![allow(dead_code)]

use crate::constants::*;
use common_constants::SCALE_PRECISION;
use common_proxies::{
    proxy_pool, proxy_pool_factory, proxy_price_feed, proxy_strategy, proxy_strategy_registry,
};
use common_structs::{PoolStatus, ProtocolParams};
use multiversx_sc::types::{BigUint, ManagedAddress, ManagedDecimal};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, ReturnsNewManagedAddress, ReturnsResult, TestAddress},
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(POOLED_LOAN_PATH, pooled_loan::ContractBuilder);
    blockchain.register_contract(POOL_FACTORY_PATH, pool_factory::ContractBuilder);
    blockchain.register_contract(PRICE_FEED_PATH, price_feed::ContractBuilder);
    blockchain.register_contract(STRATEGY_REGISTRY_PATH, strategy_registry::ContractBuilder);
    blockchain.register_contract(STRATEGY_MOCK_PATH, strategy_mock::ContractBuilder);

    blockchain
}

pub struct PoolTestState {
    pub world: ScenarioWorld,
    pub factory_sc: ManagedAddress<StaticApi>,
    pub pool_sc: ManagedAddress<StaticApi>,
    pub price_feed_sc: ManagedAddress<StaticApi>,
    pub strategy_registry_sc: ManagedAddress<StaticApi>,
    pub strategy_sc: ManagedAddress<StaticApi>,
}

impl PoolTestState {
    /// Deploys the whole protocol and creates one pool with the default
    /// loan terms, at timestamp zero.
    pub fn new() -> Self {
        let mut world = world();

        world.account(OWNER_ADDRESS).nonce(1);
        world.account(FEE_COLLECTOR_ADDRESS).nonce(1);
        world.current_block().block_timestamp(0);

        let price_feed_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_price_feed::PriceFeedProxy)
            .init()
            .code(PRICE_FEED_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&price_feed_sc)
            .typed(proxy_price_feed::PriceFeedProxy)
            .set_asset_decimals(usdc_id(), USDC_DECIMALS as u32)
            .run();
        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&price_feed_sc)
            .typed(proxy_price_feed::PriceFeedProxy)
            .set_asset_decimals(wegld_id(), WEGLD_DECIMALS as u32)
            .run();
        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&price_feed_sc)
            .typed(proxy_price_feed::PriceFeedProxy)
            .set_price_feed(
                wegld_id(),
                usdc_id(),
                BigUint::from(WEGLD_PRICE_IN_USDC),
                0u32,
            )
            .run();

        let strategy_registry_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_strategy_registry::StrategyRegistryProxy)
            .init()
            .code(STRATEGY_REGISTRY_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let strategy_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_strategy::StrategyProxy)
            .init()
            .code(STRATEGY_MOCK_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&strategy_registry_sc)
            .typed(proxy_strategy_registry::StrategyRegistryProxy)
            .add_strategy(strategy_sc.clone())
            .run();

        // template instance the factory clones from
        let template_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_pool::PooledLoanProxy)
            .init(
                OWNER_ADDRESS.to_managed_address(),
                usdc_id(),
                USDC_DECIMALS,
                wegld_id(),
                WEGLD_DECIMALS,
                strategy_sc.clone(),
                usdc(1),
                fraction(BORROW_RATE_PERCENT),
                fraction(IDEAL_RATIO_PERCENT),
                fraction(MIN_BORROW_FRACTION_PERCENT),
                COLLECTION_PERIOD,
                LOAN_WITHDRAWAL_DURATION,
                REPAYMENT_INTERVAL,
                NO_OF_REPAYMENT_INTERVALS,
                make_protocol_params(&price_feed_sc),
            )
            .code(POOLED_LOAN_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let factory_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_pool_factory::PoolFactoryProxy)
            .init(
                template_sc,
                price_feed_sc.clone(),
                strategy_registry_sc.clone(),
                fraction(PROTOCOL_FEE_PERCENT),
                FEE_COLLECTOR_ADDRESS.to_managed_address(),
                fraction(CANCEL_PENALTY_PERCENT),
                fraction(GRACE_PENALTY_PERCENT),
                fraction(GRACE_PERIOD_PERCENT),
                fraction(LIQUIDATOR_REWARD_PERCENT),
                fraction(VOTE_PASS_RATIO_PERCENT),
                MARGIN_CALL_DURATION,
                EXTENSION_VOTE_DURATION,
            )
            .code(POOL_FACTORY_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        for account in [
            BORROWER_ADDRESS,
            LENDER_ADDRESS,
            SECOND_LENDER_ADDRESS,
            LIQUIDATOR_ADDRESS,
        ] {
            world
                .account(account)
                .nonce(1)
                .esdt_balance(USDC_TOKEN, usdc(1_000_000))
                .esdt_balance(WEGLD_TOKEN, wegld(1_000_000));
        }

        let pool_sc = world
            .tx()
            .from(BORROWER_ADDRESS)
            .to(&factory_sc)
            .typed(proxy_pool_factory::PoolFactoryProxy)
            .create_pool(
                usdc_id(),
                USDC_DECIMALS,
                wegld_id(),
                WEGLD_DECIMALS,
                strategy_sc.clone(),
                usdc(POOL_SIZE_USDC),
                fraction(BORROW_RATE_PERCENT),
                fraction(IDEAL_RATIO_PERCENT),
                fraction(MIN_BORROW_FRACTION_PERCENT),
                COLLECTION_PERIOD,
                LOAN_WITHDRAWAL_DURATION,
                REPAYMENT_INTERVAL,
                NO_OF_REPAYMENT_INTERVALS,
            )
            .returns(ReturnsResult)
            .run();

        Self {
            world,
            factory_sc,
            pool_sc,
            price_feed_sc,
            strategy_registry_sc,
            strategy_sc,
        }
    }

    pub fn change_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    pub fn set_wegld_price(&mut self, price_in_usdc: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.price_feed_sc)
            .typed(proxy_price_feed::PriceFeedProxy)
            .set_price_feed(wegld_id(), usdc_id(), BigUint::from(price_in_usdc), 0u32)
            .run();
    }

    pub fn lend(&mut self, from: TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::PooledLoanProxy)
            .lend(from.to_managed_address())
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn lend_error(
        &mut self,
        from: TestAddress,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::PooledLoanProxy)
            .lend(from.to_managed_address())
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn deposit_collateral(&mut self, from: TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::PooledLoanProxy)
            .deposit_collateral()
            .single_esdt(&WEGLD_TOKEN.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn withdraw_borrowed_amount(&mut self, from: TestAddress) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::PooledLoanProxy)
            .withdraw_borrowed_amount()
            .run();
    }

    pub fn withdraw_borrowed_amount_error(&mut self, from: TestAddress, error_message: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::PooledLoanProxy)
            .withdraw_borrowed_amount()
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn repay_amount(&mut self, from: TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::PooledLoanProxy)
            .repay_amount()
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn pool_status(&mut self) -> PoolStatus {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::PooledLoanProxy)
            .pool_status()
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_supply(&mut self) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::PooledLoanProxy)
            .total_supply()
            .returns(ReturnsResult)
            .run()
    }

    pub fn current_debt(&mut self) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::PooledLoanProxy)
            .current_debt()
            .returns(ReturnsResult)
            .run()
    }

    pub fn interest_accrued(&mut self) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::PooledLoanProxy)
            .interest_accrued()
            .returns(ReturnsResult)
            .run()
    }

    pub fn seized_collateral_shares(&mut self) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::PooledLoanProxy)
            .seized_collateral_shares()
            .returns(ReturnsResult)
            .run()
    }

    pub fn next_instalment_deadline(&mut self) -> u64 {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::PooledLoanProxy)
            .next_instalment_deadline()
            .returns(ReturnsResult)
            .run()
    }
}

pub fn make_protocol_params(
    price_feed: &ManagedAddress<StaticApi>,
) -> ProtocolParams<StaticApi> {
    ProtocolParams {
        protocol_fee_fraction: scaled(PROTOCOL_FEE_PERCENT),
        protocol_fee_collector: FEE_COLLECTOR_ADDRESS.to_managed_address(),
        cancel_penalty_fraction: scaled(CANCEL_PENALTY_PERCENT),
        grace_penalty_fraction: scaled(GRACE_PENALTY_PERCENT),
        grace_period_fraction: scaled(GRACE_PERIOD_PERCENT),
        liquidator_reward_fraction: scaled(LIQUIDATOR_REWARD_PERCENT),
        vote_pass_ratio: scaled(VOTE_PASS_RATIO_PERCENT),
        margin_call_duration: MARGIN_CALL_DURATION,
        extension_vote_duration: EXTENSION_VOTE_DURATION,
        price_feed: price_feed.clone(),
    }
}

fn scaled(percent: u64) -> ManagedDecimal<StaticApi, usize> {
    ManagedDecimal::from_raw_units(fraction(percent), SCALE_PRECISION)
}
