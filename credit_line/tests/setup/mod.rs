#![allow(dead_code)]

use crate::constants::*;
use common_proxies::{proxy_credit_line, proxy_price_feed, proxy_strategy, proxy_strategy_registry};
use multiversx_sc::types::{BigUint, ManagedAddress, TestTokenIdentifier};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, ReturnsNewManagedAddress, ReturnsResult},
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(CREDIT_LINE_PATH, credit_line::ContractBuilder);
    blockchain.register_contract(PRICE_FEED_PATH, price_feed::ContractBuilder);
    blockchain.register_contract(STRATEGY_REGISTRY_PATH, strategy_registry::ContractBuilder);
    blockchain.register_contract(STRATEGY_MOCK_PATH, strategy_mock::ContractBuilder);

    blockchain
}

pub struct CreditLineTestState {
    pub world: ScenarioWorld,
    pub credit_line_sc: ManagedAddress<StaticApi>,
    pub price_feed_sc: ManagedAddress<StaticApi>,
    pub strategy_registry_sc: ManagedAddress<StaticApi>,
    pub strategy_sc: ManagedAddress<StaticApi>,
    pub second_strategy_sc: ManagedAddress<StaticApi>,
}

impl CreditLineTestState {
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

        // 1 WEGLD = 40 USDC and 1 USDC = 0.025 WEGLD
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
        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&price_feed_sc)
            .typed(proxy_price_feed::PriceFeedProxy)
            .set_price_feed(usdc_id(), wegld_id(), BigUint::from(25u64), 3u32)
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

        let second_strategy_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_strategy::StrategyProxy)
            .init()
            .code(STRATEGY_MOCK_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        for strategy in [&strategy_sc, &second_strategy_sc] {
            world
                .tx()
                .from(OWNER_ADDRESS)
                .to(&strategy_registry_sc)
                .typed(proxy_strategy_registry::StrategyRegistryProxy)
                .add_strategy(strategy.clone())
                .run();
        }

        let credit_line_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_credit_line::CreditLineProxy)
            .init(
                price_feed_sc.clone(),
                strategy_registry_sc.clone(),
                fraction(PROTOCOL_FEE_PERCENT),
                FEE_COLLECTOR_ADDRESS.to_managed_address(),
                fraction(LIQUIDATOR_REWARD_PERCENT),
                fraction(LIQUIDATION_THRESHOLD_PERCENT),
            )
            .code(CREDIT_LINE_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        for account in [LENDER_ADDRESS, BORROWER_ADDRESS, LIQUIDATOR_ADDRESS] {
            world
                .account(account)
                .nonce(1)
                .esdt_balance(USDC_TOKEN, usdc(1_000_000))
                .esdt_balance(WEGLD_TOKEN, wegld(1_000_000))
                .esdt_balance(UNLISTED_TOKEN, usdc(1_000_000));
        }

        Self {
            world,
            credit_line_sc,
            price_feed_sc,
            strategy_registry_sc,
            strategy_sc,
            second_strategy_sc,
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

    /// Requests a line with the default terms used across the tests:
    /// 1_000 USDC limit, 10% rate, 200% requested ratio, auto-liquidation.
    pub fn request_default(
        &mut self,
        from: multiversx_sc_scenario::imports::TestAddress,
        counter_party: multiversx_sc_scenario::imports::TestAddress,
        request_as_lender: bool,
    ) -> u64 {
        self.world
            .tx()
            .from(from)
            .to(&self.credit_line_sc)
            .typed(proxy_credit_line::CreditLineProxy)
            .request(
                counter_party.to_managed_address(),
                usdc(1_000),
                fraction(BORROW_RATE_PERCENT),
                true,
                fraction(REQUESTED_RATIO_PERCENT),
                usdc_id(),
                USDC_DECIMALS,
                wegld_id(),
                WEGLD_DECIMALS,
                request_as_lender,
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn accept(&mut self, from: multiversx_sc_scenario::imports::TestAddress, id: u64) {
        self.world
            .tx()
            .from(from)
            .to(&self.credit_line_sc)
            .typed(proxy_credit_line::CreditLineProxy)
            .accept(id)
            .run();
    }

    pub fn accept_error(
        &mut self,
        from: multiversx_sc_scenario::imports::TestAddress,
        id: u64,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.credit_line_sc)
            .typed(proxy_credit_line::CreditLineProxy)
            .accept(id)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn deposit_savings(
        &mut self,
        from: multiversx_sc_scenario::imports::TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        strategy: &ManagedAddress<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.credit_line_sc)
            .typed(proxy_credit_line::CreditLineProxy)
            .deposit_savings(strategy.clone())
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn deposit_collateral(
        &mut self,
        from: multiversx_sc_scenario::imports::TestAddress,
        id: u64,
        amount: BigUint<StaticApi>,
        strategy: &ManagedAddress<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.credit_line_sc)
            .typed(proxy_credit_line::CreditLineProxy)
            .deposit_collateral(id, amount.clone(), strategy.clone(), false)
            .single_esdt(&WEGLD_TOKEN.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn borrow(
        &mut self,
        from: multiversx_sc_scenario::imports::TestAddress,
        id: u64,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.credit_line_sc)
            .typed(proxy_credit_line::CreditLineProxy)
            .borrow(id, amount)
            .run();
    }

    pub fn borrow_error(
        &mut self,
        from: multiversx_sc_scenario::imports::TestAddress,
        id: u64,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.credit_line_sc)
            .typed(proxy_credit_line::CreditLineProxy)
            .borrow(id, amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn repay(
        &mut self,
        from: multiversx_sc_scenario::imports::TestAddress,
        id: u64,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.credit_line_sc)
            .typed(proxy_credit_line::CreditLineProxy)
            .repay(id, amount.clone(), false)
            .single_esdt(&USDC_TOKEN.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn repay_from_savings(
        &mut self,
        from: multiversx_sc_scenario::imports::TestAddress,
        id: u64,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.credit_line_sc)
            .typed(proxy_credit_line::CreditLineProxy)
            .repay(id, amount, true)
            .run();
    }

    pub fn current_debt(&mut self, id: u64) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.credit_line_sc)
            .typed(proxy_credit_line::CreditLineProxy)
            .current_debt(id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn interest_accrued(&mut self, id: u64) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.credit_line_sc)
            .typed(proxy_credit_line::CreditLineProxy)
            .interest_accrued(id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn collateral_ratio(&mut self, id: u64) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.credit_line_sc)
            .typed(proxy_credit_line::CreditLineProxy)
            .current_collateral_ratio(id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn line_collateral_shares(
        &mut self,
        id: u64,
        strategy: &ManagedAddress<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.credit_line_sc)
            .typed(proxy_credit_line::CreditLineProxy)
            .line_collateral_shares(id, strategy.clone())
            .returns(ReturnsResult)
            .run()
    }

    pub fn savings_shares(
        &mut self,
        account: multiversx_sc_scenario::imports::TestAddress,
        token: TestTokenIdentifier,
        strategy: &ManagedAddress<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.credit_line_sc)
            .typed(proxy_credit_line::CreditLineProxy)
            .savings_shares(
                account.to_managed_address(),
                multiversx_sc::types::EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier()),
                strategy.clone(),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn shares_for_tokens(
        &mut self,
        strategy: &ManagedAddress<StaticApi>,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(strategy)
            .typed(proxy_strategy::StrategyProxy)
            .get_shares_for_tokens(
                multiversx_sc::types::EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier()),
                amount,
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn set_exchange_rate(
        &mut self,
        strategy: &ManagedAddress<StaticApi>,
        token: TestTokenIdentifier,
        rate: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(strategy)
            .typed(proxy_strategy::StrategyProxy)
            .set_exchange_rate(
                multiversx_sc::types::EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier()),
                rate,
            )
            .run();
    }
}
