#![allow(dead_code)]

use common_constants::SCALE;
use multiversx_sc::types::{BigUint, EgldOrEsdtTokenIdentifier};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{MxscPath, TestAddress, TestTokenIdentifier},
};

pub const USDC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-abcdef");
pub const USDC_DECIMALS: usize = 6;

pub const WEGLD_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WEGLD-abcdef");
pub const WEGLD_DECIMALS: usize = 18;

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const BORROWER_ADDRESS: TestAddress = TestAddress::new("borrower");
pub const LENDER_ADDRESS: TestAddress = TestAddress::new("lender");
pub const SECOND_LENDER_ADDRESS: TestAddress = TestAddress::new("second-lender");
pub const LIQUIDATOR_ADDRESS: TestAddress = TestAddress::new("liquidator");
pub const FEE_COLLECTOR_ADDRESS: TestAddress = TestAddress::new("fee-collector");

pub const POOLED_LOAN_PATH: MxscPath = MxscPath::new("output/pooled-loan.mxsc.json");
pub const POOL_FACTORY_PATH: MxscPath =
    MxscPath::new("../pool_factory/output/pool-factory.mxsc.json");
pub const PRICE_FEED_PATH: MxscPath = MxscPath::new("../price_feed/output/price-feed.mxsc.json");
pub const STRATEGY_REGISTRY_PATH: MxscPath =
    MxscPath::new("../strategy_registry/output/strategy-registry.mxsc.json");
pub const STRATEGY_MOCK_PATH: MxscPath =
    MxscPath::new("../strategy_mock/output/strategy-mock.mxsc.json");

// protocol parameters
pub const PROTOCOL_FEE_PERCENT: u64 = 1;
pub const CANCEL_PENALTY_PERCENT: u64 = 10;
pub const GRACE_PENALTY_PERCENT: u64 = 10;
pub const GRACE_PERIOD_PERCENT: u64 = 10;
pub const LIQUIDATOR_REWARD_PERCENT: u64 = 5;
pub const VOTE_PASS_RATIO_PERCENT: u64 = 50;
pub const MARGIN_CALL_DURATION: u64 = 1_000;
pub const EXTENSION_VOTE_DURATION: u64 = 500;

// loan terms
pub const POOL_SIZE_USDC: u64 = 100;
pub const BORROW_RATE_PERCENT: u64 = 10;
pub const IDEAL_RATIO_PERCENT: u64 = 200;
pub const MIN_BORROW_FRACTION_PERCENT: u64 = 50;
pub const COLLECTION_PERIOD: u64 = 1_000;
pub const LOAN_WITHDRAWAL_DURATION: u64 = 1_000;
pub const REPAYMENT_INTERVAL: u64 = 2_592_000; // 30 days
pub const NO_OF_REPAYMENT_INTERVALS: u64 = 12;

pub const LOAN_START_TIME: u64 = COLLECTION_PERIOD;
pub const LOAN_WITHDRAWAL_DEADLINE: u64 = COLLECTION_PERIOD + LOAN_WITHDRAWAL_DURATION;

/// One WEGLD is worth 40 USDC.
pub const WEGLD_PRICE_IN_USDC: u64 = 40;

pub fn fraction(percent: u64) -> BigUint<StaticApi> {
    BigUint::from(SCALE) * BigUint::from(percent) / BigUint::from(100u64)
}

pub fn usdc(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(USDC_DECIMALS as u32)
}

pub fn wegld(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(WEGLD_DECIMALS as u32)
}

pub fn usdc_id() -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(USDC_TOKEN.to_token_identifier())
}

pub fn wegld_id() -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(WEGLD_TOKEN.to_token_identifier())
}
