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

/// Has no registered price feed.
pub const UNLISTED_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("RAND-abcdef");

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const LENDER_ADDRESS: TestAddress = TestAddress::new("lender");
pub const BORROWER_ADDRESS: TestAddress = TestAddress::new("borrower");
pub const LIQUIDATOR_ADDRESS: TestAddress = TestAddress::new("liquidator");
pub const FEE_COLLECTOR_ADDRESS: TestAddress = TestAddress::new("fee-collector");

pub const CREDIT_LINE_PATH: MxscPath = MxscPath::new("output/credit-line.mxsc.json");
pub const PRICE_FEED_PATH: MxscPath = MxscPath::new("../price_feed/output/price-feed.mxsc.json");
pub const STRATEGY_REGISTRY_PATH: MxscPath =
    MxscPath::new("../strategy_registry/output/strategy-registry.mxsc.json");
pub const STRATEGY_MOCK_PATH: MxscPath =
    MxscPath::new("../strategy_mock/output/strategy-mock.mxsc.json");

pub const PROTOCOL_FEE_PERCENT: u64 = 1;
pub const LIQUIDATOR_REWARD_PERCENT: u64 = 5;
pub const LIQUIDATION_THRESHOLD_PERCENT: u64 = 150;
pub const REQUESTED_RATIO_PERCENT: u64 = 200;
pub const BORROW_RATE_PERCENT: u64 = 10;

/// One WEGLD is worth 40 USDC; one USDC is 0.025 WEGLD.
pub const WEGLD_PRICE_IN_USDC: u64 = 40;

/// A percentage at protocol scale, as a raw value.
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

pub fn unlisted_id() -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(UNLISTED_TOKEN.to_token_identifier())
}
