#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod borrow;
pub mod collateral;
pub mod lifecycle;
pub mod savings;
pub mod storage;
pub mod utils;
pub mod views;

pub use common_errors::*;
pub use common_structs::*;

use common_constants::{MAX_LIQUIDATOR_REWARD_FRACTION, MAX_PROTOCOL_FEE_FRACTION};

/// Peer-to-peer credit lines: every line is a bilateral agreement between a
/// lender and a borrower, funded out of the lender's savings ledger and
/// secured by collateral held in whitelisted yield strategies.
#[multiversx_sc::contract]
pub trait CreditLines:
    storage::StorageModule
    + utils::UtilsModule
    + savings::SavingsModule
    + lifecycle::LifecycleModule
    + collateral::CollateralModule
    + borrow::BorrowModule
    + views::ViewsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestAccrual
{
    #[init]
    fn init(
        &self,
        price_feed: ManagedAddress,
        strategy_registry: ManagedAddress,
        protocol_fee_fraction: BigUint,
        protocol_fee_collector: ManagedAddress,
        liquidator_reward_fraction: BigUint,
        liquidation_threshold: BigUint,
    ) {
        require!(!price_feed.is_zero(), ERROR_ADDRESS_IS_ZERO);
        require!(!strategy_registry.is_zero(), ERROR_ADDRESS_IS_ZERO);
        require!(!protocol_fee_collector.is_zero(), ERROR_ADDRESS_IS_ZERO);
        require!(
            protocol_fee_fraction <= BigUint::from(MAX_PROTOCOL_FEE_FRACTION),
            ERROR_INVALID_FRACTION
        );
        require!(
            liquidator_reward_fraction <= BigUint::from(MAX_LIQUIDATOR_REWARD_FRACTION),
            ERROR_INVALID_FRACTION
        );
        require!(
            liquidation_threshold > 0,
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );

        self.price_feed_address().set(&price_feed);
        self.strategy_registry_address().set(&strategy_registry);
        self.protocol_fee_fraction()
            .set(self.to_decimal_scaled(protocol_fee_fraction));
        self.protocol_fee_collector().set(&protocol_fee_collector);
        self.liquidator_reward_fraction()
            .set(self.to_decimal_scaled(liquidator_reward_fraction));
        self.liquidation_threshold()
            .set(self.to_decimal_scaled(liquidation_threshold));
    }

    #[upgrade]
    fn upgrade(&self) {}
}
