multiversx_sc::imports!();

use common_structs::CreditLine;

#[multiversx_sc::module]
pub trait StorageModule {
    /// Monotonic id of the last requested line.
    #[view(getLineCounter)]
    #[storage_mapper("line_counter")]
    fn line_counter(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("credit_line")]
    fn credit_line(&self, id: u64) -> SingleValueMapper<CreditLine<Self::Api>>;

    /// Collateral backing a line, in strategy shares, per strategy.
    #[storage_mapper("line_collateral_shares")]
    fn line_collateral_shares(
        &self,
        id: u64,
        strategy: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    /// Strategies a line has collateral in, in first-deposit order. The
    /// order drives the deterministic withdrawal allocation.
    #[storage_mapper("line_strategies")]
    fn line_strategies(&self, id: u64) -> VecMapper<ManagedAddress>;

    /// Shared savings ledger: shares held per (account, asset, strategy).
    #[storage_mapper("savings_shares")]
    fn savings_shares(
        &self,
        account: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        strategy: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    /// Strategies an account has savings in, in first-deposit order.
    #[storage_mapper("savings_strategies")]
    fn savings_strategies(
        &self,
        account: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> VecMapper<ManagedAddress>;

    #[view(getPriceFeedAddress)]
    #[storage_mapper("price_feed_address")]
    fn price_feed_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getStrategyRegistryAddress)]
    #[storage_mapper("strategy_registry_address")]
    fn strategy_registry_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("protocol_fee_fraction")]
    fn protocol_fee_fraction(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[view(getProtocolFeeCollector)]
    #[storage_mapper("protocol_fee_collector")]
    fn protocol_fee_collector(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("liquidator_reward_fraction")]
    fn liquidator_reward_fraction(
        &self,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Protocol-wide floor for requested collateral ratios and trigger for
    /// liquidations.
    #[storage_mapper("liquidation_threshold")]
    fn liquidation_threshold(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;
}
