multiversx_sc::imports!();

use common_structs::ProtocolParams;

#[multiversx_sc::module]
pub trait StorageModule {
    #[view(getPoolTemplateAddress)]
    #[storage_mapper("pool_template_address")]
    fn pool_template_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getPriceFeedAddress)]
    #[storage_mapper("price_feed_address")]
    fn price_feed_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getStrategyRegistryAddress)]
    #[storage_mapper("strategy_registry_address")]
    fn strategy_registry_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getProtocolParams)]
    #[storage_mapper("protocol_params")]
    fn protocol_params(&self) -> SingleValueMapper<ProtocolParams<Self::Api>>;

    /// All pools deployed by this factory.
    #[view(getPools)]
    #[storage_mapper("pools")]
    fn pools(&self) -> UnorderedSetMapper<ManagedAddress>;
}
