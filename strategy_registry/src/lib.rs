#![no_std]

multiversx_sc::imports!();

use common_errors::{
    ERROR_ADDRESS_IS_ZERO, ERROR_STRATEGY_ALREADY_WHITELISTED, ERROR_STRATEGY_NOT_WHITELISTED,
};

/// Process-wide whitelist of yield-strategy contracts. Admin-mutated,
/// read-mostly; consumers query `isValidStrategy` before routing funds.
#[multiversx_sc::contract]
pub trait StrategyRegistry: common_events::EventsModule {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(addStrategy)]
    fn add_strategy(&self, strategy: ManagedAddress) {
        require!(!strategy.is_zero(), ERROR_ADDRESS_IS_ZERO);
        require!(
            self.strategies().insert(strategy.clone()),
            ERROR_STRATEGY_ALREADY_WHITELISTED
        );

        self.strategy_whitelisted_event(&strategy);
    }

    #[only_owner]
    #[endpoint(removeStrategy)]
    fn remove_strategy(&self, strategy: ManagedAddress) {
        require!(
            self.strategies().swap_remove(&strategy),
            ERROR_STRATEGY_NOT_WHITELISTED
        );

        self.strategy_removed_event(&strategy);
    }

    #[view(isValidStrategy)]
    fn is_valid_strategy(&self, strategy: ManagedAddress) -> bool {
        self.strategies().contains(&strategy)
    }

    #[view(getStrategies)]
    #[storage_mapper("strategies")]
    fn strategies(&self) -> UnorderedSetMapper<ManagedAddress>;
}
