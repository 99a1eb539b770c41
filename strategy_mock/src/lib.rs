#![no_std]

multiversx_sc::imports!();

use common_constants::SCALE;
use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_INSUFFICIENT_SHARES, ERROR_ZERO_PRICE,
};

/// Yield-strategy stand-in for scenario tests. Implements the strategy
/// interface (lock/unlock plus the pure share conversions) against an
/// owner-settable exchange rate, so tests can simulate accrued yield by
/// raising the rate.
#[multiversx_sc::contract]
pub trait StrategyMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    /// Tokens returned per share, at protocol scale. Unset means 1:1.
    #[only_owner]
    #[endpoint(setExchangeRate)]
    fn set_exchange_rate(&self, asset: EgldOrEsdtTokenIdentifier, rate: BigUint) {
        require!(rate > 0, ERROR_ZERO_PRICE);
        self.exchange_rate(&asset).set(&rate);
    }

    #[payable("*")]
    #[endpoint(lockTokens)]
    fn lock_tokens(&self) -> BigUint {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let shares = self.get_shares_for_tokens(asset.clone(), amount);
        let caller = self.blockchain().get_caller();
        self.locked_shares(&caller, &asset)
            .update(|held| *held += &shares);

        shares
    }

    #[endpoint(unlockTokens)]
    fn unlock_tokens(&self, asset: EgldOrEsdtTokenIdentifier, shares: BigUint) -> BigUint {
        let caller = self.blockchain().get_caller();
        let mapper = self.locked_shares(&caller, &asset);
        let held = mapper.get();
        require!(held >= shares, ERROR_INSUFFICIENT_SHARES);

        mapper.set(held - &shares);

        let tokens = self.get_tokens_for_shares(asset.clone(), shares);
        let payment = EgldOrEsdtTokenPayment::new(asset, 0, tokens.clone());
        self.tx().to(&caller).payment(&payment).transfer_if_not_empty();

        tokens
    }

    #[view(getSharesForTokens)]
    fn get_shares_for_tokens(&self, asset: EgldOrEsdtTokenIdentifier, amount: BigUint) -> BigUint {
        amount * BigUint::from(SCALE) / self.current_rate(&asset)
    }

    #[view(getTokensForShares)]
    fn get_tokens_for_shares(&self, asset: EgldOrEsdtTokenIdentifier, shares: BigUint) -> BigUint {
        shares * self.current_rate(&asset) / BigUint::from(SCALE)
    }

    fn current_rate(&self, asset: &EgldOrEsdtTokenIdentifier) -> BigUint {
        let mapper = self.exchange_rate(asset);
        if mapper.is_empty() {
            BigUint::from(SCALE)
        } else {
            mapper.get()
        }
    }

    #[view(getLockedShares)]
    #[storage_mapper("locked_shares")]
    fn locked_shares(
        &self,
        account: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("exchange_rate")]
    fn exchange_rate(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<BigUint>;
}
