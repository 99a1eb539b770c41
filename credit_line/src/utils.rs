multiversx_sc::imports!();

use common_constants::{SCALE, SCALE_PRECISION};
use common_errors::ERROR_STRATEGY_NOT_WHITELISTED;
use common_proxies::{proxy_price_feed, proxy_strategy, proxy_strategy_registry};
use common_structs::CreditLine;

use crate::storage;

#[multiversx_sc::module]
pub trait UtilsModule:
    storage::StorageModule + common_math::SharedMathModule + common_rates::InterestAccrual
{
    fn require_valid_strategy(&self, strategy: &ManagedAddress) {
        let is_valid = self
            .tx()
            .to(&self.strategy_registry_address().get())
            .typed(proxy_strategy_registry::StrategyRegistryProxy)
            .is_valid_strategy(strategy.clone())
            .returns(ReturnsResult)
            .sync_call();
        require!(is_valid, ERROR_STRATEGY_NOT_WHITELISTED);
    }

    fn lock_in_strategy(
        &self,
        strategy: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) -> BigUint {
        let payment = EgldOrEsdtTokenPayment::new(asset.clone(), 0, amount.clone());
        self.tx()
            .to(strategy)
            .typed(proxy_strategy::StrategyProxy)
            .lock_tokens()
            .payment(&payment)
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Unlocked tokens land on this contract's balance, ready to forward.
    fn unlock_from_strategy(
        &self,
        strategy: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        shares: &BigUint,
    ) -> BigUint {
        self.tx()
            .to(strategy)
            .typed(proxy_strategy::StrategyProxy)
            .unlock_tokens(asset.clone(), shares.clone())
            .returns(ReturnsResult)
            .sync_call()
    }

    fn shares_for_tokens(
        &self,
        strategy: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) -> BigUint {
        self.tx()
            .to(strategy)
            .typed(proxy_strategy::StrategyProxy)
            .get_shares_for_tokens(asset.clone(), amount.clone())
            .returns(ReturnsResult)
            .sync_call()
    }

    fn tokens_for_shares(
        &self,
        strategy: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        shares: &BigUint,
    ) -> BigUint {
        self.tx()
            .to(strategy)
            .typed(proxy_strategy::StrategyProxy)
            .get_tokens_for_shares(asset.clone(), shares.clone())
            .returns(ReturnsResult)
            .sync_call()
    }

    fn equivalent_tokens(
        &self,
        asset_in: &EgldOrEsdtTokenIdentifier,
        asset_out: &EgldOrEsdtTokenIdentifier,
        amount_in: &BigUint,
    ) -> BigUint {
        self.tx()
            .to(&self.price_feed_address().get())
            .typed(proxy_price_feed::PriceFeedProxy)
            .get_equivalent_tokens(asset_in.clone(), asset_out.clone(), amount_in.clone())
            .returns(ReturnsResult)
            .sync_call()
    }

    fn price_feed_registered(
        &self,
        base: &EgldOrEsdtTokenIdentifier,
        quote: &EgldOrEsdtTokenIdentifier,
    ) -> bool {
        self.tx()
            .to(&self.price_feed_address().get())
            .typed(proxy_price_feed::PriceFeedProxy)
            .has_price_feed(base.clone(), quote.clone())
            .returns(ReturnsResult)
            .sync_call()
    }

    fn send_tokens(&self, asset: &EgldOrEsdtTokenIdentifier, amount: &BigUint, to: &ManagedAddress) {
        let payment = EgldOrEsdtTokenPayment::new(asset.clone(), 0, amount.clone());
        self.tx().to(to).payment(&payment).transfer_if_not_empty();
    }

    // Debt and collateral-ratio evaluation

    /// Interest owed right now: the stored snapshot plus fresh accrual.
    fn accrued_interest(&self, line: &CreditLine<Self::Api>) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.calculate_interest_accrued(
            &line.principal,
            &line.borrow_rate,
            &line.interest_accrued_till_last_update,
            line.last_principal_update_timestamp,
            self.blockchain().get_block_timestamp(),
        )
    }

    fn line_debt(&self, line: &CreditLine<Self::Api>) -> ManagedDecimal<Self::Api, NumDecimals> {
        line.principal.clone() + self.accrued_interest(line)
    }

    /// Collateral tokens backing a line, summed over its strategies.
    fn total_line_collateral_tokens(&self, id: u64, line: &CreditLine<Self::Api>) -> BigUint {
        let mut total = BigUint::zero();
        let strategies = self.line_strategies(id);
        for i in 1..=strategies.len() {
            let strategy = strategies.get(i);
            let held = self.line_collateral_shares(id, &strategy).get();
            if held > 0 {
                total += self.tokens_for_shares(&strategy, &line.collateral_asset, &held);
            }
        }
        total
    }

    /// Collateral value in borrow-asset units.
    fn collateral_value_in_borrow_asset(
        &self,
        line: &CreditLine<Self::Api>,
        collateral_tokens: &BigUint,
    ) -> BigUint {
        if collateral_tokens == &BigUint::zero() {
            return BigUint::zero();
        }
        self.equivalent_tokens(&line.collateral_asset, &line.borrow_asset, collateral_tokens)
    }

    /// Collateral value over debt, at protocol scale. Zero debt is defined
    /// as ratio zero so comparisons never divide by zero.
    fn ratio_for(
        &self,
        collateral_value: &BigUint,
        debt: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if debt.into_raw_units() == &BigUint::zero() {
            return self.unit_zero();
        }

        let ratio_raw = collateral_value * &BigUint::from(SCALE) / debt.into_raw_units();
        self.to_decimal(ratio_raw, SCALE_PRECISION)
    }

    fn current_ratio(&self, id: u64, line: &CreditLine<Self::Api>) -> ManagedDecimal<Self::Api, NumDecimals> {
        let tokens = self.total_line_collateral_tokens(id, line);
        let value = self.collateral_value_in_borrow_asset(line, &tokens);
        self.ratio_for(&value, &self.line_debt(line))
    }

    /// Appends `strategy` to an ordered VecMapper if not yet present.
    fn note_strategy(
        &self,
        mut mapper: VecMapper<Self::Api, ManagedAddress>,
        strategy: &ManagedAddress,
    ) {
        for i in 1..=mapper.len() {
            if &mapper.get(i) == strategy {
                return;
            }
        }
        mapper.push(strategy);
    }
}
