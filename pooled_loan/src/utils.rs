multiversx_sc::imports!();

use common_constants::{SCALE, SCALE_PRECISION};
use common_errors::ERROR_INVALID_ASSET;
use common_proxies::{proxy_price_feed, proxy_strategy};

use crate::{cache::Cache, storage};

#[multiversx_sc::module]
pub trait UtilsModule:
    storage::StorageModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestAccrual
{
    /// Snapshots interest accrued up to now. Called before every operation
    /// that reads or mutates the debt, so the stored snapshot is always the
    /// value interest was last settled against.
    fn sync_accrual(&self, cache: &mut Cache<Self>) {
        if cache.timestamp <= cache.last_update_timestamp {
            return;
        }

        cache.interest_till_last_update = self.calculate_interest_accrued(
            &cache.principal_outstanding(),
            &cache.config.borrow_rate,
            &cache.interest_till_last_update,
            cache.last_update_timestamp,
            cache.timestamp,
        );
        cache.last_update_timestamp = cache.timestamp;
    }

    /// Validates the attached payment against the expected asset and
    /// returns it as a decimal.
    fn get_payment_amount(
        &self,
        expected_asset: &EgldOrEsdtTokenIdentifier,
        decimals: usize,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(&asset == expected_asset, ERROR_INVALID_ASSET);

        self.to_decimal(amount, decimals)
    }

    fn send_asset(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        to: &ManagedAddress,
    ) {
        let payment =
            EgldOrEsdtTokenPayment::new(asset.clone(), 0, amount.into_raw_units().clone());
        self.tx().to(to).payment(&payment).transfer_if_not_empty();
    }

    // Strategy plumbing

    fn lock_collateral(
        &self,
        cache: &Cache<Self>,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let payment = EgldOrEsdtTokenPayment::new(
            cache.config.collateral_asset.clone(),
            0,
            amount.into_raw_units().clone(),
        );

        let shares = self
            .tx()
            .to(&cache.config.collateral_strategy)
            .typed(proxy_strategy::StrategyProxy)
            .lock_tokens()
            .payment(&payment)
            .returns(ReturnsResult)
            .sync_call();

        self.to_decimal(shares, cache.config.collateral_decimals)
    }

    /// Unlocks strategy shares; the returned tokens land on this contract's
    /// balance, ready to be forwarded.
    fn unlock_collateral(
        &self,
        cache: &Cache<Self>,
        shares: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if shares == &cache.collateral_zero {
            return cache.collateral_zero.clone();
        }

        let tokens = self
            .tx()
            .to(&cache.config.collateral_strategy)
            .typed(proxy_strategy::StrategyProxy)
            .unlock_tokens(
                cache.config.collateral_asset.clone(),
                shares.into_raw_units().clone(),
            )
            .returns(ReturnsResult)
            .sync_call();

        self.to_decimal(tokens, cache.config.collateral_decimals)
    }

    fn collateral_tokens_for_shares(
        &self,
        cache: &Cache<Self>,
        shares: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let tokens = self
            .tx()
            .to(&cache.config.collateral_strategy)
            .typed(proxy_strategy::StrategyProxy)
            .get_tokens_for_shares(
                cache.config.collateral_asset.clone(),
                shares.into_raw_units().clone(),
            )
            .returns(ReturnsResult)
            .sync_call();

        self.to_decimal(tokens, cache.config.collateral_decimals)
    }

    /// Collateral tokens converted to borrow-asset units via the price feed.
    fn collateral_value_in_borrow_asset(
        &self,
        cache: &Cache<Self>,
        tokens: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let value = self
            .tx()
            .to(&cache.params.price_feed)
            .typed(proxy_price_feed::PriceFeedProxy)
            .get_equivalent_tokens(
                cache.config.collateral_asset.clone(),
                cache.config.borrow_asset.clone(),
                tokens.into_raw_units().clone(),
            )
            .returns(ReturnsResult)
            .sync_call();

        self.to_decimal(value, cache.config.borrow_decimals)
    }

    /// All collateral currently backing the loan: the borrower's base
    /// deposit plus any unanswered margin-call top-ups.
    fn total_collateral_shares(&self, cache: &Cache<Self>) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut total = cache.base_collateral_shares.clone();
        for lender in self.margin_calls().iter() {
            total += self.read_margin_shares(cache, &lender);
        }
        total
    }

    /// Per-address decimal mappers start out empty; read them as zero.
    fn read_pool_token_balance(
        &self,
        cache: &Cache<Self>,
        lender: &ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mapper = self.pool_token_balance(lender);
        if mapper.is_empty() {
            cache.zero.clone()
        } else {
            mapper.get()
        }
    }

    fn read_margin_shares(
        &self,
        cache: &Cache<Self>,
        lender: &ManagedAddress,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mapper = self.margin_collateral_shares(lender);
        if mapper.is_empty() {
            cache.collateral_zero.clone()
        } else {
            mapper.get()
        }
    }

    /// `total * balance / total_supply`, rounded down.
    fn pro_rata(
        &self,
        total: &ManagedDecimal<Self::Api, NumDecimals>,
        balance: &ManagedDecimal<Self::Api, NumDecimals>,
        supply: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let raw = total.into_raw_units() * balance.into_raw_units() / supply.into_raw_units();
        self.to_decimal(raw, total.scale())
    }

    /// Collects every open margin-call top-up into one total and clears the
    /// per-lender entries and the call set.
    fn drain_margin_collateral(
        &self,
        cache: &Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut total = cache.collateral_zero.clone();
        while !self.margin_calls().is_empty() {
            let lender = self.margin_calls().get_by_index(1);
            total += self.read_margin_shares(cache, &lender);
            self.margin_collateral_shares(&lender).clear();
            self.margin_call_deadline(&lender).clear();
            self.margin_calls().swap_remove(&lender);
        }
        total
    }

    /// Ratio of collateral value (in borrow-asset terms) to `debt`, at
    /// protocol scale. Zero debt is defined as ratio zero so callers can
    /// compare without a division trap.
    fn collateral_ratio_against(
        &self,
        cache: &Cache<Self>,
        debt: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if debt == &cache.zero {
            return self.unit_zero();
        }

        let shares = self.total_collateral_shares(cache);
        let tokens = self.collateral_tokens_for_shares(cache, &shares);
        let value = self.collateral_value_in_borrow_asset(cache, &tokens);

        let ratio_raw = value.into_raw_units() * &BigUint::from(SCALE) / debt.into_raw_units();
        self.to_decimal(ratio_raw, SCALE_PRECISION)
    }

    fn current_debt(&self, cache: &Cache<Self>) -> ManagedDecimal<Self::Api, NumDecimals> {
        let interest_now = self.calculate_interest_accrued(
            &cache.principal_outstanding(),
            &cache.config.borrow_rate,
            &cache.interest_till_last_update,
            cache.last_update_timestamp,
            cache.timestamp,
        );

        cache.principal_outstanding() + interest_now - cache.interest_repaid.clone()
    }

    /// `duration * fraction / SCALE` in whole seconds.
    fn fraction_of_duration(
        &self,
        duration: u64,
        fraction: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> u64 {
        let raw = BigUint::from(duration) * fraction.into_raw_units() / BigUint::from(SCALE);
        raw.to_u64().unwrap_or_default()
    }
}
