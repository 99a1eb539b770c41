multiversx_sc::imports!();

use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_INSUFFICIENT_SAVINGS,
};

use crate::{storage, utils};

/// Shared custody ledger: accounts park assets in whitelisted yield
/// strategies and later fund collateral deposits, repayments and borrows
/// out of those balances.
#[multiversx_sc::module]
pub trait SavingsModule:
    storage::StorageModule
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestAccrual
{
    #[payable("*")]
    #[endpoint(depositSavings)]
    fn deposit_savings(&self, strategy: ManagedAddress) {
        self.require_valid_strategy(&strategy);

        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let caller = self.blockchain().get_caller();
        let shares = self.lock_in_strategy(&strategy, &asset, &amount);

        self.savings_shares(&caller, &asset, &strategy)
            .update(|held| *held += &shares);
        self.note_strategy(self.savings_strategies(&caller, &asset), &strategy);

        self.savings_deposited_event(&caller, &asset, &strategy, &shares);
    }

    #[endpoint(withdrawSavings)]
    fn withdraw_savings(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        strategy: ManagedAddress,
        shares: BigUint,
    ) {
        require!(shares > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let caller = self.blockchain().get_caller();
        let mapper = self.savings_shares(&caller, &asset, &strategy);
        let held = mapper.get();
        require!(held >= shares, ERROR_INSUFFICIENT_SAVINGS);
        mapper.set(held - &shares);

        let tokens = self.unlock_from_strategy(&strategy, &asset, &shares);
        self.send_tokens(&asset, &tokens, &caller);

        self.savings_withdrawn_event(&caller, &asset, &strategy, &shares);
    }

    /// Current token value of an account's savings in `asset`, across all
    /// of its strategies.
    fn savings_value(
        &self,
        account: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> BigUint {
        let mut total = BigUint::zero();
        let strategies = self.savings_strategies(account, asset);
        for i in 1..=strategies.len() {
            let strategy = strategies.get(i);
            let held = self.savings_shares(account, asset, &strategy).get();
            if held > 0 {
                total += self.tokens_for_shares(&strategy, asset, &held);
            }
        }
        total
    }

    /// Unlocks up to `max_amount` of `asset` from the account's savings,
    /// draining strategies in first-deposit order. Share conversions floor,
    /// so the collected amount may fall a few units short of the target;
    /// callers treat the collected amount as the effective one.
    fn gather_from_savings(
        &self,
        account: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        max_amount: &BigUint,
    ) -> BigUint {
        let mut remaining = max_amount.clone();
        let mut collected = BigUint::zero();

        let strategies = self.savings_strategies(account, asset);
        for i in 1..=strategies.len() {
            if remaining == 0 {
                break;
            }

            let strategy = strategies.get(i);
            let mapper = self.savings_shares(account, asset, &strategy);
            let held = mapper.get();
            if held == 0 {
                continue;
            }

            let tokens_all = self.tokens_for_shares(&strategy, asset, &held);
            if tokens_all == 0 {
                continue;
            }

            if tokens_all <= remaining {
                let returned = self.unlock_from_strategy(&strategy, asset, &held);
                mapper.clear();
                remaining -= &returned;
                collected += returned;
            } else {
                let mut needed = self.shares_for_tokens(&strategy, asset, &remaining);
                if needed > held {
                    needed = held.clone();
                }
                if needed == 0 {
                    continue;
                }
                let returned = self.unlock_from_strategy(&strategy, asset, &needed);
                mapper.set(held - needed);
                if returned >= remaining {
                    remaining = BigUint::zero();
                } else {
                    remaining -= &returned;
                }
                collected += returned;
            }
        }

        collected
    }

    /// Moves savings shares worth `amount` tokens into a line's collateral
    /// without touching the strategy position itself.
    fn move_savings_to_collateral(
        &self,
        account: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        strategy: &ManagedAddress,
        amount: &BigUint,
        line_id: u64,
    ) -> BigUint {
        let needed = self.shares_for_tokens(strategy, asset, amount);
        require!(needed > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let mapper = self.savings_shares(account, asset, strategy);
        let held = mapper.get();
        require!(held >= needed, ERROR_INSUFFICIENT_SAVINGS);
        mapper.set(held - &needed);

        self.line_collateral_shares(line_id, strategy)
            .update(|shares| *shares += &needed);
        self.note_strategy(self.line_strategies(line_id), strategy);

        needed
    }

    /// Credits strategy shares straight into an account's savings ledger,
    /// used when collateral moves between parties without being unlocked.
    fn credit_savings_shares(
        &self,
        account: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        strategy: &ManagedAddress,
        shares: &BigUint,
    ) {
        if shares == &BigUint::zero() {
            return;
        }
        self.savings_shares(account, asset, strategy)
            .update(|held| *held += shares);
        self.note_strategy(self.savings_strategies(account, asset), strategy);
    }
}
