multiversx_sc::imports!();

use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_COLLATERAL_RATIO_BELOW_IDEAL,
    ERROR_CREDIT_LINE_NOT_ACTIVE, ERROR_INSUFFICIENT_COLLATERAL, ERROR_INVALID_ASSET,
    ERROR_ONLY_BORROWER, ERROR_PAYMENT_MISMATCH,
};

use crate::{savings, storage, utils};

#[multiversx_sc::module]
pub trait CollateralModule:
    storage::StorageModule
    + utils::UtilsModule
    + savings::SavingsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestAccrual
{
    /// Adds collateral to a line, either as an attached payment or out of
    /// the caller's savings ledger, routed through the chosen strategy.
    #[payable("*")]
    #[endpoint(depositCollateral)]
    fn deposit_collateral(&self, id: u64, amount: BigUint, strategy: ManagedAddress, from_savings: bool) {
        let mapper = self.credit_line(id);
        require!(!mapper.is_empty(), ERROR_CREDIT_LINE_NOT_ACTIVE);
        let line = mapper.get();
        require!(line.is_active(), ERROR_CREDIT_LINE_NOT_ACTIVE);
        require!(amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        self.require_valid_strategy(&strategy);

        let caller = self.blockchain().get_caller();
        let shares = if from_savings {
            self.move_savings_to_collateral(
                &caller,
                &line.collateral_asset,
                &strategy,
                &amount,
                id,
            )
        } else {
            let (asset, paid) = self.call_value().egld_or_single_fungible_esdt();
            require!(asset == line.collateral_asset, ERROR_INVALID_ASSET);
            require!(paid == amount, ERROR_PAYMENT_MISMATCH);

            let shares = self.lock_in_strategy(&strategy, &line.collateral_asset, &amount);
            self.line_collateral_shares(id, &strategy)
                .update(|held| *held += &shares);
            self.note_strategy(self.line_strategies(id), &strategy);
            shares
        };

        self.collateral_deposited_event(id, &strategy, &amount, &shares);
    }

    /// Withdraws collateral back to the borrower (or into their savings
    /// ledger), as long as the ratio stays at or above the requested one.
    #[endpoint(withdrawCollateral)]
    fn withdraw_collateral(&self, id: u64, amount: BigUint, to_savings: bool) {
        let mapper = self.credit_line(id);
        require!(!mapper.is_empty(), ERROR_CREDIT_LINE_NOT_ACTIVE);
        let line = mapper.get();
        require!(line.is_active(), ERROR_CREDIT_LINE_NOT_ACTIVE);

        let caller = self.blockchain().get_caller();
        require!(caller == line.borrower, ERROR_ONLY_BORROWER);
        require!(amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let total_tokens = self.total_line_collateral_tokens(id, &line);
        require!(amount <= total_tokens, ERROR_INSUFFICIENT_COLLATERAL);

        let debt = self.line_debt(&line);
        if debt.into_raw_units() > &BigUint::zero() {
            let remaining_value =
                self.collateral_value_in_borrow_asset(&line, &(total_tokens - &amount));
            let ratio_after = self.ratio_for(&remaining_value, &debt);
            require!(
                ratio_after >= line.collateral_ratio,
                ERROR_COLLATERAL_RATIO_BELOW_IDEAL
            );
        }

        // Drain strategies in first-deposit order; floor conversions mean
        // the collected amount may undershoot by dust, never overshoot.
        let mut remaining = amount.clone();
        let mut collected = BigUint::zero();
        let strategies = self.line_strategies(id);
        for i in 1..=strategies.len() {
            if remaining == 0 {
                break;
            }

            let strategy = strategies.get(i);
            let held = self.line_collateral_shares(id, &strategy).get();
            if held == 0 {
                continue;
            }

            let tokens_all = self.tokens_for_shares(&strategy, &line.collateral_asset, &held);
            if tokens_all == 0 {
                continue;
            }

            let take_shares = if tokens_all <= remaining {
                held.clone()
            } else {
                let mut needed =
                    self.shares_for_tokens(&strategy, &line.collateral_asset, &remaining);
                if needed > held {
                    needed = held.clone();
                }
                needed
            };
            if take_shares == 0 {
                continue;
            }

            self.line_collateral_shares(id, &strategy)
                .set(&held - &take_shares);

            if to_savings {
                let moved = self.tokens_for_shares(&strategy, &line.collateral_asset, &take_shares);
                self.credit_savings_shares(
                    &caller,
                    &line.collateral_asset,
                    &strategy,
                    &take_shares,
                );
                if moved >= remaining {
                    remaining = BigUint::zero();
                } else {
                    remaining -= &moved;
                }
                collected += moved;
            } else {
                let returned =
                    self.unlock_from_strategy(&strategy, &line.collateral_asset, &take_shares);
                self.send_tokens(&line.collateral_asset, &returned, &caller);
                if returned >= remaining {
                    remaining = BigUint::zero();
                } else {
                    remaining -= &returned;
                }
                collected += returned;
            }
        }

        self.collateral_withdrawn_event(id, &collected);
    }
}
