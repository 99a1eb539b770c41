multiversx_sc::imports!();

use common_constants::SCALE;
use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_AUTO_LIQUIDATION_DISABLED,
    ERROR_COLLATERAL_RATIO_BELOW_LIQUIDATION, ERROR_CREDIT_LINE_NOT_ACTIVE,
    ERROR_CREDIT_LINE_NOT_REQUESTED, ERROR_INTEREST_NOT_SETTLED, ERROR_NOTHING_TO_REPAY,
    ERROR_NOT_COUNTER_PARTY, ERROR_NOT_LIQUIDATABLE, ERROR_NOT_PARTICIPANT,
    ERROR_NO_PRICE_FEED, ERROR_PRINCIPAL_NOT_REPAID, ERROR_SAME_LENDER_BORROWER,
};
use common_structs::{CreditLine, CreditLineStatus};

use crate::{savings, storage, utils};

#[multiversx_sc::module]
pub trait LifecycleModule:
    storage::StorageModule
    + utils::UtilsModule
    + savings::SavingsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestAccrual
{
    /// Opens a credit-line request against `counter_party`. Either side may
    /// request: with `request_as_lender` the caller offers credit, without
    /// it the caller asks for credit.
    #[allow(clippy::too_many_arguments)]
    #[endpoint(request)]
    fn request(
        &self,
        counter_party: ManagedAddress,
        borrow_limit: BigUint,
        borrow_rate: BigUint,
        auto_liquidation: bool,
        collateral_ratio: BigUint,
        borrow_asset: EgldOrEsdtTokenIdentifier,
        borrow_decimals: usize,
        collateral_asset: EgldOrEsdtTokenIdentifier,
        collateral_decimals: usize,
        request_as_lender: bool,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        require!(caller != counter_party, ERROR_SAME_LENDER_BORROWER);
        require!(borrow_limit > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let requested_ratio = self.to_decimal_scaled(collateral_ratio);
        require!(
            requested_ratio >= self.liquidation_threshold().get(),
            ERROR_COLLATERAL_RATIO_BELOW_LIQUIDATION
        );
        require!(
            self.price_feed_registered(&collateral_asset, &borrow_asset),
            ERROR_NO_PRICE_FEED
        );

        let (lender, borrower) = if request_as_lender {
            (caller, counter_party)
        } else {
            (counter_party, caller)
        };

        let id = self.line_counter().get() + 1;
        self.line_counter().set(id);

        let line = CreditLine {
            lender: lender.clone(),
            borrower: borrower.clone(),
            borrow_asset: borrow_asset.clone(),
            collateral_asset: collateral_asset.clone(),
            borrow_decimals,
            collateral_decimals,
            borrow_limit: self.to_decimal(borrow_limit.clone(), borrow_decimals),
            borrow_rate: self.to_decimal_scaled(borrow_rate),
            collateral_ratio: requested_ratio,
            auto_liquidation,
            requested_by_lender: request_as_lender,
            status: CreditLineStatus::Requested,
            principal: self.to_decimal(BigUint::zero(), borrow_decimals),
            interest_accrued_till_last_update: self.to_decimal(BigUint::zero(), borrow_decimals),
            last_principal_update_timestamp: 0,
        };
        self.credit_line(id).set(&line);

        self.credit_line_requested_event(
            id,
            &lender,
            &borrower,
            &borrow_asset,
            &collateral_asset,
            &borrow_limit,
        );

        id
    }

    /// The counter-party of the request activates the line.
    #[endpoint(accept)]
    fn accept(&self, id: u64) {
        let mapper = self.credit_line(id);
        require!(!mapper.is_empty(), ERROR_CREDIT_LINE_NOT_REQUESTED);

        let mut line = mapper.get();
        require!(
            line.status == CreditLineStatus::Requested,
            ERROR_CREDIT_LINE_NOT_REQUESTED
        );

        let caller = self.blockchain().get_caller();
        require!(&caller == line.counter_party(), ERROR_NOT_COUNTER_PARTY);

        line.status = CreditLineStatus::Active;
        line.last_principal_update_timestamp = self.blockchain().get_block_timestamp();
        mapper.set(&line);

        self.credit_line_accepted_event(id, &caller);
    }

    /// Closes a settled line and hands all collateral back to the borrower.
    #[endpoint(close)]
    fn close(&self, id: u64) {
        let mapper = self.credit_line(id);
        require!(!mapper.is_empty(), ERROR_CREDIT_LINE_NOT_ACTIVE);

        let mut line = mapper.get();
        require!(line.is_active(), ERROR_CREDIT_LINE_NOT_ACTIVE);

        let caller = self.blockchain().get_caller();
        require!(
            caller == line.lender || caller == line.borrower,
            ERROR_NOT_PARTICIPANT
        );

        let zero = self.to_decimal(BigUint::zero(), line.borrow_decimals);
        require!(line.principal == zero, ERROR_PRINCIPAL_NOT_REPAID);
        require!(
            self.accrued_interest(&line) == zero,
            ERROR_INTEREST_NOT_SETTLED
        );

        // Hand every strategy position back as tokens.
        let strategies = self.line_strategies(id);
        for i in 1..=strategies.len() {
            let strategy = strategies.get(i);
            let held = self.line_collateral_shares(id, &strategy).get();
            if held > 0 {
                let tokens = self.unlock_from_strategy(&strategy, &line.collateral_asset, &held);
                self.send_tokens(&line.collateral_asset, &tokens, &line.borrower);
                self.line_collateral_shares(id, &strategy).clear();
            }
        }
        self.line_strategies(id).clear();

        line.status = CreditLineStatus::Closed;
        mapper.set(&line);

        self.credit_line_closed_event(id, &caller);
    }

    /// Seizes the collateral of a line whose ratio fell through the
    /// liquidation threshold. The lender (or the borrower, voluntarily) may
    /// always liquidate; third parties only when the line opted into
    /// auto-liquidation, and they earn the liquidator reward fraction.
    #[endpoint(liquidate)]
    fn liquidate(&self, id: u64, withdraw_collateral: bool) {
        let mapper = self.credit_line(id);
        require!(!mapper.is_empty(), ERROR_CREDIT_LINE_NOT_ACTIVE);

        let mut line = mapper.get();
        require!(line.is_active(), ERROR_CREDIT_LINE_NOT_ACTIVE);

        let debt = self.line_debt(&line);
        require!(
            debt.into_raw_units() > &BigUint::zero(),
            ERROR_NOTHING_TO_REPAY
        );

        let tokens = self.total_line_collateral_tokens(id, &line);
        let value = self.collateral_value_in_borrow_asset(&line, &tokens);
        let ratio = self.ratio_for(&value, &debt);
        require!(
            ratio < self.liquidation_threshold().get(),
            ERROR_NOT_LIQUIDATABLE
        );

        let caller = self.blockchain().get_caller();
        let third_party = caller != line.lender && caller != line.borrower;
        if third_party {
            require!(line.auto_liquidation, ERROR_AUTO_LIQUIDATION_DISABLED);
        }

        let reward_fraction = self.liquidator_reward_fraction().get();
        let mut seized_total = BigUint::zero();
        let mut reward_total = BigUint::zero();

        let strategies = self.line_strategies(id);
        for i in 1..=strategies.len() {
            let strategy = strategies.get(i);
            let held = self.line_collateral_shares(id, &strategy).get();
            if held == 0 {
                continue;
            }
            self.line_collateral_shares(id, &strategy).clear();

            let reward_shares = if third_party {
                held.clone() * reward_fraction.into_raw_units() / BigUint::from(SCALE)
            } else {
                BigUint::zero()
            };
            let lender_shares = held - &reward_shares;

            if withdraw_collateral {
                let reward_tokens =
                    self.unlock_from_strategy(&strategy, &line.collateral_asset, &reward_shares);
                self.send_tokens(&line.collateral_asset, &reward_tokens, &caller);
                let lender_tokens =
                    self.unlock_from_strategy(&strategy, &line.collateral_asset, &lender_shares);
                self.send_tokens(&line.collateral_asset, &lender_tokens, &line.lender);
                reward_total += reward_tokens;
                seized_total += lender_tokens;
            } else {
                self.credit_savings_shares(
                    &caller,
                    &line.collateral_asset,
                    &strategy,
                    &reward_shares,
                );
                self.credit_savings_shares(
                    &line.lender,
                    &line.collateral_asset,
                    &strategy,
                    &lender_shares,
                );
                reward_total += reward_shares;
                seized_total += lender_shares;
            }
        }
        self.line_strategies(id).clear();

        line.status = CreditLineStatus::Closed;
        mapper.set(&line);

        self.credit_line_liquidated_event(id, &caller, &seized_total, &reward_total);
    }
}
