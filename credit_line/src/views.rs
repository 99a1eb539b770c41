multiversx_sc::imports!();

use common_constants::SCALE;
use common_errors::ERROR_CREDIT_LINE_NOT_REQUESTED;
use common_structs::CreditLine;

use crate::{savings, storage, utils};

#[multiversx_sc::module]
pub trait ViewsModule:
    storage::StorageModule
    + utils::UtilsModule
    + savings::SavingsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestAccrual
{
    #[view(getCreditLine)]
    fn view_credit_line(&self, id: u64) -> CreditLine<Self::Api> {
        let mapper = self.credit_line(id);
        require!(!mapper.is_empty(), ERROR_CREDIT_LINE_NOT_REQUESTED);
        mapper.get()
    }

    /// Total interest owed right now; idempotent between state mutations.
    #[view(calculateInterestAccrued)]
    fn view_interest_accrued(&self, id: u64) -> BigUint {
        let line = self.view_credit_line(id);
        self.accrued_interest(&line).into_raw_units().clone()
    }

    #[view(getCurrentDebt)]
    fn view_current_debt(&self, id: u64) -> BigUint {
        let line = self.view_credit_line(id);
        self.line_debt(&line).into_raw_units().clone()
    }

    #[view(getTotalCollateralTokens)]
    fn view_total_collateral_tokens(&self, id: u64) -> BigUint {
        let line = self.view_credit_line(id);
        self.total_line_collateral_tokens(id, &line)
    }

    #[view(getCurrentCollateralRatio)]
    fn view_current_collateral_ratio(&self, id: u64) -> BigUint {
        let line = self.view_credit_line(id);
        self.current_ratio(id, &line).into_raw_units().clone()
    }

    /// How much the borrower could still draw: bounded by the borrow limit,
    /// by the collateral at the requested ratio, and by the lender's
    /// savings. Zero when nothing is deposited.
    #[view(getBorrowableAmount)]
    fn view_borrowable_amount(&self, id: u64) -> BigUint {
        let line = self.view_credit_line(id);
        if !line.is_active() {
            return BigUint::zero();
        }

        let debt = self.line_debt(&line);
        let debt_raw = debt.into_raw_units();

        let limit_raw = line.borrow_limit.into_raw_units();
        if limit_raw <= debt_raw {
            return BigUint::zero();
        }
        let limit_room = limit_raw - debt_raw;

        let tokens = self.total_line_collateral_tokens(id, &line);
        let value = self.collateral_value_in_borrow_asset(&line, &tokens);
        let supportable = value * BigUint::from(SCALE) / line.collateral_ratio.into_raw_units();
        if &supportable <= debt_raw {
            return BigUint::zero();
        }
        let ratio_room = supportable - debt_raw;

        let lender_funds = self.savings_value(&line.lender, &line.borrow_asset);

        let mut borrowable = limit_room;
        if ratio_room < borrowable {
            borrowable = ratio_room;
        }
        if lender_funds < borrowable {
            borrowable = lender_funds;
        }
        borrowable
    }

    #[view(getLineCollateralShares)]
    fn view_line_collateral_shares(&self, id: u64, strategy: ManagedAddress) -> BigUint {
        self.line_collateral_shares(id, &strategy).get()
    }

    #[view(getSavingsShares)]
    fn view_savings_shares(
        &self,
        account: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        strategy: ManagedAddress,
    ) -> BigUint {
        self.savings_shares(&account, &asset, &strategy).get()
    }
}
