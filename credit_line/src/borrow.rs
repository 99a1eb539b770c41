multiversx_sc::imports!();

use common_constants::SCALE;
use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_BORROW_LIMIT_EXCEEDED,
    ERROR_COLLATERAL_RATIO_WITHDRAW, ERROR_CREDIT_LINE_NOT_ACTIVE,
    ERROR_INSUFFICIENT_LENDER_BALANCE, ERROR_INVALID_ASSET, ERROR_NOTHING_TO_REPAY,
    ERROR_ONLY_BORROWER,
};

use crate::{savings, storage, utils};

#[multiversx_sc::module]
pub trait BorrowModule:
    storage::StorageModule
    + utils::UtilsModule
    + savings::SavingsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestAccrual
{
    /// Draws down the credit line. Funds come out of the lender's savings
    /// ledger; the protocol fee is taken from the disbursed amount while
    /// the full amount is added to principal.
    #[endpoint(borrow)]
    fn borrow(&self, id: u64, amount: BigUint) {
        let mapper = self.credit_line(id);
        require!(!mapper.is_empty(), ERROR_CREDIT_LINE_NOT_ACTIVE);
        let mut line = mapper.get();
        require!(line.is_active(), ERROR_CREDIT_LINE_NOT_ACTIVE);

        let caller = self.blockchain().get_caller();
        require!(caller == line.borrower, ERROR_ONLY_BORROWER);
        require!(amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let interest_now = self.accrued_interest(&line);
        let debt = line.principal.clone() + interest_now.clone();
        let amount_dec = self.to_decimal(amount.clone(), line.borrow_decimals);
        require!(
            debt.clone() + amount_dec.clone() <= line.borrow_limit,
            ERROR_BORROW_LIMIT_EXCEEDED
        );

        let tokens = self.total_line_collateral_tokens(id, &line);
        let value = self.collateral_value_in_borrow_asset(&line, &tokens);
        let prospective_debt = debt + amount_dec;
        let ratio = self.ratio_for(&value, &prospective_debt);
        // Borrowing withdraws the lender's funds, hence the wording.
        require!(ratio >= line.collateral_ratio, ERROR_COLLATERAL_RATIO_WITHDRAW);

        require!(
            self.savings_value(&line.lender, &line.borrow_asset) >= amount,
            ERROR_INSUFFICIENT_LENDER_BALANCE
        );

        // Floor conversions may gather slightly less than requested; the
        // gathered amount is the effective borrow.
        let gathered = self.gather_from_savings(&line.lender, &line.borrow_asset, &amount);
        require!(gathered > 0, ERROR_INSUFFICIENT_LENDER_BALANCE);

        let fee_fraction = self.protocol_fee_fraction().get();
        let fee = &gathered * fee_fraction.into_raw_units() / BigUint::from(SCALE);
        let disbursed = &gathered - &fee;

        self.send_tokens(&line.borrow_asset, &fee, &self.protocol_fee_collector().get());
        self.send_tokens(&line.borrow_asset, &disbursed, &line.borrower);

        line.interest_accrued_till_last_update = interest_now;
        line.last_principal_update_timestamp = self.blockchain().get_block_timestamp();
        line.principal += self.to_decimal(gathered.clone(), line.borrow_decimals);
        mapper.set(&line);

        self.credit_line_borrow_event(id, &gathered, &fee);
    }

    /// Repays the line, interest before principal, from an attached payment
    /// or from the caller's savings ledger. Anyone may repay on the
    /// borrower's behalf; the proceeds go straight to the lender.
    #[payable("*")]
    #[endpoint(repay)]
    fn repay(&self, id: u64, amount: BigUint, from_savings: bool) {
        let mapper = self.credit_line(id);
        require!(!mapper.is_empty(), ERROR_CREDIT_LINE_NOT_ACTIVE);
        let mut line = mapper.get();
        require!(line.is_active(), ERROR_CREDIT_LINE_NOT_ACTIVE);
        require!(amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let interest_now = self.accrued_interest(&line);
        let debt_raw =
            line.principal.into_raw_units().clone() + interest_now.into_raw_units().clone();
        require!(debt_raw > 0, ERROR_NOTHING_TO_REPAY);

        let caller = self.blockchain().get_caller();
        let paid = if from_savings {
            let target = if amount < debt_raw {
                amount.clone()
            } else {
                debt_raw.clone()
            };
            self.gather_from_savings(&caller, &line.borrow_asset, &target)
        } else {
            let (asset, payment) = self.call_value().egld_or_single_fungible_esdt();
            require!(asset == line.borrow_asset, ERROR_INVALID_ASSET);
            require!(payment > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

            if payment > debt_raw {
                // refund the overshoot before settling
                let refund = &payment - &debt_raw;
                self.send_tokens(&line.borrow_asset, &refund, &caller);
                debt_raw.clone()
            } else {
                payment
            }
        };
        require!(paid > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        // Interest first, then principal.
        let interest_raw = interest_now.into_raw_units().clone();
        let interest_paid = if paid < interest_raw {
            paid.clone()
        } else {
            interest_raw.clone()
        };
        let principal_paid = &paid - &interest_paid;

        line.interest_accrued_till_last_update =
            self.to_decimal(interest_raw - &interest_paid, line.borrow_decimals);
        line.principal -= self.to_decimal(principal_paid.clone(), line.borrow_decimals);
        line.last_principal_update_timestamp = self.blockchain().get_block_timestamp();

        self.send_tokens(&line.borrow_asset, &paid, &line.lender);

        mapper.set(&line);

        self.credit_line_repay_event(id, &interest_paid, &principal_paid);
    }
}
