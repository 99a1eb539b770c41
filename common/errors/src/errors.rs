#![no_std]

// Credit line

pub static ERROR_SAME_LENDER_BORROWER: &[u8] = b"Lender and Borrower cannot be same addresses";

pub static ERROR_CREDIT_LINE_NOT_ACTIVE: &[u8] = b"CreditLine not active";

pub static ERROR_CREDIT_LINE_NOT_REQUESTED: &[u8] = b"CreditLine not in requested state.";

pub static ERROR_NOT_COUNTER_PARTY: &[u8] =
    b"Only the counter-party of the request can accept the credit line.";

pub static ERROR_ONLY_BORROWER: &[u8] = b"Only the borrower can perform this action.";

pub static ERROR_ONLY_LENDER: &[u8] = b"Only the lender can perform this action.";

pub static ERROR_NOT_PARTICIPANT: &[u8] = b"Caller is not part of this credit line.";

pub static ERROR_BORROW_LIMIT_EXCEEDED: &[u8] = b"Amount exceeds the borrow limit.";

pub static ERROR_COLLATERAL_RATIO_BELOW_IDEAL: &[u8] = b"Collateral ratio cant go below ideal";

pub static ERROR_COLLATERAL_RATIO_WITHDRAW: &[u8] =
    b"collateral ratio doesn't allow to withdraw the amount";

pub static ERROR_COLLATERAL_RATIO_BELOW_LIQUIDATION: &[u8] =
    b"Collateral ratio has to be above the liquidation threshold.";

pub static ERROR_PRINCIPAL_NOT_REPAID: &[u8] = b"Principal is not fully repaid.";

pub static ERROR_NOT_LIQUIDATABLE: &[u8] =
    b"Collateral ratio is above the liquidation threshold.";

pub static ERROR_AUTO_LIQUIDATION_DISABLED: &[u8] =
    b"Auto liquidation is not enabled for this credit line.";

pub static ERROR_INSUFFICIENT_COLLATERAL: &[u8] = b"Amount exceeds the deposited collateral.";

pub static ERROR_INSUFFICIENT_SAVINGS: &[u8] = b"Not enough savings balance for this account.";

pub static ERROR_INSUFFICIENT_LENDER_BALANCE: &[u8] =
    b"Lender does not have enough savings to cover the borrow.";

pub static ERROR_NOTHING_TO_REPAY: &[u8] = b"No outstanding debt to repay.";

// Pool

pub static ERROR_NOT_COLLECTION_STAGE: &[u8] = b"Pool not in collection stage.";

pub static ERROR_POOL_NOT_ACTIVE: &[u8] = b"Pool not active.";

pub static ERROR_POOL_SIZE_EXCEEDED: &[u8] = b"Lent amount would exceed the pool size.";

pub static ERROR_BELOW_MIN_BORROW_FRACTION: &[u8] = b"amount below minimum borrow fraction";

pub static ERROR_LOAN_NOT_STARTED: &[u8] = b"Loan start time not reached yet.";

pub static ERROR_WITHDRAW_DEADLINE_PASSED: &[u8] = b"Loan withdrawal deadline has passed.";

pub static ERROR_CANNOT_CANCEL: &[u8] = b"Pool can no longer be cancelled.";

pub static ERROR_CANCEL_DEADLINE_NOT_REACHED: &[u8] =
    b"Loan withdrawal deadline not reached yet.";

pub static ERROR_LIQUIDITY_LOCKED: &[u8] =
    b"Liquidity cannot be withdrawn while the loan is running.";

pub static ERROR_NO_POOL_TOKENS: &[u8] = b"No pool tokens held by this lender.";

pub static ERROR_POOL_TOKENS_NOT_TRANSFERABLE: &[u8] =
    b"Pool tokens are no longer transferable.";

pub static ERROR_MARGIN_CALL_NOT_ELIGIBLE: &[u8] =
    b"Collateral ratio is not below the ideal ratio.";

pub static ERROR_MARGIN_CALL_ALREADY_ACTIVE: &[u8] =
    b"Margin call already active for this lender.";

pub static ERROR_MARGIN_CALL_STILL_OPEN: &[u8] = b"Margin call window has not elapsed yet.";

pub static ERROR_NO_MARGIN_CALL: &[u8] = b"No active margin call for this lender.";

pub static ERROR_MARGIN_CALL_OPEN: &[u8] =
    b"Action not allowed while a margin call is open for this lender.";

pub static ERROR_EXTENSION_ALREADY_ACTIVE: &[u8] =
    b"An extension is already active or being voted on.";

pub static ERROR_EXTENSION_NOT_REQUESTED: &[u8] = b"No extension vote in progress.";

pub static ERROR_EXTENSION_VOTE_CLOSED: &[u8] = b"Extension vote period has ended.";

pub static ERROR_ALREADY_VOTED: &[u8] = b"Lender has already voted on this extension.";

pub static ERROR_REPAYMENT_NOT_DEFAULTED: &[u8] =
    b"Repayment is not overdue beyond the grace period.";

pub static ERROR_INTEREST_NOT_SETTLED: &[u8] =
    b"Interest due for the current instalment is not fully repaid.";

pub static ERROR_LOAN_NOT_REPAID: &[u8] = b"Loan is not fully repaid.";

// Factory / registry / price feed

pub static ERROR_TEMPLATE_EMPTY: &[u8] = b"Pool contract template is empty.";

pub static ERROR_INVALID_FRACTION: &[u8] = b"Fraction must not exceed 100%.";

pub static ERROR_INVALID_DURATION: &[u8] = b"Duration must be greater than zero.";

pub static ERROR_POOL_NOT_TRACKED: &[u8] = b"Pool not deployed by this factory.";

pub static ERROR_NO_PRICE_FEED: &[u8] = b"Price feed not registered.";

pub static ERROR_ZERO_PRICE: &[u8] = b"Price must be greater than zero.";

pub static ERROR_ASSET_DECIMALS_NOT_SET: &[u8] = b"Asset decimals not registered.";

pub static ERROR_STRATEGY_NOT_WHITELISTED: &[u8] = b"Strategy not whitelisted.";

pub static ERROR_STRATEGY_ALREADY_WHITELISTED: &[u8] = b"Strategy already whitelisted.";

pub static ERROR_INSUFFICIENT_SHARES: &[u8] = b"Not enough shares locked for this account.";

// Shared

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_ADDRESS_IS_ZERO: &[u8] = b"Address is zero.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset provided.";

pub static ERROR_PAYMENT_MISMATCH: &[u8] = b"Payment does not match the requested amount.";
