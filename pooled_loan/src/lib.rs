#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod borrow;
pub mod cache;
pub mod extension;
pub mod lend;
pub mod margin;
pub mod repayments;
pub mod storage;
pub mod utils;
pub mod views;

pub use common_errors::*;
pub use common_structs::*;

/// One pooled loan: a single borrower against many lenders. Deployed from a
/// template by the factory, which fixes the loan terms and a snapshot of the
/// protocol parameters at creation time.
#[multiversx_sc::contract]
pub trait PooledLoan:
    storage::StorageModule
    + utils::UtilsModule
    + lend::LendModule
    + borrow::BorrowModule
    + repayments::RepaymentsModule
    + margin::MarginModule
    + extension::ExtensionModule
    + views::ViewsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestAccrual
{
    #[init]
    #[allow(clippy::too_many_arguments)]
    fn init(
        &self,
        borrower: ManagedAddress,
        borrow_asset: EgldOrEsdtTokenIdentifier,
        borrow_decimals: usize,
        collateral_asset: EgldOrEsdtTokenIdentifier,
        collateral_decimals: usize,
        collateral_strategy: ManagedAddress,
        pool_size: BigUint,
        borrow_rate: BigUint,
        ideal_collateral_ratio: BigUint,
        min_borrow_fraction: BigUint,
        collection_period: u64,
        loan_withdrawal_duration: u64,
        repayment_interval: u64,
        no_of_repayment_intervals: u64,
        protocol_params: ProtocolParams<Self::Api>,
    ) {
        let timestamp = self.blockchain().get_block_timestamp();
        let loan_start_time = timestamp + collection_period;

        self.config().set(&PoolConfig {
            borrower,
            borrow_asset,
            borrow_decimals,
            collateral_asset,
            collateral_decimals,
            collateral_strategy,
            pool_size: self.to_decimal(pool_size, borrow_decimals),
            borrow_rate: self.to_decimal_scaled(borrow_rate),
            ideal_collateral_ratio: self.to_decimal_scaled(ideal_collateral_ratio),
            min_borrow_fraction: self.to_decimal_scaled(min_borrow_fraction),
            collection_period,
            loan_withdrawal_duration,
            repayment_interval,
            no_of_repayment_intervals,
        });
        self.params().set(&protocol_params);

        self.status().set(PoolStatus::Collection);
        self.loan_start_time().set(loan_start_time);
        self.loan_withdrawal_deadline()
            .set(loan_start_time + loan_withdrawal_duration);
        self.last_update_timestamp().set(timestamp);

        // Zero-init every decimal mapper so later reads decode cleanly.
        let borrow_zero = ManagedDecimal::from_raw_units(BigUint::zero(), borrow_decimals);
        let collateral_zero = ManagedDecimal::from_raw_units(BigUint::zero(), collateral_decimals);
        self.total_supply().set(&borrow_zero);
        self.principal().set(&borrow_zero);
        self.principal_repaid().set(&borrow_zero);
        self.interest_repaid().set(&borrow_zero);
        self.interest_till_last_update().set(&borrow_zero);
        self.lender_claim_funds().set(&borrow_zero);
        self.extension_support().set(&borrow_zero);
        self.base_collateral_shares().set(&collateral_zero);
        self.seized_collateral_shares().set(&collateral_zero);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
