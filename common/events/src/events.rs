#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub use common_structs::*;

/// Every committed state transition emits exactly one event, synchronously,
/// so external indexers can rebuild the full lifecycle of a credit line or
/// pool from the log alone.
#[multiversx_sc::module]
pub trait EventsModule {
    // Credit line lifecycle

    #[event("credit_line_requested")]
    fn credit_line_requested_event(
        &self,
        #[indexed] id: u64,
        #[indexed] lender: &ManagedAddress,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] borrow_asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] collateral_asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] borrow_limit: &BigUint,
    );

    #[event("credit_line_accepted")]
    fn credit_line_accepted_event(&self, #[indexed] id: u64, #[indexed] by: &ManagedAddress);

    #[event("credit_line_closed")]
    fn credit_line_closed_event(&self, #[indexed] id: u64, #[indexed] by: &ManagedAddress);

    #[event("credit_line_liquidated")]
    fn credit_line_liquidated_event(
        &self,
        #[indexed] id: u64,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] collateral_seized: &BigUint,
        #[indexed] liquidator_reward: &BigUint,
    );

    #[event("credit_line_borrow")]
    fn credit_line_borrow_event(
        &self,
        #[indexed] id: u64,
        #[indexed] amount: &BigUint,
        #[indexed] protocol_fee: &BigUint,
    );

    #[event("credit_line_repay")]
    fn credit_line_repay_event(
        &self,
        #[indexed] id: u64,
        #[indexed] interest_repaid: &BigUint,
        #[indexed] principal_repaid: &BigUint,
    );

    #[event("collateral_deposited")]
    fn collateral_deposited_event(
        &self,
        #[indexed] id: u64,
        #[indexed] strategy: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] shares: &BigUint,
    );

    #[event("collateral_withdrawn")]
    fn collateral_withdrawn_event(&self, #[indexed] id: u64, #[indexed] amount: &BigUint);

    #[event("savings_deposited")]
    fn savings_deposited_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] strategy: &ManagedAddress,
        #[indexed] shares: &BigUint,
    );

    #[event("savings_withdrawn")]
    fn savings_withdrawn_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] strategy: &ManagedAddress,
        #[indexed] shares: &BigUint,
    );

    // Pool lifecycle

    #[event("pool_created")]
    fn pool_created_event(
        &self,
        #[indexed] pool: &ManagedAddress,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] borrow_asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] collateral_asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] pool_size: &BigUint,
    );

    #[event("liquidity_supplied")]
    fn liquidity_supplied_event(
        &self,
        #[indexed] lender: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] total_supply: &BigUint,
    );

    #[event("liquidity_withdrawn")]
    fn liquidity_withdrawn_event(
        &self,
        #[indexed] lender: &ManagedAddress,
        #[indexed] borrow_asset_amount: &BigUint,
        #[indexed] collateral_amount: &BigUint,
    );

    #[event("borrowed_amount_withdrawn")]
    fn borrowed_amount_withdrawn_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] protocol_fee: &BigUint,
    );

    #[event("pool_cancelled")]
    fn pool_cancelled_event(&self, #[indexed] by: &ManagedAddress, #[indexed] penalty_shares: &BigUint);

    #[event("pool_terminated")]
    fn pool_terminated_event(&self, #[indexed] by: &ManagedAddress);

    #[event("pool_closed")]
    fn pool_closed_event(&self, #[indexed] collateral_returned: &BigUint);

    #[event("pool_defaulted")]
    fn pool_defaulted_event(
        &self,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] collateral_seized: &BigUint,
    );

    #[event("pool_tokens_transferred")]
    fn pool_tokens_transferred_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("pool_collateral_deposited")]
    fn pool_collateral_deposited_event(
        &self,
        #[indexed] depositor: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] shares: &BigUint,
    );

    #[event("margin_call_requested")]
    fn margin_call_requested_event(
        &self,
        #[indexed] lender: &ManagedAddress,
        #[indexed] deadline: u64,
    );

    #[event("margin_call_closed")]
    fn margin_call_closed_event(&self, #[indexed] lender: &ManagedAddress);

    #[event("lender_liquidated")]
    fn lender_liquidated_event(
        &self,
        #[indexed] lender: &ManagedAddress,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] collateral_to_lender: &BigUint,
        #[indexed] liquidator_reward: &BigUint,
    );

    #[event("extension_requested")]
    fn extension_requested_event(&self, #[indexed] vote_end_time: u64);

    #[event("extension_vote")]
    fn extension_vote_event(&self, #[indexed] lender: &ManagedAddress, #[indexed] weight: &BigUint);

    #[event("extension_granted")]
    fn extension_granted_event(&self, #[indexed] next_instalment_deadline: u64);

    #[event("repayment")]
    fn repayment_event(
        &self,
        #[indexed] interest_repaid: &BigUint,
        #[indexed] penalty_paid: &BigUint,
        #[indexed] principal_repaid: &BigUint,
    );

    // Price feed

    #[event("price_feed_updated")]
    fn price_feed_updated_event(
        &self,
        #[indexed] base: &EgldOrEsdtTokenIdentifier,
        #[indexed] quote: &EgldOrEsdtTokenIdentifier,
        #[indexed] price: &BigUint,
        #[indexed] decimals: u32,
    );

    // Strategy registry

    #[event("strategy_whitelisted")]
    fn strategy_whitelisted_event(&self, #[indexed] strategy: &ManagedAddress);

    #[event("strategy_removed")]
    fn strategy_removed_event(&self, #[indexed] strategy: &ManagedAddress);
}
