#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum CreditLineStatus {
    Requested,
    Active,
    Closed,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PoolStatus {
    Collection,
    Active,
    Closed,
    Cancelled,
    Terminated,
    Defaulted,
}

/// Full state of a credit line. The request terms are immutable after
/// `request`; `status`, `principal`, the interest snapshot and the update
/// timestamp are the only fields mutated afterwards.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct CreditLine<M: ManagedTypeApi> {
    pub lender: ManagedAddress<M>,
    pub borrower: ManagedAddress<M>,
    pub borrow_asset: EgldOrEsdtTokenIdentifier<M>,
    pub collateral_asset: EgldOrEsdtTokenIdentifier<M>,
    pub borrow_decimals: usize,
    pub collateral_decimals: usize,
    pub borrow_limit: ManagedDecimal<M, NumDecimals>,
    pub borrow_rate: ManagedDecimal<M, NumDecimals>,
    pub collateral_ratio: ManagedDecimal<M, NumDecimals>,
    pub auto_liquidation: bool,
    pub requested_by_lender: bool,
    pub status: CreditLineStatus,
    pub principal: ManagedDecimal<M, NumDecimals>,
    pub interest_accrued_till_last_update: ManagedDecimal<M, NumDecimals>,
    pub last_principal_update_timestamp: u64,
}

impl<M: ManagedTypeApi> CreditLine<M> {
    pub fn is_active(&self) -> bool {
        self.status == CreditLineStatus::Active
    }

    /// The address expected to accept the request.
    pub fn counter_party(&self) -> &ManagedAddress<M> {
        if self.requested_by_lender {
            &self.borrower
        } else {
            &self.lender
        }
    }
}

/// Immutable terms of a pooled loan, fixed at pool creation.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct PoolConfig<M: ManagedTypeApi> {
    pub borrower: ManagedAddress<M>,
    pub borrow_asset: EgldOrEsdtTokenIdentifier<M>,
    pub borrow_decimals: usize,
    pub collateral_asset: EgldOrEsdtTokenIdentifier<M>,
    pub collateral_decimals: usize,
    pub collateral_strategy: ManagedAddress<M>,
    pub pool_size: ManagedDecimal<M, NumDecimals>,
    pub borrow_rate: ManagedDecimal<M, NumDecimals>,
    pub ideal_collateral_ratio: ManagedDecimal<M, NumDecimals>,
    pub min_borrow_fraction: ManagedDecimal<M, NumDecimals>,
    pub collection_period: u64,
    pub loan_withdrawal_duration: u64,
    pub repayment_interval: u64,
    pub no_of_repayment_intervals: u64,
}

/// Protocol-wide parameters, owned by the factory and copied into every pool
/// at deployment so a later parameter change never rewrites a live loan.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct ProtocolParams<M: ManagedTypeApi> {
    pub protocol_fee_fraction: ManagedDecimal<M, NumDecimals>,
    pub protocol_fee_collector: ManagedAddress<M>,
    pub cancel_penalty_fraction: ManagedDecimal<M, NumDecimals>,
    pub grace_penalty_fraction: ManagedDecimal<M, NumDecimals>,
    pub grace_period_fraction: ManagedDecimal<M, NumDecimals>,
    pub liquidator_reward_fraction: ManagedDecimal<M, NumDecimals>,
    pub vote_pass_ratio: ManagedDecimal<M, NumDecimals>,
    pub margin_call_duration: u64,
    pub extension_vote_duration: u64,
    pub price_feed: ManagedAddress<M>,
}

/// A registered price feed entry: price of one whole unit of the base asset
/// expressed in the quote asset, scaled by `10^decimals`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct PriceFeedEntry<M: ManagedTypeApi> {
    pub price: BigUint<M>,
    pub decimals: u32,
    pub updated_at: u64,
}
