multiversx_sc::imports!();

use common_structs::{PoolConfig, PoolStatus, ProtocolParams};

/// Storage mappers for the pool's per-loan state. Immutable terms live in
/// `config`; everything else is mutated through the `Cache` snapshot.
#[multiversx_sc::module]
pub trait StorageModule {
    #[view(getPoolConfig)]
    #[storage_mapper("config")]
    fn config(&self) -> SingleValueMapper<PoolConfig<Self::Api>>;

    #[view(getProtocolParams)]
    #[storage_mapper("params")]
    fn params(&self) -> SingleValueMapper<ProtocolParams<Self::Api>>;

    #[view(getPoolStatus)]
    #[storage_mapper("status")]
    fn status(&self) -> SingleValueMapper<PoolStatus>;

    /// Total pool tokens minted, 1:1 with lent borrow-asset units.
    #[storage_mapper("total_supply")]
    fn total_supply(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[storage_mapper("pool_token_balance")]
    fn pool_token_balance(
        &self,
        lender: &ManagedAddress,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[view(getLenders)]
    #[storage_mapper("lenders")]
    fn lenders(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Collateral locked by the borrower, in strategy shares.
    #[storage_mapper("base_collateral_shares")]
    fn base_collateral_shares(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Extra collateral brought in response to a lender's margin call, per
    /// lender, merged into the base once the call is answered.
    #[storage_mapper("margin_collateral_shares")]
    fn margin_collateral_shares(
        &self,
        lender: &ManagedAddress,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[storage_mapper("margin_call_deadline")]
    fn margin_call_deadline(&self, lender: &ManagedAddress) -> SingleValueMapper<u64>;

    #[view(getOpenMarginCalls)]
    #[storage_mapper("margin_calls")]
    fn margin_calls(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("principal")]
    fn principal(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[storage_mapper("principal_repaid")]
    fn principal_repaid(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[storage_mapper("interest_repaid")]
    fn interest_repaid(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Interest accrued up to `last_update_timestamp`, snapshotted before
    /// every principal change so accrual stays monotonic.
    #[storage_mapper("interest_till_last_update")]
    fn interest_till_last_update(
        &self,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[view(getLastUpdateTimestamp)]
    #[storage_mapper("last_update_timestamp")]
    fn last_update_timestamp(&self) -> SingleValueMapper<u64>;

    #[view(getLoanStartTime)]
    #[storage_mapper("loan_start_time")]
    fn loan_start_time(&self) -> SingleValueMapper<u64>;

    #[view(getLoanWithdrawalDeadline)]
    #[storage_mapper("loan_withdrawal_deadline")]
    fn loan_withdrawal_deadline(&self) -> SingleValueMapper<u64>;

    /// Seconds added to the repayment schedule by granted extensions.
    #[view(getExtensionShift)]
    #[storage_mapper("extension_shift")]
    fn extension_shift(&self) -> SingleValueMapper<u64>;

    /// End of the vote window of the extension currently being voted on.
    /// Zero when no vote is in progress.
    #[view(getExtensionVoteEndTime)]
    #[storage_mapper("extension_vote_end_time")]
    fn extension_vote_end_time(&self) -> SingleValueMapper<u64>;

    #[view(getExtensionSupport)]
    #[storage_mapper("extension_support")]
    fn extension_support(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[storage_mapper("extension_round")]
    fn extension_round(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("extension_voted")]
    fn extension_voted(&self, round: u64) -> UnorderedSetMapper<ManagedAddress>;

    /// Deadline covered by the last granted extension; a new extension can
    /// only be requested after this has passed.
    #[storage_mapper("last_extension_end")]
    fn last_extension_end(&self) -> SingleValueMapper<u64>;

    /// Borrow-asset funds claimable by lenders pro rata after settlement.
    #[storage_mapper("lender_claim_funds")]
    fn lender_claim_funds(&self) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Collateral shares seized for lenders (default or cancellation
    /// penalty), claimable pro rata.
    #[storage_mapper("seized_collateral_shares")]
    fn seized_collateral_shares(
        &self,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;
}
