use common_structs::{PoolConfig, PoolStatus, ProtocolParams};

multiversx_sc::imports!();

/// Snapshot of the pool's mutable state, read once per endpoint and written
/// back in full when dropped. Together with the all-or-nothing call
/// semantics of the ledger this gives every operation transactional
/// validate-then-mutate behaviour.
pub struct Cache<'a, C>
where
    C: crate::storage::StorageModule,
{
    sc_ref: &'a C,
    pub status: PoolStatus,
    pub total_supply: ManagedDecimal<C::Api, NumDecimals>,
    pub principal: ManagedDecimal<C::Api, NumDecimals>,
    pub principal_repaid: ManagedDecimal<C::Api, NumDecimals>,
    pub interest_repaid: ManagedDecimal<C::Api, NumDecimals>,
    pub interest_till_last_update: ManagedDecimal<C::Api, NumDecimals>,
    pub last_update_timestamp: u64,
    pub base_collateral_shares: ManagedDecimal<C::Api, NumDecimals>,
    pub lender_claim_funds: ManagedDecimal<C::Api, NumDecimals>,
    pub seized_collateral_shares: ManagedDecimal<C::Api, NumDecimals>,
    pub extension_shift: u64,
    /// Read-only below.
    pub config: PoolConfig<C::Api>,
    pub params: ProtocolParams<C::Api>,
    pub loan_start_time: u64,
    pub loan_withdrawal_deadline: u64,
    pub timestamp: u64,
    pub zero: ManagedDecimal<C::Api, NumDecimals>,
    pub collateral_zero: ManagedDecimal<C::Api, NumDecimals>,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::StorageModule,
{
    pub fn new(sc_ref: &'a C) -> Self {
        let config = sc_ref.config().get();
        Cache {
            status: sc_ref.status().get(),
            total_supply: sc_ref.total_supply().get(),
            principal: sc_ref.principal().get(),
            principal_repaid: sc_ref.principal_repaid().get(),
            interest_repaid: sc_ref.interest_repaid().get(),
            interest_till_last_update: sc_ref.interest_till_last_update().get(),
            last_update_timestamp: sc_ref.last_update_timestamp().get(),
            base_collateral_shares: sc_ref.base_collateral_shares().get(),
            lender_claim_funds: sc_ref.lender_claim_funds().get(),
            seized_collateral_shares: sc_ref.seized_collateral_shares().get(),
            extension_shift: sc_ref.extension_shift().get(),
            params: sc_ref.params().get(),
            loan_start_time: sc_ref.loan_start_time().get(),
            loan_withdrawal_deadline: sc_ref.loan_withdrawal_deadline().get(),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
            zero: ManagedDecimal::from_raw_units(BigUint::zero(), config.borrow_decimals),
            collateral_zero: ManagedDecimal::from_raw_units(
                BigUint::zero(),
                config.collateral_decimals,
            ),
            config,
            sc_ref,
        }
    }

    pub fn principal_outstanding(&self) -> ManagedDecimal<C::Api, NumDecimals> {
        self.principal.clone() - self.principal_repaid.clone()
    }

    /// Interest owed and not yet repaid, as of the last accrual sync.
    pub fn interest_outstanding(&self) -> ManagedDecimal<C::Api, NumDecimals> {
        self.interest_till_last_update.clone() - self.interest_repaid.clone()
    }

    pub fn is_borrower(&self, caller: &ManagedAddress<C::Api>) -> bool {
        &self.config.borrower == caller
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::StorageModule,
{
    fn drop(&mut self) {
        // commit changes to storage for the mutable fields
        self.sc_ref.status().set(self.status);
        self.sc_ref.total_supply().set(&self.total_supply);
        self.sc_ref.principal().set(&self.principal);
        self.sc_ref.principal_repaid().set(&self.principal_repaid);
        self.sc_ref.interest_repaid().set(&self.interest_repaid);
        self.sc_ref
            .interest_till_last_update()
            .set(&self.interest_till_last_update);
        self.sc_ref
            .last_update_timestamp()
            .set(self.last_update_timestamp);
        self.sc_ref
            .base_collateral_shares()
            .set(&self.base_collateral_shares);
        self.sc_ref.lender_claim_funds().set(&self.lender_claim_funds);
        self.sc_ref
            .seized_collateral_shares()
            .set(&self.seized_collateral_shares);
        self.sc_ref.extension_shift().set(self.extension_shift);
    }
}
