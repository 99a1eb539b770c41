multiversx_sc::imports!();

use common_structs::PoolStatus;

use crate::{cache::Cache, repayments, storage, utils};

#[multiversx_sc::module]
pub trait ViewsModule:
    storage::StorageModule
    + utils::UtilsModule
    + repayments::RepaymentsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestAccrual
{
    #[view(getTotalSupply)]
    fn view_total_supply(&self) -> BigUint {
        self.total_supply().get().into_raw_units().clone()
    }

    #[view(getPoolTokenBalance)]
    fn view_pool_token_balance(&self, lender: ManagedAddress) -> BigUint {
        let cache = Cache::new(self);
        self.read_pool_token_balance(&cache, &lender)
            .into_raw_units()
            .clone()
    }

    #[view(getPrincipal)]
    fn view_principal(&self) -> BigUint {
        self.principal().get().into_raw_units().clone()
    }

    /// Total interest accrued on the outstanding principal up to now.
    #[view(getInterestAccrued)]
    fn view_interest_accrued(&self) -> BigUint {
        let cache = Cache::new(self);
        self.calculate_interest_accrued(
            &cache.principal_outstanding(),
            &cache.config.borrow_rate,
            &cache.interest_till_last_update,
            cache.last_update_timestamp,
            cache.timestamp,
        )
        .into_raw_units()
        .clone()
    }

    /// Outstanding principal plus unpaid interest, as of now.
    #[view(getCurrentDebt)]
    fn view_current_debt(&self) -> BigUint {
        let cache = Cache::new(self);
        self.current_debt(&cache).into_raw_units().clone()
    }

    /// Collateral value over debt, at protocol scale. Zero when there is
    /// no debt.
    #[view(getCurrentCollateralRatio)]
    fn view_current_collateral_ratio(&self) -> BigUint {
        let cache = Cache::new(self);
        let debt = self.current_debt(&cache);
        self.collateral_ratio_against(&cache, &debt)
            .into_raw_units()
            .clone()
    }

    #[view(getBaseCollateralShares)]
    fn view_base_collateral_shares(&self) -> BigUint {
        self.base_collateral_shares().get().into_raw_units().clone()
    }

    #[view(getSeizedCollateralShares)]
    fn view_seized_collateral_shares(&self) -> BigUint {
        self.seized_collateral_shares()
            .get()
            .into_raw_units()
            .clone()
    }

    #[view(getLenderClaimFunds)]
    fn view_lender_claim_funds(&self) -> BigUint {
        self.lender_claim_funds().get().into_raw_units().clone()
    }

    #[view(getNextInstalmentDeadline)]
    fn view_next_instalment_deadline(&self) -> u64 {
        let cache = Cache::new(self);
        if cache.status != PoolStatus::Active {
            return 0;
        }
        self.instalment_deadline(&cache, self.current_instalment(&cache))
    }

    #[view(getInterestDueTillInstalmentDeadline)]
    fn view_interest_due_till_instalment_deadline(&self) -> BigUint {
        let cache = Cache::new(self);
        if cache.status != PoolStatus::Active {
            return BigUint::zero();
        }
        self.interest_due_till_instalment(&cache, self.current_instalment(&cache))
            .into_raw_units()
            .clone()
    }

    #[view(getInterestPerSecond)]
    fn view_interest_per_second(&self) -> BigUint {
        let cache = Cache::new(self);
        self.calculate_interest_per_second(
            &cache.principal_outstanding(),
            &cache.config.borrow_rate,
        )
        .into_raw_units()
        .clone()
    }
}
