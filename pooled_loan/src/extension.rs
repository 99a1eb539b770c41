multiversx_sc::imports!();

use common_errors::{
    ERROR_ALREADY_VOTED, ERROR_EXTENSION_ALREADY_ACTIVE, ERROR_EXTENSION_NOT_REQUESTED,
    ERROR_EXTENSION_VOTE_CLOSED, ERROR_NO_POOL_TOKENS, ERROR_ONLY_BORROWER,
    ERROR_POOL_NOT_ACTIVE,
};
use common_structs::PoolStatus;

use crate::{cache::Cache, repayments, storage, utils};

/// Extension voting: the borrower asks for one extra repayment interval,
/// lenders vote with their pool-token weight, and a passed vote shifts the
/// schedule by exactly one interval.
#[multiversx_sc::module]
pub trait ExtensionModule:
    storage::StorageModule
    + utils::UtilsModule
    + repayments::RepaymentsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestAccrual
{
    #[endpoint(requestExtension)]
    fn request_extension(&self) {
        let cache = Cache::new(self);
        require!(cache.status == PoolStatus::Active, ERROR_POOL_NOT_ACTIVE);

        let caller = self.blockchain().get_caller();
        require!(cache.is_borrower(&caller), ERROR_ONLY_BORROWER);

        // One live extension at a time: no open vote, and the previously
        // granted extension must have lapsed.
        let vote_end = self.extension_vote_end_time().get();
        require!(
            vote_end == 0 || cache.timestamp > vote_end,
            ERROR_EXTENSION_ALREADY_ACTIVE
        );
        require!(
            cache.timestamp > self.last_extension_end().get(),
            ERROR_EXTENSION_ALREADY_ACTIVE
        );

        let round = self.extension_round().get() + 1;
        self.extension_round().set(round);
        self.extension_support().set(cache.zero.clone());
        let new_vote_end = cache.timestamp + cache.params.extension_vote_duration;
        self.extension_vote_end_time().set(new_vote_end);

        self.extension_requested_event(new_vote_end);
    }

    /// One vote per lender per request, weighted by pool-token holdings.
    /// The vote closes early the moment the pass ratio is reached.
    #[endpoint(voteOnExtension)]
    fn vote_on_extension(&self) {
        let mut cache = Cache::new(self);
        require!(cache.status == PoolStatus::Active, ERROR_POOL_NOT_ACTIVE);

        let vote_end = self.extension_vote_end_time().get();
        require!(vote_end != 0, ERROR_EXTENSION_NOT_REQUESTED);
        require!(cache.timestamp <= vote_end, ERROR_EXTENSION_VOTE_CLOSED);

        let caller = self.blockchain().get_caller();
        let balance = self.read_pool_token_balance(&cache, &caller);
        require!(balance > cache.zero, ERROR_NO_POOL_TOKENS);

        let round = self.extension_round().get();
        require!(
            self.extension_voted(round).insert(caller.clone()),
            ERROR_ALREADY_VOTED
        );

        let support = self.extension_support().get() + balance.clone();
        self.extension_support().set(support.clone());

        self.extension_vote_event(&caller, balance.into_raw_units());

        let threshold =
            self.calculate_fraction_of(&cache.total_supply, &cache.params.vote_pass_ratio);
        if support >= threshold {
            self.grant_extension(&mut cache);
        }
    }

    fn grant_extension(&self, cache: &mut Cache<Self>) {
        cache.extension_shift += cache.config.repayment_interval;
        self.extension_vote_end_time().set(0u64);

        // The extension is live until the shifted deadline passes; only
        // after that can another one be requested.
        let next_deadline =
            self.instalment_deadline(cache, self.current_instalment(cache));
        self.last_extension_end().set(next_deadline);

        self.extension_granted_event(next_deadline);
    }
}
