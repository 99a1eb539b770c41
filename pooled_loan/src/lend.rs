multiversx_sc::imports!();

use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_LIQUIDITY_LOCKED, ERROR_MARGIN_CALL_OPEN,
    ERROR_NOT_COLLECTION_STAGE, ERROR_NO_POOL_TOKENS, ERROR_POOL_SIZE_EXCEEDED,
    ERROR_POOL_TOKENS_NOT_TRANSFERABLE,
};
use common_structs::PoolStatus;

use crate::{cache::Cache, storage, utils};

#[multiversx_sc::module]
pub trait LendModule:
    storage::StorageModule
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestAccrual
{
    /// Supplies borrow-asset liquidity during the collection stage, minting
    /// pool tokens 1:1 to `receiver`.
    #[payable("*")]
    #[endpoint(lend)]
    fn lend(&self, receiver: ManagedAddress) {
        let mut cache = Cache::new(self);
        require!(
            cache.status == PoolStatus::Collection && cache.timestamp < cache.loan_start_time,
            ERROR_NOT_COLLECTION_STAGE
        );

        let amount =
            self.get_payment_amount(&cache.config.borrow_asset, cache.config.borrow_decimals);
        require!(amount > cache.zero, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        require!(
            cache.total_supply.clone() + amount.clone() <= cache.config.pool_size,
            ERROR_POOL_SIZE_EXCEEDED
        );

        cache.total_supply += &amount;
        let balance = self.read_pool_token_balance(&cache, &receiver);
        self.pool_token_balance(&receiver).set(balance + amount.clone());
        self.lenders().insert(receiver.clone());

        self.liquidity_supplied_event(
            &receiver,
            amount.into_raw_units(),
            cache.total_supply.into_raw_units(),
        );
    }

    /// Returns a lender's stake after settlement: a pro-rata share of the
    /// claimable borrow-asset funds plus any seized collateral. Burns the
    /// caller's pool tokens.
    #[endpoint(withdrawLiquidity)]
    fn withdraw_liquidity(&self) {
        let mut cache = Cache::new(self);
        let caller = self.blockchain().get_caller();

        let balance = self.read_pool_token_balance(&cache, &caller);
        require!(balance > cache.zero, ERROR_NO_POOL_TOKENS);
        require!(
            matches!(
                cache.status,
                PoolStatus::Cancelled | PoolStatus::Closed | PoolStatus::Defaulted
            ),
            ERROR_LIQUIDITY_LOCKED
        );

        let funds_share = self.pro_rata(&cache.lender_claim_funds, &balance, &cache.total_supply);
        let collateral_share =
            self.pro_rata(&cache.seized_collateral_shares, &balance, &cache.total_supply);

        cache.lender_claim_funds -= &funds_share;
        cache.seized_collateral_shares -= &collateral_share;
        cache.total_supply -= &balance;
        self.pool_token_balance(&caller).set(cache.zero.clone());
        self.lenders().swap_remove(&caller);

        self.send_asset(&cache.config.borrow_asset, &funds_share, &caller);
        let collateral_tokens = self.unlock_collateral(&cache, &collateral_share);
        self.send_asset(&cache.config.collateral_asset, &collateral_tokens, &caller);

        self.liquidity_withdrawn_event(
            &caller,
            funds_share.into_raw_units(),
            collateral_tokens.into_raw_units(),
        );
    }

    /// Pool tokens stay transferable while the loan is collecting or
    /// running; once the pool reaches a terminal state they only entitle the
    /// holder to settlement claims.
    #[endpoint(transferPoolTokens)]
    fn transfer_pool_tokens(&self, to: ManagedAddress, amount: BigUint) {
        let cache = Cache::new(self);
        require!(
            matches!(cache.status, PoolStatus::Collection | PoolStatus::Active),
            ERROR_POOL_TOKENS_NOT_TRANSFERABLE
        );

        let caller = self.blockchain().get_caller();
        require!(
            !self.margin_calls().contains(&caller),
            ERROR_MARGIN_CALL_OPEN
        );

        let amount = self.to_decimal(amount, cache.config.borrow_decimals);
        require!(amount > cache.zero, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let sender_balance = self.read_pool_token_balance(&cache, &caller);
        require!(sender_balance >= amount, ERROR_NO_POOL_TOKENS);

        self.pool_token_balance(&caller)
            .set(sender_balance - amount.clone());
        let receiver_balance = self.read_pool_token_balance(&cache, &to);
        self.pool_token_balance(&to)
            .set(receiver_balance + amount.clone());
        self.lenders().insert(to.clone());

        self.pool_tokens_transferred_event(&caller, &to, amount.into_raw_units());
    }
}
