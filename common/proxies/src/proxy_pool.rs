#![allow(dead_code)]
#![allow(clippy::all)]

use multiversx_sc::proxy_imports::*;

pub struct PooledLoanProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for PooledLoanProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = PooledLoanProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        PooledLoanProxyMethods { wrapped_tx: tx }
    }
}

pub struct PooledLoanProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> PooledLoanProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<EgldOrEsdtTokenIdentifier<Env::Api>>,
        Arg2: ProxyArg<usize>,
        Arg3: ProxyArg<EgldOrEsdtTokenIdentifier<Env::Api>>,
        Arg4: ProxyArg<usize>,
        Arg5: ProxyArg<ManagedAddress<Env::Api>>,
        Arg6: ProxyArg<BigUint<Env::Api>>,
        Arg7: ProxyArg<BigUint<Env::Api>>,
        Arg8: ProxyArg<BigUint<Env::Api>>,
        Arg9: ProxyArg<BigUint<Env::Api>>,
        Arg10: ProxyArg<u64>,
        Arg11: ProxyArg<u64>,
        Arg12: ProxyArg<u64>,
        Arg13: ProxyArg<u64>,
        Arg14: ProxyArg<common_structs::ProtocolParams<Env::Api>>,
    >(
        self,
        borrower: Arg0,
        borrow_asset: Arg1,
        borrow_decimals: Arg2,
        collateral_asset: Arg3,
        collateral_decimals: Arg4,
        collateral_strategy: Arg5,
        pool_size: Arg6,
        borrow_rate: Arg7,
        ideal_collateral_ratio: Arg8,
        min_borrow_fraction: Arg9,
        collection_period: Arg10,
        loan_withdrawal_duration: Arg11,
        repayment_interval: Arg12,
        no_of_repayment_intervals: Arg13,
        protocol_params: Arg14,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&borrower)
            .argument(&borrow_asset)
            .argument(&borrow_decimals)
            .argument(&collateral_asset)
            .argument(&collateral_decimals)
            .argument(&collateral_strategy)
            .argument(&pool_size)
            .argument(&borrow_rate)
            .argument(&ideal_collateral_ratio)
            .argument(&min_borrow_fraction)
            .argument(&collection_period)
            .argument(&loan_withdrawal_duration)
            .argument(&repayment_interval)
            .argument(&no_of_repayment_intervals)
            .argument(&protocol_params)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> PooledLoanProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn lend<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        receiver: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("lend")
            .argument(&receiver)
            .original_result()
    }

    pub fn deposit_collateral(
        self,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("depositCollateral")
            .original_result()
    }

    pub fn withdraw_borrowed_amount(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawBorrowedAmount")
            .original_result()
    }

    pub fn cancel_pool(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("cancelPool")
            .original_result()
    }

    pub fn terminate_pool(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("terminatePool")
            .original_result()
    }

    pub fn close_pool(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("closePool")
            .original_result()
    }

    pub fn withdraw_liquidity(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawLiquidity")
            .original_result()
    }

    pub fn transfer_pool_tokens<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        to: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("transferPoolTokens")
            .argument(&to)
            .argument(&amount)
            .original_result()
    }

    pub fn request_margin_call(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("requestMarginCall")
            .original_result()
    }

    pub fn add_collateral_in_margin_call<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        lender: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("addCollateralInMarginCall")
            .argument(&lender)
            .original_result()
    }

    pub fn liquidate_lender<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        lender: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("liquidateLender")
            .argument(&lender)
            .original_result()
    }

    pub fn liquidate_pool(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("liquidatePool")
            .original_result()
    }

    pub fn repay_amount(
        self,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("repayAmount")
            .original_result()
    }

    pub fn repay_principal(
        self,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("repayPrincipal")
            .original_result()
    }

    pub fn request_extension(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("requestExtension")
            .original_result()
    }

    pub fn vote_on_extension(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("voteOnExtension")
            .original_result()
    }

    pub fn pool_status(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, common_structs::PoolStatus> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPoolStatus")
            .original_result()
    }

    pub fn total_supply(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalSupply")
            .original_result()
    }

    pub fn pool_token_balance<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        lender: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPoolTokenBalance")
            .argument(&lender)
            .original_result()
    }

    pub fn principal(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPrincipal")
            .original_result()
    }

    pub fn interest_accrued(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getInterestAccrued")
            .original_result()
    }

    pub fn current_debt(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCurrentDebt")
            .original_result()
    }

    pub fn current_collateral_ratio(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCurrentCollateralRatio")
            .original_result()
    }

    pub fn base_collateral_shares(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBaseCollateralShares")
            .original_result()
    }

    pub fn next_instalment_deadline(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getNextInstalmentDeadline")
            .original_result()
    }

    pub fn interest_due_till_instalment_deadline(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getInterestDueTillInstalmentDeadline")
            .original_result()
    }

    pub fn interest_per_second(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getInterestPerSecond")
            .original_result()
    }

    pub fn lender_claim_funds(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLenderClaimFunds")
            .original_result()
    }

    pub fn seized_collateral_shares(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSeizedCollateralShares")
            .original_result()
    }
}
