#![allow(dead_code)]
#![allow(clippy::all)]

use multiversx_sc::proxy_imports::*;

pub struct CreditLineProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for CreditLineProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = CreditLineProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        CreditLineProxyMethods { wrapped_tx: tx }
    }
}

pub struct CreditLineProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> CreditLineProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
        Arg3: ProxyArg<ManagedAddress<Env::Api>>,
        Arg4: ProxyArg<BigUint<Env::Api>>,
        Arg5: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        price_feed: Arg0,
        strategy_registry: Arg1,
        protocol_fee_fraction: Arg2,
        protocol_fee_collector: Arg3,
        liquidator_reward_fraction: Arg4,
        liquidation_threshold: Arg5,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&price_feed)
            .argument(&strategy_registry)
            .argument(&protocol_fee_fraction)
            .argument(&protocol_fee_collector)
            .argument(&liquidator_reward_fraction)
            .argument(&liquidation_threshold)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> CreditLineProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn request<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
        Arg3: ProxyArg<bool>,
        Arg4: ProxyArg<BigUint<Env::Api>>,
        Arg5: ProxyArg<EgldOrEsdtTokenIdentifier<Env::Api>>,
        Arg6: ProxyArg<usize>,
        Arg7: ProxyArg<EgldOrEsdtTokenIdentifier<Env::Api>>,
        Arg8: ProxyArg<usize>,
        Arg9: ProxyArg<bool>,
    >(
        self,
        counter_party: Arg0,
        borrow_limit: Arg1,
        borrow_rate: Arg2,
        auto_liquidation: Arg3,
        collateral_ratio: Arg4,
        borrow_asset: Arg5,
        borrow_decimals: Arg6,
        collateral_asset: Arg7,
        collateral_decimals: Arg8,
        request_as_lender: Arg9,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("request")
            .argument(&counter_party)
            .argument(&borrow_limit)
            .argument(&borrow_rate)
            .argument(&auto_liquidation)
            .argument(&collateral_ratio)
            .argument(&borrow_asset)
            .argument(&borrow_decimals)
            .argument(&collateral_asset)
            .argument(&collateral_decimals)
            .argument(&request_as_lender)
            .original_result()
    }

    pub fn accept<
        Arg0: ProxyArg<u64>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("accept")
            .argument(&id)
            .original_result()
    }

    pub fn deposit_savings<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        strategy: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("depositSavings")
            .argument(&strategy)
            .original_result()
    }

    pub fn withdraw_savings<
        Arg0: ProxyArg<EgldOrEsdtTokenIdentifier<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        asset: Arg0,
        strategy: Arg1,
        shares: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawSavings")
            .argument(&asset)
            .argument(&strategy)
            .argument(&shares)
            .original_result()
    }

    pub fn deposit_collateral<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
        Arg3: ProxyArg<bool>,
    >(
        self,
        id: Arg0,
        amount: Arg1,
        strategy: Arg2,
        from_savings: Arg3,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("depositCollateral")
            .argument(&id)
            .argument(&amount)
            .argument(&strategy)
            .argument(&from_savings)
            .original_result()
    }

    pub fn borrow<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        id: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("borrow")
            .argument(&id)
            .argument(&amount)
            .original_result()
    }

    pub fn repay<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<bool>,
    >(
        self,
        id: Arg0,
        amount: Arg1,
        from_savings: Arg2,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("repay")
            .argument(&id)
            .argument(&amount)
            .argument(&from_savings)
            .original_result()
    }

    pub fn withdraw_collateral<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<bool>,
    >(
        self,
        id: Arg0,
        amount: Arg1,
        to_savings: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawCollateral")
            .argument(&id)
            .argument(&amount)
            .argument(&to_savings)
            .original_result()
    }

    pub fn close<
        Arg0: ProxyArg<u64>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("close")
            .argument(&id)
            .original_result()
    }

    pub fn liquidate<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<bool>,
    >(
        self,
        id: Arg0,
        withdraw_collateral: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("liquidate")
            .argument(&id)
            .argument(&withdraw_collateral)
            .original_result()
    }

    pub fn credit_line<
        Arg0: ProxyArg<u64>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, common_structs::CreditLine<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCreditLine")
            .argument(&id)
            .original_result()
    }

    pub fn current_debt<
        Arg0: ProxyArg<u64>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCurrentDebt")
            .argument(&id)
            .original_result()
    }

    pub fn interest_accrued<
        Arg0: ProxyArg<u64>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("calculateInterestAccrued")
            .argument(&id)
            .original_result()
    }

    pub fn current_collateral_ratio<
        Arg0: ProxyArg<u64>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCurrentCollateralRatio")
            .argument(&id)
            .original_result()
    }

    pub fn total_collateral_tokens<
        Arg0: ProxyArg<u64>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalCollateralTokens")
            .argument(&id)
            .original_result()
    }

    pub fn borrowable_amount<
        Arg0: ProxyArg<u64>,
    >(
        self,
        id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBorrowableAmount")
            .argument(&id)
            .original_result()
    }

    pub fn line_collateral_shares<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        id: Arg0,
        strategy: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getLineCollateralShares")
            .argument(&id)
            .argument(&strategy)
            .original_result()
    }

    pub fn savings_shares<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<EgldOrEsdtTokenIdentifier<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        account: Arg0,
        asset: Arg1,
        strategy: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSavingsShares")
            .argument(&account)
            .argument(&asset)
            .argument(&strategy)
            .original_result()
    }
}
