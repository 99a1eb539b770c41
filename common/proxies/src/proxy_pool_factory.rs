#![allow(dead_code)]
#![allow(clippy::all)]

use multiversx_sc::proxy_imports::*;

pub struct PoolFactoryProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for PoolFactoryProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = PoolFactoryProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        PoolFactoryProxyMethods { wrapped_tx: tx }
    }
}

pub struct PoolFactoryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, Gas> PoolFactoryProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
        Arg3: ProxyArg<BigUint<Env::Api>>,
        Arg4: ProxyArg<ManagedAddress<Env::Api>>,
        Arg5: ProxyArg<BigUint<Env::Api>>,
        Arg6: ProxyArg<BigUint<Env::Api>>,
        Arg7: ProxyArg<BigUint<Env::Api>>,
        Arg8: ProxyArg<BigUint<Env::Api>>,
        Arg9: ProxyArg<BigUint<Env::Api>>,
        Arg10: ProxyArg<u64>,
        Arg11: ProxyArg<u64>,
    >(
        self,
        pool_template: Arg0,
        price_feed: Arg1,
        strategy_registry: Arg2,
        protocol_fee_fraction: Arg3,
        protocol_fee_collector: Arg4,
        cancel_penalty_fraction: Arg5,
        grace_penalty_fraction: Arg6,
        grace_period_fraction: Arg7,
        liquidator_reward_fraction: Arg8,
        vote_pass_ratio: Arg9,
        margin_call_duration: Arg10,
        extension_vote_duration: Arg11,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&pool_template)
            .argument(&price_feed)
            .argument(&strategy_registry)
            .argument(&protocol_fee_fraction)
            .argument(&protocol_fee_collector)
            .argument(&cancel_penalty_fraction)
            .argument(&grace_penalty_fraction)
            .argument(&grace_period_fraction)
            .argument(&liquidator_reward_fraction)
            .argument(&vote_pass_ratio)
            .argument(&margin_call_duration)
            .argument(&extension_vote_duration)
            .original_result()
    }
}

#[rustfmt::skip]
impl<Env, From, To, Gas> PoolFactoryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn create_pool<
        Arg0: ProxyArg<EgldOrEsdtTokenIdentifier<Env::Api>>,
        Arg1: ProxyArg<usize>,
        Arg2: ProxyArg<EgldOrEsdtTokenIdentifier<Env::Api>>,
        Arg3: ProxyArg<usize>,
        Arg4: ProxyArg<ManagedAddress<Env::Api>>,
        Arg5: ProxyArg<BigUint<Env::Api>>,
        Arg6: ProxyArg<BigUint<Env::Api>>,
        Arg7: ProxyArg<BigUint<Env::Api>>,
        Arg8: ProxyArg<BigUint<Env::Api>>,
        Arg9: ProxyArg<u64>,
        Arg10: ProxyArg<u64>,
        Arg11: ProxyArg<u64>,
        Arg12: ProxyArg<u64>,
    >(
        self,
        borrow_asset: Arg0,
        borrow_decimals: Arg1,
        collateral_asset: Arg2,
        collateral_decimals: Arg3,
        collateral_strategy: Arg4,
        pool_size: Arg5,
        borrow_rate: Arg6,
        ideal_collateral_ratio: Arg7,
        min_borrow_fraction: Arg8,
        collection_period: Arg9,
        loan_withdrawal_duration: Arg10,
        repayment_interval: Arg11,
        no_of_repayment_intervals: Arg12,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createPool")
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
            .original_result()
    }

    pub fn terminate_pool<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        pool: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("terminatePool")
            .argument(&pool)
            .original_result()
    }

    pub fn update_protocol_params<
        Arg0: ProxyArg<BigUint<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
        Arg3: ProxyArg<BigUint<Env::Api>>,
        Arg4: ProxyArg<BigUint<Env::Api>>,
        Arg5: ProxyArg<BigUint<Env::Api>>,
        Arg6: ProxyArg<BigUint<Env::Api>>,
        Arg7: ProxyArg<u64>,
        Arg8: ProxyArg<u64>,
    >(
        self,
        protocol_fee_fraction: Arg0,
        protocol_fee_collector: Arg1,
        cancel_penalty_fraction: Arg2,
        grace_penalty_fraction: Arg3,
        grace_period_fraction: Arg4,
        liquidator_reward_fraction: Arg5,
        vote_pass_ratio: Arg6,
        margin_call_duration: Arg7,
        extension_vote_duration: Arg8,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("updateProtocolParams")
            .argument(&protocol_fee_fraction)
            .argument(&protocol_fee_collector)
            .argument(&cancel_penalty_fraction)
            .argument(&grace_penalty_fraction)
            .argument(&grace_period_fraction)
            .argument(&liquidator_reward_fraction)
            .argument(&vote_pass_ratio)
            .argument(&margin_call_duration)
            .argument(&extension_vote_duration)
            .original_result()
    }

    pub fn pools(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPools")
            .original_result()
    }
}
