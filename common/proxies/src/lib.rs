#![no_std]

pub mod proxy_credit_line;
pub mod proxy_pool;
pub mod proxy_pool_factory;
pub mod proxy_price_feed;
pub mod proxy_strategy;
pub mod proxy_strategy_registry;
