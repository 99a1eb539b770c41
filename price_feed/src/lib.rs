#![no_std]

multiversx_sc::imports!();

pub mod storage;
pub mod views;

use common_errors::ERROR_ZERO_PRICE;

/// Admin-managed price oracle. Feeds are registered per (base, quote) asset
/// pair and read fail-closed: a missing or zero-priced entry reverts, it is
/// never silently substituted.
#[multiversx_sc::contract]
pub trait PriceFeed:
    storage::StorageModule + views::ViewsModule + common_events::EventsModule
{
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    /// Registers or updates the price of one whole unit of `base`, expressed
    /// in `quote` units and scaled by `10^decimals`.
    ///
    /// The entry is written through a single mapper so readers always see a
    /// complete (price, decimals, timestamp) triple.
    #[only_owner]
    #[endpoint(setPriceFeed)]
    fn set_price_feed(
        &self,
        base: EgldOrEsdtTokenIdentifier,
        quote: EgldOrEsdtTokenIdentifier,
        price: BigUint,
        decimals: u32,
    ) {
        require!(price > 0, ERROR_ZERO_PRICE);

        self.price_feed(&base, &quote).set(common_structs::PriceFeedEntry {
            price: price.clone(),
            decimals,
            updated_at: self.blockchain().get_block_timestamp(),
        });

        self.price_feed_updated_event(&base, &quote, &price, decimals);
    }

    /// Registers the number of decimals of an asset, needed to normalize
    /// amounts between asset pairs during conversion.
    #[only_owner]
    #[endpoint(setAssetDecimals)]
    fn set_asset_decimals(&self, asset: EgldOrEsdtTokenIdentifier, decimals: u32) {
        self.asset_decimals(&asset).set(decimals);
    }
}
