multiversx_sc::imports!();

use common_structs::PriceFeedEntry;

#[multiversx_sc::module]
pub trait StorageModule {
    /// Registered feed for a (base, quote) pair. Empty means no feed.
    #[storage_mapper("price_feed")]
    fn price_feed(
        &self,
        base: &EgldOrEsdtTokenIdentifier,
        quote: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<PriceFeedEntry<Self::Api>>;

    /// Number of decimals of a registered asset.
    #[view(getAssetDecimals)]
    #[storage_mapper("asset_decimals")]
    fn asset_decimals(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<u32>;
}
