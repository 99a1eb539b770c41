multiversx_sc::imports!();

use common_errors::{ERROR_ASSET_DECIMALS_NOT_SET, ERROR_NO_PRICE_FEED, ERROR_ZERO_PRICE};
use common_structs::PriceFeedEntry;

use crate::storage;

#[multiversx_sc::module]
pub trait ViewsModule: storage::StorageModule {
    /// Latest registered price for the pair. Fails closed when the pair has
    /// no feed or the stored price is zero.
    #[view(getLatestPrice)]
    fn latest_price(
        &self,
        base: EgldOrEsdtTokenIdentifier,
        quote: EgldOrEsdtTokenIdentifier,
    ) -> PriceFeedEntry<Self::Api> {
        let mapper = self.price_feed(&base, &quote);
        require!(!mapper.is_empty(), ERROR_NO_PRICE_FEED);

        let entry = mapper.get();
        require!(entry.price > 0, ERROR_ZERO_PRICE);

        entry
    }

    #[view(hasPriceFeed)]
    fn has_price_feed(
        &self,
        base: EgldOrEsdtTokenIdentifier,
        quote: EgldOrEsdtTokenIdentifier,
    ) -> bool {
        !self.price_feed(&base, &quote).is_empty()
            && !self.asset_decimals(&base).is_empty()
            && !self.asset_decimals(&quote).is_empty()
    }

    /// Converts `amount_in` of `asset_in` into `asset_out` units using the
    /// registered feed and the decimals of both assets.
    ///
    /// Rounds down at the single final division, so converting back and
    /// forth can only lose dust, never create it.
    #[view(getEquivalentTokens)]
    fn get_equivalent_tokens(
        &self,
        asset_in: EgldOrEsdtTokenIdentifier,
        asset_out: EgldOrEsdtTokenIdentifier,
        amount_in: BigUint,
    ) -> BigUint {
        if asset_in == asset_out {
            return amount_in;
        }

        let feed = self.latest_price(asset_in.clone(), asset_out.clone());
        let decimals_in = self.require_asset_decimals(&asset_in);
        let decimals_out = self.require_asset_decimals(&asset_out);

        amount_in * feed.price * BigUint::from(10u64).pow(decimals_out)
            / BigUint::from(10u64).pow(feed.decimals)
            / BigUint::from(10u64).pow(decimals_in)
    }

    fn require_asset_decimals(&self, asset: &EgldOrEsdtTokenIdentifier) -> u32 {
        let mapper = self.asset_decimals(asset);
        require!(!mapper.is_empty(), ERROR_ASSET_DECIMALS_NOT_SET);
        mapper.get()
    }
}
