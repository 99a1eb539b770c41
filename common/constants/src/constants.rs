#![no_std]

/// One unit (1.0 / 100%) in the protocol's fixed-point representation.
/// Rates, ratios and fractions all live at this scale.
pub const SCALE: u128 = 1_000_000_000_000_000_000_000_000_000_000;
pub const SCALE_PRECISION: usize = 30;

pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Maximum protocol fee deducted from a borrow disbursement (10%).
pub const MAX_PROTOCOL_FEE_FRACTION: u128 = SCALE / 10;

/// Maximum share of seized collateral paid to a liquidation caller (15%).
pub const MAX_LIQUIDATOR_REWARD_FRACTION: u128 = SCALE * 15 / 100;

/// Bounds for the extension vote pass ratio (simple majority up to 100%).
pub const MIN_VOTE_PASS_RATIO: u128 = SCALE / 2;
pub const MAX_VOTE_PASS_RATIO: u128 = SCALE;

/// Grace window for a missed instalment, as a fraction of the repayment
/// interval. May not exceed one full interval.
pub const MAX_GRACE_PERIOD_FRACTION: u128 = SCALE;
