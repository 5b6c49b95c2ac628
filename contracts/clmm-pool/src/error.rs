use soroban_sdk::contracterror;

/// Errors returned by the pool entry points.
///
/// Any error aborts the whole invocation: nothing is written and every
/// token movement made so far is rolled back by the host.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    /// `initialize` was already called
    AlreadyInitialized = 1,
    /// token0 must sort strictly before token1
    InvalidTokenOrder = 2,
    /// Tick spacing must be positive
    InvalidTickSpacing = 3,
    /// Initial price outside [MIN_SQRT_RATIO, MAX_SQRT_RATIO)
    InvalidPrice = 4,
    /// Initial tick does not match the initial price
    PriceTickMismatch = 5,
    /// Range not ordered, out of bounds or off the tick spacing
    InvalidTickRange = 6,
    /// Mint of zero liquidity
    ZeroLiquidity = 7,
    /// Liquidity would exceed the per-tick cap or overflow u128
    LiquidityOverflow = 8,
    /// Settlement left the pool short of what it was owed
    InsufficientInputAmount = 9,
    /// Swap of zero amount
    ZeroAmount = 10,
    /// Price limit on the wrong side of the current price or out of bounds
    InvalidPriceLimit = 11,
    /// Token amount does not fit the token interface's i128
    AmountOverflow = 12,
}
