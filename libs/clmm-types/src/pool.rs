use soroban_sdk::{contracttype, Address, U256};

/// Price state of the pool, rewritten on every swap and in-range mint
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    /// sqrt(token1/token0) as Q64.96
    pub sqrt_price_x96: U256,
    /// Greatest tick at or below the price
    pub tick: i32,
    /// Sum of liquidity over ranges containing `tick`
    pub liquidity: u128,
}

impl PoolState {
    pub fn new(sqrt_price_x96: U256, tick: i32) -> Self {
        Self {
            sqrt_price_x96,
            tick,
            liquidity: 0,
        }
    }
}

/// Fixed at `initialize`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// Sorts strictly before token1
    pub token0: Address,
    pub token1: Address,
    /// Position boundaries must be multiples of this
    pub tick_spacing: i32,
    /// Cap on `liquidity_gross` of any single tick
    pub max_liquidity_per_tick: u128,
}

// ============================================================================
// SWAP COMPUTATION TYPES
// The swap is computed without touching storage, settled, then committed.
// ============================================================================

/// Validated swap request
#[derive(Clone, Debug)]
pub struct SwapParams {
    /// token0 in, token1 out
    pub zero_for_one: bool,
    /// Sign selects the mode: positive exact input, negative exact output
    pub amount_specified: i128,
    /// Price the swap may not move past
    pub sqrt_price_limit_x96: U256,
}

/// Outcome of walking the curve, before anything is written
#[derive(Clone, Debug)]
pub struct SwapComputation {
    /// Final amount of token0 (positive = pool receives, negative = pool pays)
    pub amount0: i128,
    /// Final amount of token1 (positive = pool receives, negative = pool pays)
    pub amount1: i128,
    pub sqrt_price_x96: U256,
    pub tick: i32,
    pub liquidity: u128,
    /// Number of active ticks crossed
    pub ticks_crossed: u32,
}
