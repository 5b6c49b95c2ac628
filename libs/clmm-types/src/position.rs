use soroban_sdk::{contracttype, Address};

/// Identity of a liquidity position: one owner, one tick range
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionKey {
    pub owner: Address,
    pub tick_lower: i32,
    pub tick_upper: i32,
}

impl PositionKey {
    pub fn new(owner: Address, tick_lower: i32, tick_upper: i32) -> Self {
        Self {
            owner,
            tick_lower,
            tick_upper,
        }
    }
}

/// Position info stored in pool contract
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PositionInfo {
    /// Liquidity in this position
    pub liquidity: u128,
    /// Fee growth inside at last update (token0), Q128.128
    pub fee_growth_inside_0_last_x128: u128,
    /// Fee growth inside at last update (token1), Q128.128
    pub fee_growth_inside_1_last_x128: u128,
}

impl PositionInfo {
    pub fn new() -> Self {
        Self::default()
    }
}
