use crate::error::PoolError;
use crate::storage::{get_position, set_position};
use clmm_types::{PositionInfo, PositionKey};
use soroban_sdk::Env;

/// Load a position, or a zero record if the owner never minted this range
pub fn get_or_create(env: &Env, key: &PositionKey) -> PositionInfo {
    get_position(env, key).unwrap_or_default()
}

/// Add liquidity to a position record in memory
pub fn add_liquidity(info: &mut PositionInfo, amount: u128) -> Result<(), PoolError> {
    info.liquidity = info
        .liquidity
        .checked_add(amount)
        .ok_or(PoolError::LiquidityOverflow)?;
    Ok(())
}

pub fn store(env: &Env, key: &PositionKey, info: &PositionInfo) {
    set_position(env, key, info);
}
