use clmm_types::{PoolConfig, PoolState, PositionInfo, PositionKey, TickInfo};
use soroban_sdk::{contracttype, Env, IntoVal, TryFromVal, Val};

// ----------------------------------------------------------------------------
// Soroban resource limits
// ----------------------------------------------------------------------------
// - Write entries per tx: 50 entries / 132 KiB
// - Read entries per tx: 100 entries / 200 KiB
//
// Layout:
// - Config and State live in Instance storage (one entry, read every call)
// - Each tick, bitmap word and position is its own Persistent entry
// - Absent ticks and empty bitmap words are removed, positions are kept
//
// Mint writes at most 2 ticks + 2 bitmap words + 1 position + state.
// Swap only writes state, but every crossed tick and every bitmap word it
// visits is a read, so the number of crossings per swap is capped.
// ----------------------------------------------------------------------------

/// Maximum number of active ticks a single swap may cross.
/// A swap that would cross more stops early and returns a partial fill.
pub const MAX_TICK_CROSSINGS_PER_SWAP: u32 = 40;

/// Where each piece of pool data lives
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// PoolConfig, instance
    Config,
    /// PoolState, instance
    State,
    /// TickInfo by tick index, persistent
    Tick(i32),
    /// 128-tick bitmap word by word index, persistent
    TickBitmap(i32),
    /// PositionInfo by (owner, lower, upper), persistent
    Position(PositionKey),
}

// Ledgers: bump when under ~1 day left, out to ~30 days
const TTL_THRESHOLD: u32 = 17280;
const TTL_EXTEND_TO: u32 = 518400;

fn bump_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn read_instance<V: TryFromVal<Env, Val>>(env: &Env, key: &DataKey) -> V {
    bump_instance(env);
    env.storage()
        .instance()
        .get(key)
        .expect("Pool not initialized")
}

fn write_instance<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V) {
    env.storage().instance().set(key, value);
    bump_instance(env);
}

/// Read a persistent entry, keeping it alive if it exists
fn read_persistent<V: TryFromVal<Env, Val>>(env: &Env, key: &DataKey) -> Option<V> {
    let persistent = env.storage().persistent();
    let value = persistent.get(key);
    if value.is_some() {
        persistent.extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    value
}

/// Write a persistent entry, or drop it when `keep` is false
fn write_persistent<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V, keep: bool) {
    let persistent = env.storage().persistent();
    if keep {
        persistent.set(key, value);
        persistent.extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
    } else {
        persistent.remove(key);
    }
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> PoolConfig {
    read_instance(env, &DataKey::Config)
}

pub fn set_config(env: &Env, config: &PoolConfig) {
    write_instance(env, &DataKey::Config, config);
}

pub fn get_state(env: &Env) -> PoolState {
    read_instance(env, &DataKey::State)
}

pub fn set_state(env: &Env, state: &PoolState) {
    write_instance(env, &DataKey::State, state);
}

/// Absent ticks read as the zero record
pub fn get_tick(env: &Env, tick: i32) -> TickInfo {
    read_persistent(env, &DataKey::Tick(tick)).unwrap_or_default()
}

pub fn set_tick(env: &Env, tick: i32, info: &TickInfo) {
    write_persistent(env, &DataKey::Tick(tick), info, info.is_active());
}

#[cfg(test)]
pub fn has_tick(env: &Env, tick: i32) -> bool {
    env.storage().persistent().has(&DataKey::Tick(tick))
}

pub fn get_tick_bitmap_word(env: &Env, word_pos: i32) -> u128 {
    read_persistent(env, &DataKey::TickBitmap(word_pos)).unwrap_or(0)
}

pub fn set_tick_bitmap_word(env: &Env, word_pos: i32, word: u128) {
    write_persistent(env, &DataKey::TickBitmap(word_pos), &word, word != 0);
}

pub fn get_position(env: &Env, key: &PositionKey) -> Option<PositionInfo> {
    read_persistent(env, &DataKey::Position(key.clone()))
}

/// Positions are never removed, even at zero liquidity
pub fn set_position(env: &Env, key: &PositionKey, info: &PositionInfo) {
    write_persistent(env, &DataKey::Position(key.clone()), info, true);
}
