use crate::error::PoolError;
use crate::invariants::tick_liquidity_bounded;
use crate::storage::{get_tick, get_tick_bitmap_word, set_tick_bitmap_word};
use clmm_types::TickInfo;
use soroban_sdk::Env;

/// Apply a liquidity delta to a tick record in memory.
///
/// `liquidity_gross` moves by `|delta|`. `liquidity_net` moves by `+delta`
/// when the tick is the lower boundary of the range and by `-delta` when it
/// is the upper one. Returns true if the tick flipped between active and
/// absent.
pub fn update(
    info: &mut TickInfo,
    liquidity_delta: i128,
    upper: bool,
    max_liquidity: u128,
) -> Result<bool, PoolError> {
    let liquidity_gross_before = info.liquidity_gross;
    let liquidity_gross_after = liquidity_gross_before
        .checked_add_signed(liquidity_delta)
        .ok_or(PoolError::LiquidityOverflow)?;

    if !tick_liquidity_bounded(liquidity_gross_after, max_liquidity) {
        return Err(PoolError::LiquidityOverflow);
    }

    let liquidity_net_after = if upper {
        info.liquidity_net.checked_sub(liquidity_delta)
    } else {
        info.liquidity_net.checked_add(liquidity_delta)
    }
    .ok_or(PoolError::LiquidityOverflow)?;

    let flipped = (liquidity_gross_after == 0) != (liquidity_gross_before == 0);

    info.liquidity_gross = liquidity_gross_after;
    info.liquidity_net = liquidity_net_after;

    Ok(flipped)
}

/// Cross a tick during a swap
/// Returns the liquidity delta to apply when moving right
pub fn cross(env: &Env, tick: i32) -> i128 {
    get_tick(env, tick).liquidity_net
}

// === Tick Bitmap Operations ===
// Using u128 per word (128 ticks per word)

/// Tick index divided by spacing, rounded toward negative infinity
fn compress(tick: i32, tick_spacing: i32) -> i32 {
    let compressed = tick / tick_spacing;
    if tick < 0 && tick % tick_spacing != 0 {
        compressed - 1
    } else {
        compressed
    }
}

/// (word, bit) of a compressed tick
fn position(compressed: i32) -> (i32, u8) {
    let word_pos = compressed >> 7; // divide by 128
    let bit_pos = compressed.rem_euclid(128) as u8;
    (word_pos, bit_pos)
}

/// Flip a tick in the bitmap
pub fn flip_tick(env: &Env, tick: i32, tick_spacing: i32) {
    if tick % tick_spacing != 0 {
        panic!("Tick not on spacing");
    }

    let (word_pos, bit_pos) = position(tick / tick_spacing);
    let mask = 1u128 << bit_pos;
    let word = get_tick_bitmap_word(env, word_pos);
    set_tick_bitmap_word(env, word_pos, word ^ mask);
}

/// Find the next initialized tick within one word
/// Returns (tick, initialized)
///
/// Searching left (`lte`) includes `tick` itself; searching right starts at
/// the next spaced tick. When nothing is set the word boundary in the search
/// direction is returned with `initialized == false`.
pub fn next_initialized_tick_within_one_word(
    env: &Env,
    tick: i32,
    tick_spacing: i32,
    lte: bool, // less than or equal (searching left)
) -> (i32, bool) {
    let compressed = compress(tick, tick_spacing);

    if lte {
        let (word_pos, bit_pos) = position(compressed);

        // Bits at or below current position
        let mask = (1u128 << bit_pos) - 1 + (1u128 << bit_pos);
        let masked = get_tick_bitmap_word(env, word_pos) & mask;

        let initialized = masked != 0;
        let next = if initialized {
            let msb = 127 - masked.leading_zeros() as i32;
            (compressed - (bit_pos as i32 - msb)) * tick_spacing
        } else {
            (compressed - bit_pos as i32) * tick_spacing
        };

        (next, initialized)
    } else {
        let (word_pos, bit_pos) = position(compressed + 1);

        // Bits at or above next position
        let mask = !((1u128 << bit_pos) - 1);
        let masked = get_tick_bitmap_word(env, word_pos) & mask;

        let initialized = masked != 0;
        let next = if initialized {
            let lsb = masked.trailing_zeros() as i32;
            (compressed + 1 + (lsb - bit_pos as i32)) * tick_spacing
        } else {
            (compressed + 1 + (127 - bit_pos as i32)) * tick_spacing
        };

        (next, initialized)
    }
}
