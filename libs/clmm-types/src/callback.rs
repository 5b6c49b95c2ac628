use soroban_sdk::{contractclient, Bytes, Env};

/// Interface a caller of `mint` or `swap` must implement.
///
/// The pool calls back into the `sender` contract with the amounts it is
/// owed and then checks its own token balances. Nothing the callback
/// returns is trusted.
#[contractclient(name = "SettlementCallbackClient")]
pub trait SettlementCallback {
    /// Pay `amount0` of token0 and `amount1` of token1 to the pool.
    fn on_mint_settle(env: Env, amount0: u128, amount1: u128, data: Bytes);

    /// Pay the positive one of `amount0` / `amount1` to the pool. The
    /// negative one has already been sent to the swap recipient.
    fn on_swap_settle(env: Env, amount0: i128, amount1: i128, data: Bytes);
}
