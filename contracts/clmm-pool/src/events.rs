use soroban_sdk::{Address, Env, Symbol, U256};

pub fn publish_mint(
    env: &Env,
    sender: &Address,
    owner: &Address,
    tick_lower: i32,
    tick_upper: i32,
    amount: u128,
    amount0: u128,
    amount1: u128,
) {
    env.events().publish(
        (Symbol::new(env, "mint"), sender.clone(), owner.clone()),
        (tick_lower, tick_upper, amount, amount0, amount1),
    );
}

pub fn publish_swap(
    env: &Env,
    sender: &Address,
    recipient: &Address,
    amount0: i128,
    amount1: i128,
    sqrt_price_x96: &U256,
    liquidity: u128,
    tick: i32,
) {
    env.events().publish(
        (Symbol::new(env, "swap"), sender.clone(), recipient.clone()),
        (amount0, amount1, sqrt_price_x96.clone(), liquidity, tick),
    );
}
