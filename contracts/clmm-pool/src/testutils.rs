//! Shared fixtures for contract-level tests: a registered pool, two Stellar
//! Asset Contract tokens and a payer contract that settles callbacks.

use crate::{ClmmPool, ClmmPoolClient};
use clmm_math::get_sqrt_ratio_at_tick;
use clmm_types::{PoolState, SettlementCallback};
use soroban_sdk::testutils::{Address as _, Events as _};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{
    contract, contractimpl, contracttype, Address, Bytes, Env, Symbol, TryFromVal, Val, Vec, U256,
};

/// Run test code within a pool contract context
pub fn with_contract<F, R>(env: &Env, f: F) -> R
where
    F: FnOnce() -> R,
{
    let contract_id = env.register(ClmmPool, ());
    env.as_contract(&contract_id, f)
}

// === Payer ===

/// How the payer answers a settlement callback, passed as the first byte
/// of the callback data
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum PayMode {
    Exact = 0,
    ShortToken0 = 1,
    ShortToken1 = 2,
    Nothing = 3,
    Reenter = 4,
    Overpay = 5,
}

impl PayMode {
    fn from_data(data: &Bytes) -> Self {
        match data.get(0) {
            Some(1) => PayMode::ShortToken0,
            Some(2) => PayMode::ShortToken1,
            Some(3) => PayMode::Nothing,
            Some(4) => PayMode::Reenter,
            Some(5) => PayMode::Overpay,
            _ => PayMode::Exact,
        }
    }

    pub fn data(self, env: &Env) -> Bytes {
        Bytes::from_array(env, &[self as u8])
    }
}

#[contracttype]
#[derive(Clone)]
enum PayerKey {
    Pool,
    Token0,
    Token1,
}

#[contract]
pub struct Payer;

#[contractimpl]
impl Payer {
    pub fn setup(env: Env, pool: Address, token0: Address, token1: Address) {
        env.storage().instance().set(&PayerKey::Pool, &pool);
        env.storage().instance().set(&PayerKey::Token0, &token0);
        env.storage().instance().set(&PayerKey::Token1, &token1);
    }
}

#[contractimpl]
impl SettlementCallback for Payer {
    fn on_mint_settle(env: Env, amount0: u128, amount1: u128, data: Bytes) {
        let mode = PayMode::from_data(&data);
        if mode == PayMode::Reenter {
            let me = env.current_contract_address();
            pool(&env).mint(&me, &me, &-60, &60, &1, &PayMode::Exact.data(&env));
        }
        pay(&env, mode, amount0 as i128, amount1 as i128);
    }

    fn on_swap_settle(env: Env, amount0: i128, amount1: i128, data: Bytes) {
        let mode = PayMode::from_data(&data);
        if mode == PayMode::Reenter {
            let me = env.current_contract_address();
            pool(&env).swap(&me, &me, &true, &1, &U256::from_u32(&env, 0), &PayMode::Exact.data(&env));
        }
        pay(&env, mode, amount0.max(0), amount1.max(0));
    }
}

fn pool(env: &Env) -> ClmmPoolClient<'static> {
    let address: Address = env.storage().instance().get(&PayerKey::Pool).unwrap();
    ClmmPoolClient::new(env, &address)
}

fn pay(env: &Env, mode: PayMode, owed0: i128, owed1: i128) {
    let (owed0, owed1) = match mode {
        PayMode::Nothing => return,
        PayMode::ShortToken0 => (owed0 - 1, owed1),
        PayMode::ShortToken1 => (owed0, owed1 - 1),
        PayMode::Overpay => (owed0 + 1, owed1 + 1),
        PayMode::Exact | PayMode::Reenter => (owed0, owed1),
    };

    let storage = env.storage().instance();
    let pool: Address = storage.get(&PayerKey::Pool).unwrap();
    let me = env.current_contract_address();
    if owed0 > 0 {
        let token0: Address = storage.get(&PayerKey::Token0).unwrap();
        TokenClient::new(env, &token0).transfer(&me, &pool, &owed0);
    }
    if owed1 > 0 {
        let token1: Address = storage.get(&PayerKey::Token1).unwrap();
        TokenClient::new(env, &token1).transfer(&me, &pool, &owed1);
    }
}

// === Pool fixture ===

/// Starting balance of each token held by the payer
pub const PAYER_BALANCE: i128 = 1_000_000_000_000_000_000_000_000_000;

pub struct PoolTest<'a> {
    pub env: Env,
    pub pool: ClmmPoolClient<'a>,
    pub token0: TokenClient<'a>,
    pub token1: TokenClient<'a>,
    pub payer: Address,
    pub owner: Address,
}

impl<'a> PoolTest<'a> {
    /// Pool priced at the sqrt ratio of `tick`, with a funded payer
    pub fn new(tick_spacing: i32, tick: i32) -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let token_a = env.register_stellar_asset_contract_v2(admin.clone()).address();
        let token_b = env.register_stellar_asset_contract_v2(admin).address();
        let (token0, token1) = if token_a < token_b {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };

        let pool_id = env.register(ClmmPool, ());
        let pool = ClmmPoolClient::new(&env, &pool_id);
        let sqrt_price_x96 = get_sqrt_ratio_at_tick(&env, tick);
        pool.initialize(&token0, &token1, &tick_spacing, &sqrt_price_x96, &tick);

        let payer = env.register(Payer, ());
        PayerClient::new(&env, &payer).setup(&pool_id, &token0, &token1);
        StellarAssetClient::new(&env, &token0).mint(&payer, &PAYER_BALANCE);
        StellarAssetClient::new(&env, &token1).mint(&payer, &PAYER_BALANCE);

        let owner = Address::generate(&env);

        PoolTest {
            pool,
            token0: TokenClient::new(&env, &token0),
            token1: TokenClient::new(&env, &token1),
            payer,
            owner,
            env,
        }
    }

    pub fn mint(&self, tick_lower: i32, tick_upper: i32, amount: u128) -> (u128, u128) {
        self.pool.mint(
            &self.payer,
            &self.owner,
            &tick_lower,
            &tick_upper,
            &amount,
            &PayMode::Exact.data(&self.env),
        )
    }

    pub fn swap(&self, zero_for_one: bool, amount_specified: i128, limit: &U256) -> (i128, i128) {
        self.pool.swap(
            &self.payer,
            &self.owner,
            &zero_for_one,
            &amount_specified,
            limit,
            &PayMode::Exact.data(&self.env),
        )
    }

    pub fn no_limit(&self) -> U256 {
        U256::from_u32(&self.env, 0)
    }

    /// Pool balances of (token0, token1)
    pub fn pool_balances(&self) -> (i128, i128) {
        (
            self.token0.balance(&self.pool.address),
            self.token1.balance(&self.pool.address),
        )
    }

    pub fn state(&self) -> PoolState {
        self.pool.get_state()
    }

    /// Topics and data of the `name` events the pool has published
    pub fn pool_events(&self, name: &str) -> Vec<(Vec<Val>, Val)> {
        let name = Symbol::new(&self.env, name);
        let mut events = Vec::new(&self.env);
        for (contract, topics, data) in self.env.events().all().iter() {
            if contract != self.pool.address {
                continue;
            }
            let first = topics.get(0).and_then(|v| Symbol::try_from_val(&self.env, &v).ok());
            if first == Some(name.clone()) {
                events.push_back((topics, data));
            }
        }
        events
    }
}
