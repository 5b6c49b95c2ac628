use crate::error::PoolError;
use clmm_types::{PoolConfig, SettlementCallbackClient};
use soroban_sdk::{log, token, Address, Bytes, Env};

/// Pool balance of one token before settlement, and what it is owed
struct BalanceSnapshot {
    token: Address,
    balance_before: i128,
    owed: i128,
}

impl BalanceSnapshot {
    /// Record the pool's balance. Tokens that are owed nothing are skipped.
    fn take(env: &Env, token: &Address, owed: i128) -> Option<Self> {
        if owed <= 0 {
            return None;
        }
        let balance_before = token::Client::new(env, token).balance(&env.current_contract_address());
        Some(Self {
            token: token.clone(),
            balance_before,
            owed,
        })
    }

    /// Re-read the balance and check the owed amount arrived
    fn verify(&self, env: &Env) -> Result<(), PoolError> {
        let balance_after =
            token::Client::new(env, &self.token).balance(&env.current_contract_address());
        let required = self
            .balance_before
            .checked_add(self.owed)
            .ok_or(PoolError::AmountOverflow)?;

        if balance_after < required {
            log!(env, "settlement short", self.token, balance_after, required);
            return Err(PoolError::InsufficientInputAmount);
        }
        Ok(())
    }
}

pub fn to_i128(amount: u128) -> Result<i128, PoolError> {
    i128::try_from(amount).map_err(|_| PoolError::AmountOverflow)
}

/// Ask `sender` to pay for a mint and confirm the tokens arrived.
pub fn settle_mint(
    env: &Env,
    config: &PoolConfig,
    sender: &Address,
    amount0: u128,
    amount1: u128,
    data: &Bytes,
) -> Result<(), PoolError> {
    let snapshot0 = BalanceSnapshot::take(env, &config.token0, to_i128(amount0)?);
    let snapshot1 = BalanceSnapshot::take(env, &config.token1, to_i128(amount1)?);

    SettlementCallbackClient::new(env, sender).on_mint_settle(&amount0, &amount1, data);

    if let Some(snapshot) = snapshot0 {
        snapshot.verify(env)?;
    }
    if let Some(snapshot) = snapshot1 {
        snapshot.verify(env)?;
    }
    Ok(())
}

/// Pay the swap output to `recipient`, then ask `sender` for the input.
///
/// Positive amounts are owed to the pool, negative amounts are paid out.
pub fn settle_swap(
    env: &Env,
    config: &PoolConfig,
    sender: &Address,
    recipient: &Address,
    amount0: i128,
    amount1: i128,
    data: &Bytes,
) -> Result<(), PoolError> {
    let contract_address = env.current_contract_address();

    // Outbound leg
    if amount0 < 0 {
        let amount_out = amount0.checked_neg().ok_or(PoolError::AmountOverflow)?;
        token::Client::new(env, &config.token0).transfer(&contract_address, recipient, &amount_out);
    }
    if amount1 < 0 {
        let amount_out = amount1.checked_neg().ok_or(PoolError::AmountOverflow)?;
        token::Client::new(env, &config.token1).transfer(&contract_address, recipient, &amount_out);
    }

    // Inbound leg
    let snapshot0 = BalanceSnapshot::take(env, &config.token0, amount0);
    let snapshot1 = BalanceSnapshot::take(env, &config.token1, amount1);

    SettlementCallbackClient::new(env, sender).on_swap_settle(&amount0, &amount1, data);

    if let Some(snapshot) = snapshot0 {
        snapshot.verify(env)?;
    }
    if let Some(snapshot) = snapshot1 {
        snapshot.verify(env)?;
    }
    Ok(())
}
