use soroban_sdk::contracttype;

/// Liquidity bookkeeping for a tick used as a position boundary
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TickInfo {
    /// Total liquidity referencing this tick
    pub liquidity_gross: u128,
    /// Net liquidity change when tick is crossed (+ when moving right)
    pub liquidity_net: i128,
}

impl TickInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tick nobody references is treated as absent
    pub fn is_active(&self) -> bool {
        self.liquidity_gross != 0
    }
}
