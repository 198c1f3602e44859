use serde::{Deserialize, Serialize};

/// A chain the application supports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chain {
    pub id: u64,
    pub name: String,
}

impl Chain {
    pub fn new(id: u64, name: &str) -> Self {
        Self { id, name: name.to_string() }
    }

    /// Ethereum mainnet, the fallback when no chain list is configured.
    pub fn mainnet() -> Self {
        Self::new(1, "Ethereum")
    }
}

/// Chain state reported from a successful connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainStatus {
    pub id: u64,
    /// Set when the wallet sits on a chain outside the configured list.
    pub unsupported: bool,
}
