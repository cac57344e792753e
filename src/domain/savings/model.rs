use serde::{Deserialize, Serialize};

use crate::domain::wallet::WalletAddress;

// ============================================================================
// Savings Models
// ============================================================================

pub const DEFAULT_GOAL_NAME: &str = "General Savings";

/// A per-wallet savings sub-balance tracked separately from the wallet's
/// actual on-chain balance. The wallet address itself is the identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vault {
    pub wallet_address: WalletAddress,
    pub balance: u64,
    pub goal: u64,
    pub goal_name: String,
}

impl Vault {
    /// The zero-balance shape every vault starts from
    pub fn empty(wallet_address: WalletAddress) -> Self {
        Self {
            wallet_address,
            balance: 0,
            goal: 0,
            goal_name: DEFAULT_GOAL_NAME.to_string(),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
