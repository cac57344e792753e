use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::wallet::WalletAddress;

// ============================================================================
// Fundraising Models
// ============================================================================

/// A fundraising campaign. `raised` starts at zero and only ever grows;
/// over-funding past `goal` is allowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fundraiser {
    /// 8 random bytes, hex-encoded
    pub id: String,
    pub title: String,
    pub description: String,
    pub goal: u64,
    pub raised: u64,
    pub creator: WalletAddress,
    pub deadline: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new campaign. Descriptive fields are
/// validated by the dispatch layer, not the store.
#[derive(Debug, Clone)]
pub struct NewFundraiser {
    pub title: String,
    pub description: String,
    pub goal: u64,
    pub creator: WalletAddress,
    pub deadline: String,
    pub category: String,
}

// ============================================================================
// Unit Tests
// ============================================================================
