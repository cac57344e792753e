use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::wallet::WalletAddress;

// ============================================================================
// Expense Models
// ============================================================================

/// A shared expense split between participants.
///
/// `amount_per_participant` is the uniform floor-divided share used in
/// equal-split mode. When `shares` is present (custom-split mode) the
/// per-participant obligation is `shares[p]` and `total_amount` is the
/// exact sum of the shares.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,
    pub creator: WalletAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub total_amount: u64,
    pub participants: Vec<WalletAddress>,
    pub amount_per_participant: u64,
    pub paid: HashMap<WalletAddress, bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shares: Option<HashMap<WalletAddress, u64>>,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn is_participant(&self, wallet: &WalletAddress) -> bool {
        self.participants.contains(wallet)
    }

    /// What `wallet` owes on this expense
    pub fn share_of(&self, wallet: &WalletAddress) -> Option<u64> {
        if !self.is_participant(wallet) {
            return None;
        }
        match &self.shares {
            Some(shares) => shares.get(wallet).copied(),
            None => Some(self.amount_per_participant),
        }
    }
}

/// Caller-supplied fields for a new expense. Exactly one of the two modes
/// applies: `shares` non-empty (custom-split) or `total_amount` +
/// `participants` (equal-split).
#[derive(Debug, Clone, Default)]
pub struct NewExpense {
    pub creator: String,
    pub title: Option<String>,
    pub total_amount: u64,
    pub participants: Vec<WalletAddress>,
    pub shares: Option<HashMap<WalletAddress, u64>>,
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn expense_with_shares() -> Expense {
        let a = WalletAddress::new("A1");
        let b = WalletAddress::new("B2");
        let mut shares = HashMap::new();
        shares.insert(a.clone(), 40);
        shares.insert(b.clone(), 60);

        Expense {
            id: Uuid::new_v4(),
            creator: WalletAddress::new("CREATOR"),
            title: None,
            total_amount: 100,
            participants: vec![a, b],
            amount_per_participant: 50,
            paid: HashMap::new(),
            shares: Some(shares),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_share_of_uses_custom_share_when_present() {
        let expense = expense_with_shares();
        assert_eq!(expense.share_of(&WalletAddress::new("A1")), Some(40));
        assert_eq!(expense.share_of(&WalletAddress::new("B2")), Some(60));
    }

    #[test]
    fn test_share_of_non_participant_is_none() {
        let expense = expense_with_shares();
        assert_eq!(expense.share_of(&WalletAddress::new("OUTSIDER")), None);
    }

    #[test]
    fn test_absent_title_is_not_serialized() {
        let expense = expense_with_shares();
        let json = serde_json::to_string(&expense).unwrap();
        assert!(!json.contains("\"title\""));
        assert!(json.contains("\"totalAmount\":100"));
    }
}
