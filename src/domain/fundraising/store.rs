use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use rand::RngCore;

use super::errors::FundraiserError;
use super::model::{Fundraiser, NewFundraiser};

// ============================================================================
// Fundraiser Store - Campaign Ledger
// ============================================================================
//
// Contributions are additive and commutative, so a store-wide lock around
// each operation is enough; there is no check-then-act hazard here beyond
// existence. The store guards `amount > 0` itself even though the dispatch
// layer also rejects non-positive amounts.
//
// ============================================================================

#[derive(Default)]
struct FundraiserLedger {
    fundraisers: HashMap<String, Fundraiser>,
    /// Insertion order of campaign ids, for stable listing
    order: Vec<String>,
}

pub struct FundraiserStore {
    inner: RwLock<FundraiserLedger>,
}

impl FundraiserStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(FundraiserLedger::default()),
        }
    }

    /// Store a new campaign with a random 8-byte hex id and zero raised.
    pub fn create_fundraiser(&self, new: NewFundraiser) -> Fundraiser {
        let fundraiser = Fundraiser {
            id: random_id(),
            title: new.title,
            description: new.description,
            goal: new.goal,
            raised: 0,
            creator: new.creator,
            deadline: new.deadline,
            category: new.category,
            created_at: Utc::now(),
        };

        let mut ledger = self.inner.write().unwrap();
        ledger.order.push(fundraiser.id.clone());
        ledger
            .fundraisers
            .insert(fundraiser.id.clone(), fundraiser.clone());
        fundraiser
    }

    pub fn fundraiser(&self, id: &str) -> Option<Fundraiser> {
        self.inner.read().unwrap().fundraisers.get(id).cloned()
    }

    /// All campaigns in creation order
    pub fn list_fundraisers(&self) -> Vec<Fundraiser> {
        let ledger = self.inner.read().unwrap();
        ledger
            .order
            .iter()
            .filter_map(|id| ledger.fundraisers.get(id).cloned())
            .collect()
    }

    /// Add a positive contribution to `raised`. No cap against `goal`.
    pub fn contribute(&self, id: &str, amount: u64) -> Result<Fundraiser, FundraiserError> {
        if amount == 0 {
            return Err(FundraiserError::InvalidAmount);
        }

        let mut ledger = self.inner.write().unwrap();
        let fundraiser = ledger
            .fundraisers
            .get_mut(id)
            .ok_or_else(|| FundraiserError::NotFound(id.to_string()))?;

        fundraiser.raised += amount;
        Ok(fundraiser.clone())
    }
}

impl Default for FundraiserStore {
    fn default() -> Self {
        Self::new()
    }
}

fn random_id() -> String {
    let mut bytes = [0u8; 8];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

// ============================================================================
// Unit Tests
// ============================================================================
