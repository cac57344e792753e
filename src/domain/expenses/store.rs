use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use super::errors::ExpenseError;
use super::model::{Expense, NewExpense};
use crate::domain::wallet::WalletAddress;

// ============================================================================
// Expense Store - Shared-Expense Ledger
// ============================================================================
//
// Creation is the branching-heavy operation: a request either carries an
// explicit share map (custom-split) or a flat total plus participant list
// (equal-split). In equal-split mode the per-participant share is the
// floor-divided quotient; the remainder is foregone, matching the source.
//
// `mark_paid` is idempotent: re-marking an already-paid participant
// succeeds and leaves the flag true.
//
// ============================================================================

#[derive(Default)]
struct ExpenseLedger {
    expenses: HashMap<Uuid, Expense>,
    /// Insertion order of expense ids, for stable listing
    order: Vec<Uuid>,
}

pub struct ExpenseStore {
    inner: RwLock<ExpenseLedger>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(ExpenseLedger::default()),
        }
    }

    /// Create an expense record from either split mode, atomically.
    ///
    /// Custom-split (shares present and non-empty): participants are the
    /// share-map keys and the total is the exact sum of the shares.
    /// Equal-split: every participant owes `floor(total / n)`.
    /// An empty share map is treated as absent.
    pub fn create_expense(&self, req: NewExpense) -> Result<Expense, ExpenseError> {
        if req.creator.trim().is_empty() {
            return Err(ExpenseError::InvalidRequest("creator is required"));
        }

        let shares = req.shares.filter(|s| !s.is_empty());

        if req.participants.is_empty() && shares.is_none() {
            return Err(ExpenseError::InvalidRequest(
                "At least one participant is required",
            ));
        }

        if req.total_amount == 0 && shares.is_none() {
            return Err(ExpenseError::InvalidRequest(
                "totalAmount or shares is required",
            ));
        }

        let (participants, total_amount) = match &shares {
            Some(shares) => {
                let participants: Vec<WalletAddress> = shares.keys().cloned().collect();
                let total = shares.values().sum();
                (participants, total)
            }
            None => (req.participants, req.total_amount),
        };

        let amount_per_participant = total_amount / participants.len() as u64;

        let paid: HashMap<WalletAddress, bool> =
            participants.iter().map(|p| (p.clone(), false)).collect();

        let expense = Expense {
            id: Uuid::new_v4(),
            creator: WalletAddress::new(req.creator),
            title: req.title,
            total_amount,
            participants,
            amount_per_participant,
            paid,
            shares,
            created_at: Utc::now(),
        };

        let mut ledger = self.inner.write().unwrap();
        ledger.order.push(expense.id);
        ledger.expenses.insert(expense.id, expense.clone());
        Ok(expense)
    }

    pub fn expense(&self, id: Uuid) -> Option<Expense> {
        self.inner.read().unwrap().expenses.get(&id).cloned()
    }

    /// Flag a participant's share as paid and return the updated record.
    /// Re-marking an already-paid share succeeds (idempotent).
    pub fn mark_paid(&self, id: Uuid, participant: &WalletAddress) -> Result<Expense, ExpenseError> {
        let mut ledger = self.inner.write().unwrap();

        let expense = ledger
            .expenses
            .get_mut(&id)
            .ok_or(ExpenseError::NotFound(id))?;

        if !expense.is_participant(participant) {
            return Err(ExpenseError::NotParticipant);
        }

        expense.paid.insert(participant.clone(), true);
        Ok(expense.clone())
    }

    /// Every expense where `wallet` is the creator or a participant, in
    /// creation order. Addresses are canonicalized, so matching is uniform
    /// regardless of the casing the caller used.
    pub fn list_for_wallet(&self, wallet: &WalletAddress) -> Vec<Expense> {
        let ledger = self.inner.read().unwrap();
        ledger
            .order
            .iter()
            .filter_map(|id| ledger.expenses.get(id))
            .filter(|e| e.creator == *wallet || e.is_participant(wallet))
            .cloned()
            .collect()
    }
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
