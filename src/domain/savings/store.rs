use std::collections::HashMap;
use std::sync::RwLock;

use super::errors::VaultError;
use super::model::Vault;
use crate::domain::wallet::WalletAddress;

// ============================================================================
// Vault Store - Savings Ledger
// ============================================================================
//
// One vault per wallet address, created on first mutation. `withdraw` is
// the check-then-act sequence here: the balance check and the subtraction
// happen under a single write lock, so concurrent withdrawals can never
// drive a balance negative. Reads of absent vaults return the default
// shape without inserting, so a read-only probe leaves no trace.
//
// ============================================================================

pub struct VaultStore {
    inner: RwLock<HashMap<WalletAddress, Vault>>,
}

impl VaultStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// The vault for `address`, or the zero-balance default shape if none
    /// exists yet. Does not insert.
    pub fn vault(&self, address: &WalletAddress) -> Vault {
        self.inner
            .read()
            .unwrap()
            .get(address)
            .cloned()
            .unwrap_or_else(|| Vault::empty(address.clone()))
    }

    /// Overwrite the goal fields, creating the vault if absent. Balance is
    /// untouched.
    pub fn set_goal(&self, address: &WalletAddress, goal: u64, goal_name: String) -> Vault {
        let mut vaults = self.inner.write().unwrap();
        let vault = vaults
            .entry(address.clone())
            .or_insert_with(|| Vault::empty(address.clone()));
        vault.goal = goal;
        vault.goal_name = goal_name;
        vault.clone()
    }

    /// Add a positive amount to the balance, creating the vault if absent.
    pub fn deposit(&self, address: &WalletAddress, amount: u64) -> Result<Vault, VaultError> {
        if amount == 0 {
            return Err(VaultError::InvalidAmount);
        }

        let mut vaults = self.inner.write().unwrap();
        let vault = vaults
            .entry(address.clone())
            .or_insert_with(|| Vault::empty(address.clone()));
        vault.balance += amount;
        Ok(vault.clone())
    }

    /// Subtract `amount` from the balance. Fails if the balance cannot
    /// cover it, leaving the vault unchanged.
    pub fn withdraw(&self, address: &WalletAddress, amount: u64) -> Result<Vault, VaultError> {
        let mut vaults = self.inner.write().unwrap();
        let vault = vaults
            .entry(address.clone())
            .or_insert_with(|| Vault::empty(address.clone()));

        if vault.balance < amount {
            return Err(VaultError::InsufficientBalance);
        }

        vault.balance -= amount;
        Ok(vault.clone())
    }
}

impl Default for VaultStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
