// ============================================================================
// Savings Domain - Per-Wallet Vaults
// ============================================================================
//
// This module contains ALL savings-specific code:
// - Model (Vault)
// - Errors (VaultError enum)
// - Store (VaultStore: balances + savings goals, keyed by wallet address)
//
// Vaults materialize lazily: reads of an absent vault yield the default
// shape without inserting anything; mutations create-if-absent.
//
// ============================================================================

pub mod errors;
pub mod model;
pub mod store;

// Re-export for convenience
pub use errors::*;
pub use model::*;
pub use store::*;
