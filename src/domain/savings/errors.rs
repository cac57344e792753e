// ============================================================================
// Savings Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    #[error("Insufficient vault balance")]
    InsufficientBalance,

    #[error("Transaction amount must be greater than zero")]
    InvalidAmount,
}
