// ============================================================================
// Fundraising Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum FundraiserError {
    #[error("Fundraiser not found: {0}")]
    NotFound(String),

    #[error("Contribution amount must be greater than zero")]
    InvalidAmount,
}
