use uuid::Uuid;

// ============================================================================
// Expense Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ExpenseError {
    #[error("Expense not found: {0}")]
    NotFound(Uuid),

    #[error("Sender is not a participant")]
    NotParticipant,

    #[error("{0}")]
    InvalidRequest(&'static str),
}
