use uuid::Uuid;

// ============================================================================
// Ticketing Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TicketError {
    #[error("Event not found: {0}")]
    NotFound(Uuid),

    #[error("Event sold out")]
    SoldOut,
}
