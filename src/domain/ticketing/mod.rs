// ============================================================================
// Ticketing Domain - Events & Ticket Inventory
// ============================================================================
//
// This module contains ALL ticketing-specific code:
// - Model (Event, NewEvent)
// - Errors (TicketError enum)
// - Store (TicketStore: inventory + per-wallet ownership ledger)
//
// ============================================================================

pub mod errors;
pub mod model;
pub mod store;

// Re-export for convenience
pub use errors::*;
pub use model::*;
pub use store::*;
