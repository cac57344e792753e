// ============================================================================
// Domain Layer - The Ledger Core
// ============================================================================
//
// Four independent, leaf-level stores, each owning one entity family:
// - ticketing:   events + ticket inventory + per-wallet ownership
// - expenses:    shared-expense splits + paid-status tracking
// - fundraising: campaigns + cumulative contributions
// - savings:     per-wallet vault balances + goals
//
// Stores never call each other and never perform I/O; the actual value
// transfer happens on the external ledger network, driven by callers
// outside this layer. Each store guards its maps with its own lock, so
// every operation is atomic with respect to that store.
//
// ============================================================================

pub mod expenses;
pub mod fundraising;
pub mod savings;
pub mod ticketing;
pub mod wallet;
