// ============================================================================
// Expenses Domain - Shared-Expense Splitting
// ============================================================================
//
// This module contains ALL expense-splitting code:
// - Model (Expense, NewExpense)
// - Errors (ExpenseError enum)
// - Store (ExpenseStore: split records + paid-status ledger)
//
// Two creation modes: equal-split (floor division of a flat total) and
// custom-split (caller-supplied per-participant amounts).
//
// ============================================================================

pub mod errors;
pub mod model;
pub mod store;

// Re-export for convenience
pub use errors::*;
pub use model::*;
pub use store::*;
