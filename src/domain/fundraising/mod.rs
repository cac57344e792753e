// ============================================================================
// Fundraising Domain - Campaigns & Contributions
// ============================================================================
//
// This module contains ALL fundraising-specific code:
// - Model (Fundraiser, NewFundraiser)
// - Errors (FundraiserError enum)
// - Store (FundraiserStore: campaigns + cumulative raised amounts)
//
// ============================================================================

pub mod errors;
pub mod model;
pub mod store;

// Re-export for convenience
pub use errors::*;
pub use model::*;
pub use store::*;
