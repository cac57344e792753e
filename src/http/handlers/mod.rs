// ============================================================================
// Request Handlers
// ============================================================================
//
// One module per entity family plus the system endpoints. DTO field names
// are camelCase on the wire. Handlers do the request-shape validation,
// call exactly one store operation, record metrics, and log outcomes;
// the stores themselves never log.
//
// ============================================================================

pub mod events;
pub mod expenses;
pub mod fundraisers;
pub mod system;
pub mod vaults;
