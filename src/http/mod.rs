// ============================================================================
// HTTP Layer - Thin Dispatch over the Ledger Core
// ============================================================================
//
// Turns inbound requests into single store operations and serializes the
// results back. All request validation messages and response envelopes
// live here; the stores only see well-formed operations. Failures map to
// the `{ "error": ... }` JSON shape with 400/404 statuses.
//
// ============================================================================

pub mod error;
pub mod handlers;
pub mod routes;

use crate::config::AppConfig;
use crate::domain::expenses::ExpenseStore;
use crate::domain::fundraising::FundraiserStore;
use crate::domain::savings::VaultStore;
use crate::domain::ticketing::TicketStore;
use crate::metrics::Metrics;

/// Shared application state handed to every handler. Constructed once in
/// `main` and passed by handle; tests build isolated instances.
pub struct AppState {
    pub config: AppConfig,
    pub tickets: TicketStore,
    pub expenses: ExpenseStore,
    pub fundraisers: FundraiserStore,
    pub vaults: VaultStore,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        Ok(Self {
            config,
            tickets: TicketStore::new(),
            expenses: ExpenseStore::new(),
            fundraisers: FundraiserStore::new(),
            vaults: VaultStore::new(),
            metrics: Metrics::new()?,
        })
    }
}
