use prometheus::{IntCounter, IntCounterVec, Opts, Registry};

// ============================================================================
// Metrics Module - Prometheus metrics for the ledger service
// ============================================================================
//
// Counters for every ledger mutation:
// - Ticketing (events created, tickets sold, sold-out rejections)
// - Expenses (created by split mode, shares paid)
// - Fundraising (contributions, amount raised)
// - Savings (vault transactions, insufficient-balance rejections)
//
// All metrics are registered with Prometheus and scraped via /metrics.
// The stores themselves stay silent; the HTTP layer records outcomes.
//
// ============================================================================

/// Central metrics registry for the entire application
pub struct Metrics {
    registry: Registry,

    // Ticketing
    pub events_created: IntCounter,
    pub tickets_sold: IntCounter,
    pub ticket_rejections: IntCounterVec,

    // Expenses
    pub expenses_created: IntCounterVec,
    pub shares_paid: IntCounter,

    // Fundraising
    pub fundraisers_created: IntCounter,
    pub contributions: IntCounter,
    pub contributed_amount: IntCounter,

    // Savings
    pub vault_transactions: IntCounterVec,
    pub vault_rejections: IntCounterVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let events_created = IntCounter::new("events_created_total", "Total events created")?;
        registry.register(Box::new(events_created.clone()))?;

        let tickets_sold = IntCounter::new("tickets_sold_total", "Total tickets sold")?;
        registry.register(Box::new(tickets_sold.clone()))?;

        let ticket_rejections = IntCounterVec::new(
            Opts::new("ticket_rejections_total", "Rejected ticket purchases"),
            &["reason"],
        )?;
        registry.register(Box::new(ticket_rejections.clone()))?;

        let expenses_created = IntCounterVec::new(
            Opts::new("expenses_created_total", "Total expenses created"),
            &["split_mode"],
        )?;
        registry.register(Box::new(expenses_created.clone()))?;

        let shares_paid = IntCounter::new(
            "expense_shares_paid_total",
            "Total expense shares marked paid",
        )?;
        registry.register(Box::new(shares_paid.clone()))?;

        let fundraisers_created =
            IntCounter::new("fundraisers_created_total", "Total fundraisers created")?;
        registry.register(Box::new(fundraisers_created.clone()))?;

        let contributions = IntCounter::new(
            "fundraiser_contributions_total",
            "Total fundraiser contributions",
        )?;
        registry.register(Box::new(contributions.clone()))?;

        let contributed_amount = IntCounter::new(
            "fundraiser_contributed_amount_total",
            "Total amount contributed across all fundraisers",
        )?;
        registry.register(Box::new(contributed_amount.clone()))?;

        let vault_transactions = IntCounterVec::new(
            Opts::new("vault_transactions_total", "Total vault transactions"),
            &["kind"],
        )?;
        registry.register(Box::new(vault_transactions.clone()))?;

        let vault_rejections = IntCounterVec::new(
            Opts::new("vault_rejections_total", "Rejected vault transactions"),
            &["reason"],
        )?;
        registry.register(Box::new(vault_rejections.clone()))?;

        Ok(Self {
            registry,
            events_created,
            tickets_sold,
            ticket_rejections,
            expenses_created,
            shares_paid,
            fundraisers_created,
            contributions,
            contributed_amount,
            vault_transactions,
            vault_rejections,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Helper to record a fundraiser contribution
    pub fn record_contribution(&self, amount: u64) {
        self.contributions.inc();
        self.contributed_amount.inc_by(amount);
    }

    /// Helper to record a vault transaction outcome
    pub fn record_vault_transaction(&self, kind: &str, success: bool, reason: &str) {
        if success {
            self.vault_transactions.with_label_values(&[kind]).inc();
        } else {
            self.vault_rejections.with_label_values(&[reason]).inc();
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new().expect("Failed to create metrics")
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
