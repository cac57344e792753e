use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::wallet::WalletAddress;

// ============================================================================
// Ticketing Models
// ============================================================================

/// A campus event backed by one external-ledger asset, where each asset
/// unit represents one ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Price per ticket in campus-asset base units
    pub ticket_price: u64,
    pub total_tickets: u32,
    pub remaining_tickets: u32,
    /// External-ledger asset reference; opaque to the ledger core
    pub asset_id: u64,
    pub creator: WalletAddress,
    pub category: String,
    pub date: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new event. Field validation (required
/// strings, positive price) is the dispatch layer's job, not the store's.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub name: String,
    pub description: String,
    pub ticket_price: u64,
    pub total_tickets: u32,
    pub asset_id: u64,
    pub creator: WalletAddress,
    pub category: String,
    pub date: String,
    pub location: String,
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization_uses_camel_case() {
        let event = Event {
            id: Uuid::new_v4(),
            name: "Spring Gala".to_string(),
            description: "Annual gala".to_string(),
            ticket_price: 1_000,
            total_tickets: 50,
            remaining_tickets: 50,
            asset_id: 7,
            creator: WalletAddress::new("CREATOR1"),
            category: "social".to_string(),
            date: "2026-04-01".to_string(),
            location: "Main Hall".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"ticketPrice\":1000"));
        assert!(json.contains("\"remainingTickets\":50"));

        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, event.id);
        assert_eq!(back.total_tickets, 50);
    }
}
