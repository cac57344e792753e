use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use super::errors::TicketError;
use super::model::{Event, NewEvent};
use crate::domain::wallet::WalletAddress;

// ============================================================================
// Ticket Store - Event Inventory & Ownership Ledger
// ============================================================================
//
// Owns two mappings behind one lock:
// 1. event id -> Event (with live remaining-ticket counter)
// 2. wallet   -> event ids purchased (append-only, duplicates allowed)
//
// `purchase_ticket` is the one check-then-act sequence in this store: the
// availability check and the decrement+append happen under a single write
// lock, so concurrent buyers can never oversell an event. Operations never
// touch other stores and never perform I/O while holding the lock.
//
// ============================================================================

#[derive(Default)]
struct TicketLedger {
    events: HashMap<Uuid, Event>,
    /// Insertion order of event ids, for stable listing
    order: Vec<Uuid>,
    tickets_by_wallet: HashMap<WalletAddress, Vec<Uuid>>,
}

pub struct TicketStore {
    inner: RwLock<TicketLedger>,
}

impl TicketStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(TicketLedger::default()),
        }
    }

    /// Store a new event with a fresh id and a full ticket inventory.
    /// The store does not validate price or inventory positivity; that is
    /// the caller's concern.
    pub fn create_event(&self, new: NewEvent) -> Event {
        let event = Event {
            id: Uuid::new_v4(),
            name: new.name,
            description: new.description,
            ticket_price: new.ticket_price,
            total_tickets: new.total_tickets,
            remaining_tickets: new.total_tickets,
            asset_id: new.asset_id,
            creator: new.creator,
            category: new.category,
            date: new.date,
            location: new.location,
            created_at: Utc::now(),
        };

        let mut ledger = self.inner.write().unwrap();
        ledger.order.push(event.id);
        ledger.events.insert(event.id, event.clone());
        event
    }

    pub fn event(&self, id: Uuid) -> Option<Event> {
        self.inner.read().unwrap().events.get(&id).cloned()
    }

    /// All events in creation order
    pub fn list_events(&self) -> Vec<Event> {
        let ledger = self.inner.read().unwrap();
        ledger
            .order
            .iter()
            .filter_map(|id| ledger.events.get(id).cloned())
            .collect()
    }

    /// Reserve one ticket for `wallet`: verify the event exists, verify
    /// inventory remains, decrement the counter by exactly 1, and record
    /// ownership — as one indivisible unit under the write lock.
    ///
    /// A wallet may buy the same event repeatedly; each purchase consumes
    /// inventory and appends another ownership entry (source behavior,
    /// kept intentionally).
    pub fn purchase_ticket(&self, event_id: Uuid, wallet: &WalletAddress) -> Result<Event, TicketError> {
        let mut ledger = self.inner.write().unwrap();

        let event = ledger
            .events
            .get_mut(&event_id)
            .ok_or(TicketError::NotFound(event_id))?;

        if event.remaining_tickets == 0 {
            return Err(TicketError::SoldOut);
        }

        event.remaining_tickets -= 1;
        let updated = event.clone();

        ledger
            .tickets_by_wallet
            .entry(wallet.clone())
            .or_default()
            .push(event_id);

        Ok(updated)
    }

    /// Event ids held by `wallet`, in purchase order. Empty if the wallet
    /// has never bought a ticket — that is not an error.
    pub fn tickets_of_wallet(&self, wallet: &WalletAddress) -> Vec<Uuid> {
        self.inner
            .read()
            .unwrap()
            .tickets_by_wallet
            .get(wallet)
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for TicketStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
