// Local purchased-ticket ledger.
//
// Purpose
// - Keep the client-side copy of every ticket ever purchased, persisted
//   under its own storage key.
//
// Responsibilities
// - Append-only: tickets are added on successful purchase and never mutated
//   or deleted here (the server owns the "used" flag).
// - Same rehydration and logged-failure discipline as the cart store.

use crate::modules::ticket_sales::core::ticket::PurchasedTicket;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use std::sync::Arc;
use tracing::warn;

pub const TICKETS_STORAGE_KEY: &str = "tickets.purchased";

pub struct TicketLedger<S: KeyValueStore + 'static> {
    storage: Arc<S>,
    tickets: Vec<PurchasedTicket>,
}

impl<S: KeyValueStore + 'static> TicketLedger<S> {
    pub async fn load(storage: Arc<S>) -> Self {
        let tickets = match storage.get(TICKETS_STORAGE_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<PurchasedTicket>>(&raw) {
                Ok(tickets) => tickets,
                Err(error) => {
                    warn!(%error, "stored tickets are corrupt, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(error) => {
                warn!(%error, "could not read stored tickets, starting empty");
                Vec::new()
            }
        };
        Self { storage, tickets }
    }

    pub async fn append(&mut self, new_tickets: Vec<PurchasedTicket>) {
        self.tickets.extend(new_tickets);
        let raw = match serde_json::to_string(&self.tickets) {
            Ok(raw) => raw,
            Err(error) => {
                warn!(%error, "could not serialize tickets");
                return;
            }
        };
        if let Err(error) = self.storage.set(TICKETS_STORAGE_KEY, &raw).await {
            warn!(%error, "could not persist tickets");
        }
    }

    pub fn all(&self) -> &[PurchasedTicket] {
        &self.tickets
    }

    pub fn find(&self, ticket_id: &str) -> Option<&PurchasedTicket> {
        self.tickets.iter().find(|t| t.id == ticket_id)
    }
}
