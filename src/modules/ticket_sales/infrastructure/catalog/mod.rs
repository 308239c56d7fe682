// Read-only catalog port.
//
// Purpose
// - Resolve event and ticket-type display data (name, price) by id.
//
// Boundaries
// - Not a mutation surface; the catalog is owned elsewhere. The cart only
//   reads the price at the moment a line is added.

use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventSummary {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketTypeSummary {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub price_cents: i64,
}

#[async_trait]
pub trait Catalog: Send + Sync {
    async fn event(&self, event_id: &str) -> anyhow::Result<Option<EventSummary>>;
    async fn ticket_type(
        &self,
        event_id: &str,
        ticket_type_id: &str,
    ) -> anyhow::Result<Option<TicketTypeSummary>>;
}

pub mod in_memory;
