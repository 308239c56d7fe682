// In memory implementation of the Catalog port, seeded with fixture data.

use crate::modules::ticket_sales::infrastructure::catalog::{
    Catalog, EventSummary, TicketTypeSummary,
};
use async_trait::async_trait;

pub struct InMemoryCatalog {
    events: Vec<EventSummary>,
    ticket_types: Vec<TicketTypeSummary>,
}

impl InMemoryCatalog {
    pub fn new(events: Vec<EventSummary>, ticket_types: Vec<TicketTypeSummary>) -> Self {
        Self {
            events,
            ticket_types,
        }
    }

    /// Two events with a vip and a general-admission tier each.
    pub fn seeded() -> Self {
        let events = vec![
            EventSummary {
                id: "1".to_string(),
                name: "Festival de Verão".to_string(),
            },
            EventSummary {
                id: "2".to_string(),
                name: "Noite Eletrônica".to_string(),
            },
        ];
        let ticket_types = vec![
            TicketTypeSummary {
                id: "vip".to_string(),
                event_id: "1".to_string(),
                name: "VIP".to_string(),
                price_cents: 5000,
            },
            TicketTypeSummary {
                id: "geral".to_string(),
                event_id: "1".to_string(),
                name: "Geral".to_string(),
                price_cents: 2000,
            },
            TicketTypeSummary {
                id: "vip".to_string(),
                event_id: "2".to_string(),
                name: "VIP".to_string(),
                price_cents: 8000,
            },
            TicketTypeSummary {
                id: "geral".to_string(),
                event_id: "2".to_string(),
                name: "Geral".to_string(),
                price_cents: 2000,
            },
        ];
        Self::new(events, ticket_types)
    }
}

#[async_trait]
impl Catalog for InMemoryCatalog {
    async fn event(&self, event_id: &str) -> anyhow::Result<Option<EventSummary>> {
        Ok(self.events.iter().find(|e| e.id == event_id).cloned())
    }

    async fn ticket_type(
        &self,
        event_id: &str,
        ticket_type_id: &str,
    ) -> anyhow::Result<Option<TicketTypeSummary>> {
        Ok(self
            .ticket_types
            .iter()
            .find(|t| t.event_id == event_id && t.id == ticket_type_id)
            .cloned())
    }
}

#[cfg(test)]
mod in_memory_catalog_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_resolve_a_seeded_ticket_type() {
        let catalog = InMemoryCatalog::seeded();
        let ticket_type = catalog
            .ticket_type("1", "vip")
            .await
            .expect("lookup failed")
            .expect("ticket type missing");
        assert_eq!(ticket_type.price_cents, 5000);
        assert_eq!(ticket_type.name, "VIP");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_none_for_an_unknown_ticket_type() {
        let catalog = InMemoryCatalog::seeded();
        let ticket_type = catalog.ticket_type("1", "camarote").await.expect("lookup failed");
        assert_eq!(ticket_type, None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_resolve_a_seeded_event() {
        let catalog = InMemoryCatalog::seeded();
        let event = catalog.event("2").await.expect("lookup failed");
        assert_eq!(event.map(|e| e.name), Some("Noite Eletrônica".to_string()));
    }
}
