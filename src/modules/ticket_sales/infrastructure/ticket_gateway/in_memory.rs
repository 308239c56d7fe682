// In memory implementation of the TicketGateway port.
//
// Purpose
// - Support purchase workflow tests and local development without a server.
//
// Responsibilities
// - Record every accepted batch for assertions.
// - Simulate an unreachable server when toggled offline, and a slow one
//   when given a delay.

use crate::modules::ticket_sales::core::ticket::TicketCreateRequest;
use crate::modules::ticket_sales::infrastructure::ticket_gateway::{GatewayError, TicketGateway};
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryTicketGateway {
    created: Mutex<Vec<TicketCreateRequest>>,
    offline: bool,
    delay_ms: u64,
}

impl InMemoryTicketGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    pub async fn created(&self) -> Vec<TicketCreateRequest> {
        self.created.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl TicketGateway for InMemoryTicketGateway {
    async fn batch_create(&self, tickets: &[TicketCreateRequest]) -> Result<(), GatewayError> {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
        if self.offline {
            return Err(GatewayError::Transport("ticket gateway offline".into()));
        }
        if tickets.iter().any(|t| t.quantity == 0) {
            return Err(GatewayError::Rejected("zero quantity ticket".into()));
        }
        self.created.lock().await.extend_from_slice(tickets);
        Ok(())
    }
}
