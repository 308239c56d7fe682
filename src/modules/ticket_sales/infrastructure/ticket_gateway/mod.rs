// Remote ticket-creation port.
//
// Purpose
// - Describe the batch-create capability the purchase workflow submits
//   synthesized tickets through.
//
// Responsibilities
// - Persist a batch of ticket records as one logical unit; any error means
//   the caller assumes nothing was created (no partial-success contract).
//
// Boundaries
// - Transport policy (timeouts, retries) lives in the adapter, not here.
//
// Testing guidance
// - The in-memory implementation records accepted batches and can be
//   toggled offline or delayed for failure and double-submit tests.

use crate::modules::ticket_sales::core::ticket::TicketCreateRequest;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("batch rejected: {0}")]
    Rejected(String),

    #[error("transport error: {0}")]
    Transport(String),
}

#[async_trait]
pub trait TicketGateway: Send + Sync {
    async fn batch_create(&self, tickets: &[TicketCreateRequest]) -> Result<(), GatewayError>;
}

pub mod in_memory;
