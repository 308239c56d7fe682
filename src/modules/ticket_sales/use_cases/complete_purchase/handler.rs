// Complete-purchase handler orchestrates checkout.
//
// Responsibilities
// - Snapshot the cart, synthesize one create request per line and submit
//   them as a single batch; the batch call is the durability boundary.
// - On success append the materialized tickets to the ledger and clear the
//   cart; on any failure leave the cart untouched so the user can retry.
// - Convert every error to a boolean outcome at this boundary; callers get
//   `false` and a log line, never an Err or a panic.
// - Reject a submission while another is in flight (atomic single-flight
//   guard); UI button-disabling alone is not trusted.

use crate::modules::ticket_sales::core::ticket::issue_requests;
use crate::modules::ticket_sales::infrastructure::ticket_gateway::{GatewayError, TicketGateway};
use crate::modules::ticket_sales::use_cases::manage_cart::store::CartStore;
use crate::modules::ticket_sales::use_cases::view_tickets::ledger::TicketLedger;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use chrono::Utc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum PurchaseError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("another purchase is in flight")]
    InFlight,
}

pub struct CompletePurchaseHandler<S, G>
where
    S: KeyValueStore + 'static,
    G: TicketGateway + 'static,
{
    cart: Arc<Mutex<CartStore<S>>>,
    ledger: Arc<Mutex<TicketLedger<S>>>,
    gateway: Arc<G>,
    in_flight: AtomicBool,
}

impl<S, G> CompletePurchaseHandler<S, G>
where
    S: KeyValueStore + 'static,
    G: TicketGateway + 'static,
{
    pub fn new(
        cart: Arc<Mutex<CartStore<S>>>,
        ledger: Arc<Mutex<TicketLedger<S>>>,
        gateway: Arc<G>,
    ) -> Self {
        Self {
            cart,
            ledger,
            gateway,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Boolean outcome contract: `true` means the batch was accepted and the
    /// cart was cleared (trivially true for an empty cart), `false` means
    /// nothing changed and the caller may retry.
    pub async fn handle(&self, user_id: &str) -> bool {
        match self.try_handle(user_id).await {
            Ok(issued) => {
                info!(user_id, issued, "purchase completed");
                true
            }
            Err(error) => {
                warn!(user_id, %error, "purchase failed, cart preserved");
                false
            }
        }
    }

    async fn try_handle(&self, user_id: &str) -> Result<usize, PurchaseError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(PurchaseError::InFlight);
        }
        let result = self.run(user_id).await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn run(&self, user_id: &str) -> Result<usize, PurchaseError> {
        // The cart lock is held across the batch call so no mutation can
        // observe or interleave with a purchase in progress.
        let mut cart = self.cart.lock().await;
        let issued_at = Utc::now().timestamp_millis();
        let requests = issue_requests(cart.lines(), user_id, issued_at);
        if requests.is_empty() {
            return Ok(0);
        }

        self.gateway.batch_create(&requests).await?;

        let purchased = requests.iter().map(|r| r.to_purchased(issued_at)).collect();
        self.ledger.lock().await.append(purchased).await;
        cart.clear().await;
        Ok(requests.len())
    }
}
