// Shared wiring for inbound adapter tests: a full AppState over in-memory
// infrastructure, mirroring what main assembles.

use crate::modules::ticket_sales::infrastructure::catalog::in_memory::InMemoryCatalog;
use crate::modules::ticket_sales::infrastructure::ticket_gateway::in_memory::InMemoryTicketGateway;
use crate::modules::ticket_sales::use_cases::complete_purchase::handler::CompletePurchaseHandler;
use crate::modules::ticket_sales::use_cases::manage_cart::store::CartStore;
use crate::modules::ticket_sales::use_cases::view_tickets::ledger::TicketLedger;
use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use crate::shell::state::AppState;
use std::sync::Arc;
use tokio::sync::Mutex;

async fn make_state(gateway: InMemoryTicketGateway) -> AppState {
    let storage = Arc::new(InMemoryKeyValueStore::new());
    let cart = Arc::new(Mutex::new(CartStore::load(storage.clone()).await));
    let ledger = Arc::new(Mutex::new(TicketLedger::load(storage).await));
    let gateway = Arc::new(gateway);
    let checkout = Arc::new(CompletePurchaseHandler::new(
        cart.clone(),
        ledger.clone(),
        gateway,
    ));
    AppState {
        cart,
        ledger,
        catalog: Arc::new(InMemoryCatalog::seeded()),
        checkout,
    }
}

pub async fn make_test_state() -> AppState {
    make_state(InMemoryTicketGateway::new()).await
}

pub async fn make_offline_gateway_state() -> AppState {
    let mut gateway = InMemoryTicketGateway::new();
    gateway.toggle_offline();
    make_state(gateway).await
}
