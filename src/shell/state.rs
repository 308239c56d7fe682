use crate::modules::ticket_sales::infrastructure::catalog::Catalog;
use crate::modules::ticket_sales::infrastructure::ticket_gateway::in_memory::InMemoryTicketGateway;
use crate::modules::ticket_sales::use_cases::complete_purchase::handler::CompletePurchaseHandler;
use crate::modules::ticket_sales::use_cases::manage_cart::store::CartStore;
use crate::modules::ticket_sales::use_cases::view_tickets::ledger::TicketLedger;
use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub cart: Arc<Mutex<CartStore<InMemoryKeyValueStore>>>,
    pub ledger: Arc<Mutex<TicketLedger<InMemoryKeyValueStore>>>,
    pub catalog: Arc<dyn Catalog + Send + Sync>,
    pub checkout: Arc<CompletePurchaseHandler<InMemoryKeyValueStore, InMemoryTicketGateway>>,
}
