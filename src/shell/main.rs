use std::sync::Arc;

use ticket_sales::modules::ticket_sales::infrastructure::catalog::in_memory::InMemoryCatalog;
use ticket_sales::modules::ticket_sales::infrastructure::ticket_gateway::in_memory::InMemoryTicketGateway;
use ticket_sales::modules::ticket_sales::use_cases::complete_purchase::handler::CompletePurchaseHandler;
use ticket_sales::modules::ticket_sales::use_cases::manage_cart::store::CartStore;
use ticket_sales::modules::ticket_sales::use_cases::view_tickets::ledger::TicketLedger;
use ticket_sales::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use ticket_sales::shell::config::ServerConfig;
use ticket_sales::shell::http::router;
use ticket_sales::shell::state::AppState;
use tokio::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();

    let storage = Arc::new(InMemoryKeyValueStore::new());
    let cart = Arc::new(Mutex::new(CartStore::load(storage.clone()).await));
    let ledger = Arc::new(Mutex::new(TicketLedger::load(storage).await));
    let gateway = Arc::new(InMemoryTicketGateway::new());
    let checkout = Arc::new(CompletePurchaseHandler::new(
        cart.clone(),
        ledger.clone(),
        gateway,
    ));
    let state = AppState {
        cart,
        ledger,
        catalog: Arc::new(InMemoryCatalog::seeded()),
        checkout,
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %config.bind_addr(), "ticket_sales listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
