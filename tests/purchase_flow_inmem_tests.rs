// End to end in memory test for the cart to purchased-ticket flow.
//
// Wires only in-memory infrastructure: key-value storage, seeded catalog,
// ticket gateway. Exercises add-to-cart, checkout, ledger materialization,
// qr rendering and rehydration across a simulated restart.

use std::sync::Arc;

use ticket_sales::modules::ticket_sales::core::cart::CartLineItem;
use ticket_sales::modules::ticket_sales::core::symbol::{DEFAULT_DIMENSION, generate_grid};
use ticket_sales::modules::ticket_sales::infrastructure::catalog::Catalog;
use ticket_sales::modules::ticket_sales::infrastructure::catalog::in_memory::InMemoryCatalog;
use ticket_sales::modules::ticket_sales::infrastructure::ticket_gateway::in_memory::InMemoryTicketGateway;
use ticket_sales::modules::ticket_sales::use_cases::complete_purchase::handler::CompletePurchaseHandler;
use ticket_sales::modules::ticket_sales::use_cases::manage_cart::store::CartStore;
use ticket_sales::modules::ticket_sales::use_cases::view_tickets::ledger::TicketLedger;
use ticket_sales::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use tokio::sync::Mutex;

async fn add_from_catalog(
    cart: &mut CartStore<InMemoryKeyValueStore>,
    catalog: &InMemoryCatalog,
    event_id: &str,
    ticket_type_id: &str,
    quantity: u32,
) {
    let ticket_type = catalog
        .ticket_type(event_id, ticket_type_id)
        .await
        .expect("catalog lookup failed")
        .expect("ticket type missing");
    cart.add_item(CartLineItem {
        event_id: event_id.to_string(),
        ticket_type_id: ticket_type_id.to_string(),
        quantity,
        unit_price_cents: ticket_type.price_cents,
    })
    .await;
}

#[tokio::test]
async fn it_should_move_cart_lines_into_the_ledger_on_checkout() {
    let storage = Arc::new(InMemoryKeyValueStore::new());
    let catalog = InMemoryCatalog::seeded();
    let gateway = Arc::new(InMemoryTicketGateway::new());

    let mut cart = CartStore::load(storage.clone()).await;
    add_from_catalog(&mut cart, &catalog, "1", "vip", 2).await;
    add_from_catalog(&mut cart, &catalog, "2", "geral", 1).await;
    assert_eq!(cart.total_price_cents(), 12_000);

    let cart = Arc::new(Mutex::new(cart));
    let ledger = Arc::new(Mutex::new(TicketLedger::load(storage.clone()).await));
    let handler = CompletePurchaseHandler::new(cart.clone(), ledger.clone(), gateway.clone());

    assert!(handler.handle("user-1").await);

    // Cart moved, not copied: lines are gone, tickets exist locally and at
    // the gateway with the same client-generated ids.
    assert!(cart.lock().await.is_empty());
    let ledger = ledger.lock().await;
    assert_eq!(ledger.all().len(), 2);
    let created = gateway.created().await;
    assert_eq!(created.len(), 2);
    for (ticket, request) in ledger.all().iter().zip(created.iter()) {
        assert_eq!(ticket.id, request.id);
        assert_eq!(ticket.qr_code, request.qr_code);
    }

    // Every ticket renders a deterministic grid off its payload.
    for ticket in ledger.all() {
        let first = generate_grid(&ticket.qr_code, DEFAULT_DIMENSION);
        let second = generate_grid(&ticket.qr_code, DEFAULT_DIMENSION);
        assert_eq!(first, second);
    }

    // A restart rehydrates both collections from storage.
    let rehydrated_cart = CartStore::load(storage.clone()).await;
    assert!(rehydrated_cart.is_empty());
    let rehydrated_ledger = TicketLedger::load(storage).await;
    assert_eq!(rehydrated_ledger.all().len(), 2);
}

#[tokio::test]
async fn it_should_leave_everything_in_place_when_the_gateway_is_down() {
    let storage = Arc::new(InMemoryKeyValueStore::new());
    let catalog = InMemoryCatalog::seeded();
    let mut gateway = InMemoryTicketGateway::new();
    gateway.toggle_offline();
    let gateway = Arc::new(gateway);

    let mut cart = CartStore::load(storage.clone()).await;
    add_from_catalog(&mut cart, &catalog, "1", "vip", 2).await;
    add_from_catalog(&mut cart, &catalog, "2", "geral", 1).await;

    let cart = Arc::new(Mutex::new(cart));
    let ledger = Arc::new(Mutex::new(TicketLedger::load(storage.clone()).await));
    let handler = CompletePurchaseHandler::new(cart.clone(), ledger.clone(), gateway.clone());

    assert!(!handler.handle("user-1").await);

    assert_eq!(cart.lock().await.lines().len(), 2);
    assert!(ledger.lock().await.all().is_empty());
    assert!(gateway.created().await.is_empty());

    // The preserved cart survives a restart, so the user can retry later.
    let rehydrated = CartStore::load(storage).await;
    assert_eq!(rehydrated.total_items(), 3);
}
