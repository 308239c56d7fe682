// Cart store: the pure cart state machine behind a persistence boundary.
//
// Purpose
// - Apply cart transitions and save the full line collection to the
//   key-value store after every mutation.
//
// Responsibilities
// - Rehydrate from storage before accepting mutations; construction is only
//   possible through `load`, so no mutation can precede rehydration.
// - Degrade to an empty cart on unreadable or corrupt stored state.
// - Log persistence failures without rolling back the in-memory state; the
//   cart must keep working when device storage misbehaves.

use crate::modules::ticket_sales::core::cart::{Cart, CartLineItem};
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use std::sync::Arc;
use tracing::warn;

pub const CART_STORAGE_KEY: &str = "cart.line_items";

pub struct CartStore<S: KeyValueStore + 'static> {
    storage: Arc<S>,
    cart: Cart,
}

impl<S: KeyValueStore + 'static> CartStore<S> {
    pub async fn load(storage: Arc<S>) -> Self {
        let cart = match storage.get(CART_STORAGE_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartLineItem>>(&raw) {
                Ok(lines) => Cart::from_lines(lines),
                Err(error) => {
                    warn!(%error, "stored cart is corrupt, starting empty");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(error) => {
                warn!(%error, "could not read stored cart, starting empty");
                Cart::new()
            }
        };
        Self { storage, cart }
    }

    pub async fn add_item(&mut self, item: CartLineItem) {
        self.cart.add_item(item);
        self.persist().await;
    }

    pub async fn remove_item(&mut self, event_id: &str, ticket_type_id: &str) {
        self.cart.remove_item(event_id, ticket_type_id);
        self.persist().await;
    }

    pub async fn update_quantity(
        &mut self,
        event_id: &str,
        ticket_type_id: &str,
        new_quantity: u32,
    ) {
        self.cart.update_quantity(event_id, ticket_type_id, new_quantity);
        self.persist().await;
    }

    pub async fn clear(&mut self) {
        self.cart.clear();
        self.persist().await;
    }

    pub fn lines(&self) -> &[CartLineItem] {
        self.cart.lines()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn total_price_cents(&self) -> i64 {
        self.cart.total_price_cents()
    }

    pub fn total_items(&self) -> u32 {
        self.cart.total_items()
    }

    async fn persist(&self) {
        let raw = match serde_json::to_string(self.cart.lines()) {
            Ok(raw) => raw,
            Err(error) => {
                warn!(%error, "could not serialize cart");
                return;
            }
        };
        if let Err(error) = self.storage.set(CART_STORAGE_KEY, &raw).await {
            warn!(%error, "could not persist cart");
        }
    }
}

#[cfg(test)]
mod cart_store_tests {
    use super::*;
    use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
    use rstest::rstest;

    fn line(event_id: &str, ticket_type_id: &str, quantity: u32) -> CartLineItem {
        CartLineItem {
            event_id: event_id.to_string(),
            ticket_type_id: ticket_type_id.to_string(),
            quantity,
            unit_price_cents: 5000,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_persist_every_mutation() {
        let storage = Arc::new(InMemoryKeyValueStore::new());
        let mut store = CartStore::load(storage.clone()).await;
        store.add_item(line("1", "vip", 2)).await;

        let raw = storage
            .get(CART_STORAGE_KEY)
            .await
            .expect("get failed")
            .expect("nothing persisted");
        let persisted: Vec<CartLineItem> = serde_json::from_str(&raw).expect("bad json");
        assert_eq!(persisted, vec![line("1", "vip", 2)]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_rehydrate_from_storage() {
        let storage = Arc::new(InMemoryKeyValueStore::new());
        {
            let mut store = CartStore::load(storage.clone()).await;
            store.add_item(line("1", "vip", 2)).await;
            store.add_item(line("2", "geral", 1)).await;
        }
        let store = CartStore::load(storage).await;
        assert_eq!(store.lines().len(), 2);
        assert_eq!(store.total_items(), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_start_empty_when_stored_state_is_corrupt() {
        let storage = Arc::new(InMemoryKeyValueStore::new());
        storage
            .set(CART_STORAGE_KEY, "{not json")
            .await
            .expect("set failed");
        let store = CartStore::load(storage).await;
        assert!(store.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_start_empty_when_storage_is_unreadable() {
        let mut storage = InMemoryKeyValueStore::new();
        storage.toggle_offline();
        let store = CartStore::load(Arc::new(storage)).await;
        assert!(store.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_the_in_memory_cart_when_persistence_fails() {
        let mut storage = InMemoryKeyValueStore::new();
        storage.toggle_offline();
        let mut store = CartStore::load(Arc::new(storage)).await;
        store.add_item(line("1", "vip", 2)).await;
        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.total_items(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_merge_and_total_through_the_store() {
        let storage = Arc::new(InMemoryKeyValueStore::new());
        let mut store = CartStore::load(storage).await;
        store.add_item(line("1", "vip", 2)).await;
        store.add_item(line("1", "vip", 3)).await;
        store.update_quantity("1", "vip", 4).await;
        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.total_price_cents(), 20_000);
        store.remove_item("1", "vip").await;
        assert!(store.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_clear_and_persist_the_empty_collection() {
        let storage = Arc::new(InMemoryKeyValueStore::new());
        let mut store = CartStore::load(storage.clone()).await;
        store.add_item(line("1", "vip", 2)).await;
        store.clear().await;
        let raw = storage
            .get(CART_STORAGE_KEY)
            .await
            .expect("get failed")
            .expect("nothing persisted");
        assert_eq!(raw, "[]");
    }
}
