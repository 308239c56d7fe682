use axum::{
    Json,
    extract::{Path, State},
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::ticket_sales::core::cart::CartLineItem;
use crate::modules::ticket_sales::use_cases::manage_cart::store::CartStore;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddItemBody {
    pub event_id: String,
    pub ticket_type_id: String,
    pub quantity: u32,
}

#[derive(Deserialize)]
pub struct UpdateQuantityBody {
    pub event_id: String,
    pub ticket_type_id: String,
    pub quantity: u32,
}

#[derive(Serialize)]
pub struct CartView {
    pub lines: Vec<CartLineItem>,
    pub total_price_cents: i64,
    pub total_items: u32,
}

fn view<S: KeyValueStore + 'static>(cart: &CartStore<S>) -> CartView {
    CartView {
        lines: cart.lines().to_vec(),
        total_price_cents: cart.total_price_cents(),
        total_items: cart.total_items(),
    }
}

pub async fn get_cart(State(state): State<AppState>) -> impl IntoResponse {
    let cart = state.cart.lock().await;
    Json(view(&cart)).into_response()
}

pub async fn add_item(
    State(state): State<AppState>,
    body: Result<Json<AddItemBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    if body.quantity == 0 {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    }

    // The price is captured from the catalog at add time, not trusted from
    // the client.
    let ticket_type = match state
        .catalog
        .ticket_type(&body.event_id, &body.ticket_type_id)
        .await
    {
        Ok(Some(tt)) => tt,
        Ok(None) => return StatusCode::NOT_FOUND.into_response(),
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };

    let mut cart = state.cart.lock().await;
    cart.add_item(CartLineItem {
        event_id: body.event_id,
        ticket_type_id: body.ticket_type_id,
        quantity: body.quantity,
        unit_price_cents: ticket_type.price_cents,
    })
    .await;
    (StatusCode::CREATED, Json(view(&cart))).into_response()
}

pub async fn update_quantity(
    State(state): State<AppState>,
    body: Result<Json<UpdateQuantityBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let mut cart = state.cart.lock().await;
    cart.update_quantity(&body.event_id, &body.ticket_type_id, body.quantity)
        .await;
    Json(view(&cart)).into_response()
}

pub async fn remove_item(
    State(state): State<AppState>,
    Path((event_id, ticket_type_id)): Path<(String, String)>,
) -> impl IntoResponse {
    let mut cart = state.cart.lock().await;
    cart.remove_item(&event_id, &ticket_type_id).await;
    Json(view(&cart)).into_response()
}

pub async fn clear_cart(State(state): State<AppState>) -> impl IntoResponse {
    let mut cart = state.cart.lock().await;
    cart.clear().await;
    Json(view(&cart)).into_response()
}
