use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::ticket_sales::use_cases::complete_purchase::inbound::http as checkout_http;
use crate::modules::ticket_sales::use_cases::manage_cart::inbound::http as cart_http;
use crate::modules::ticket_sales::use_cases::view_tickets::inbound::http as tickets_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/cart", get(cart_http::get_cart).delete(cart_http::clear_cart))
        .route(
            "/cart/items",
            post(cart_http::add_item).put(cart_http::update_quantity),
        )
        .route(
            "/cart/items/{event_id}/{ticket_type_id}",
            delete(cart_http::remove_item),
        )
        .route("/checkout", post(checkout_http::handle))
        .route("/tickets", get(tickets_http::list))
        .route("/tickets/{ticket_id}/code", get(tickets_http::code))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
