use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::ticket_sales::core::symbol::{DEFAULT_DIMENSION, generate_grid, render_ascii};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CodeQuery {
    pub format: Option<String>,
}

#[derive(Serialize)]
pub struct CodeView {
    pub dimension: usize,
    pub rows: Vec<Vec<bool>>,
}

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    let ledger = state.ledger.lock().await;
    Json(ledger.all().to_vec()).into_response()
}

/// Renders the ticket's qr payload as a symbol grid, recomputed on every
/// request; the grid is derived state and never stored.
pub async fn code(
    State(state): State<AppState>,
    Path(ticket_id): Path<String>,
    Query(query): Query<CodeQuery>,
) -> impl IntoResponse {
    let ledger = state.ledger.lock().await;
    let Some(ticket) = ledger.find(&ticket_id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let grid = generate_grid(&ticket.qr_code, DEFAULT_DIMENSION);
    match query.format.as_deref() {
        Some("text") => render_ascii(&grid).into_response(),
        _ => Json(CodeView {
            dimension: grid.dimension(),
            rows: grid.to_rows(),
        })
        .into_response(),
    }
}
