use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CheckoutBody {
    pub user_id: String,
}

#[derive(Serialize)]
pub struct CheckoutResponse {
    pub success: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CheckoutBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    if body.user_id.trim().is_empty() {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    }

    if state.checkout.handle(&body.user_id).await {
        Json(CheckoutResponse { success: true }).into_response()
    } else {
        (
            StatusCode::BAD_GATEWAY,
            Json(CheckoutResponse { success: false }),
        )
            .into_response()
    }
}
