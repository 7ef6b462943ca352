use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::orders::{CreateOrderRequest, CreateOrderResponse, OrderListResponse},
    error::AppResult,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_order))
        .route("/", get(list_orders))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order stored", body = CreateOrderResponse),
        (status = 400, description = "Validation failed", body = crate::error::ErrorBody),
        (status = 500, description = "Internal error", body = crate::error::ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<CreateOrderResponse>> {
    let response = order_service::create_order(&state, payload).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "All orders, newest first", body = OrderListResponse),
        (status = 500, description = "Internal error", body = crate::error::ErrorBody),
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<OrderListResponse>> {
    let response = order_service::list_orders(&state).await?;
    Ok(Json(response))
}
