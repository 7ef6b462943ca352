use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::orders::{CreateOrderRequest, CreateOrderResponse, OrderListResponse},
    error::ErrorBody,
    models::Order,
    routes::{health, orders},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        orders::create_order,
        orders::list_orders,
    ),
    components(
        schemas(
            Order,
            CreateOrderRequest,
            CreateOrderResponse,
            OrderListResponse,
            ErrorBody,
            health::HealthData,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Orders", description = "Order intake and listing"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
