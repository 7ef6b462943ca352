use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Order;

/// Intake payload: the order draft as the form posts it.
///
/// Every field defaults so that an absent key deserializes to its empty
/// value; presence is enforced by the validation rules, which answer with a
/// 400 and a rule-specific message instead of a deserialization failure.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateOrderRequest {
    pub full_name: String,
    pub business_name: String,
    pub whatsapp: String,
    pub email: String,
    pub website_types: Vec<String>,
    pub page_count: String,
    pub logo_status: String,
    pub photo_status: String,
    pub domain: String,
    pub hosting_status: String,
    pub main_color: String,
    pub reference_website: String,
    pub special_notes: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub success: bool,
    pub message: String,
    pub order_id: String,
    pub data: Order,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderListResponse {
    pub success: bool,
    pub orders: Vec<Order>,
}
