use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One form submission: a prospective website-development request.
///
/// Orders are written once with status `"pending"` and never mutated by this
/// service; any follow-up workflow happens outside of it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
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
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
