use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub full_name: String,
    pub business_name: String,
    pub whatsapp: String,
    pub email: String,
    /// JSON-encoded list; must round-trip exactly through store and listing.
    pub website_types: String,
    pub page_count: String,
    pub logo_status: String,
    pub photo_status: String,
    pub domain: String,
    pub hosting_status: String,
    pub main_color: String,
    pub reference_website: String,
    pub special_notes: String,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
