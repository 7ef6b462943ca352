use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use sea_orm::ActiveModelTrait;
use sea_orm::{EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::orders::{CreateOrderRequest, CreateOrderResponse, OrderListResponse},
    entity::orders::{
        ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel,
    },
    error::{AppError, AppResult},
    models::Order,
    notify,
    state::AppState,
};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub async fn create_order(
    state: &AppState,
    payload: CreateOrderRequest,
) -> AppResult<CreateOrderResponse> {
    validate(&payload)?;

    let now = Utc::now();
    let order_id = build_order_id(Uuid::new_v4(), now);

    let model = OrderActive {
        id: Set(order_id),
        full_name: Set(payload.full_name.trim().to_string()),
        business_name: Set(payload.business_name.trim().to_string()),
        whatsapp: Set(payload.whatsapp.trim().to_string()),
        email: Set(payload.email.trim().to_lowercase()),
        website_types: Set(serde_json::to_string(&payload.website_types)?),
        page_count: Set(payload.page_count.trim().to_string()),
        logo_status: Set(payload.logo_status.clone()),
        photo_status: Set(payload.photo_status.clone()),
        domain: Set(payload.domain.trim().to_string()),
        hosting_status: Set(payload.hosting_status.clone()),
        main_color: Set(payload.main_color.trim().to_string()),
        reference_website: Set(payload.reference_website.trim().to_string()),
        special_notes: Set(payload.special_notes.trim().to_string()),
        status: Set("pending".into()),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&state.orm)
    .await?;

    let order = order_from_entity(model)?;

    tracing::info!(order_id = %order.id, business = %order.business_name, "new order stored");

    // Best effort only: a notification failure must never fail the intake.
    if let Err(err) = notify::send_new_order_notification(&order) {
        tracing::warn!(error = %err, "order notification failed");
    }

    Ok(CreateOrderResponse {
        success: true,
        message: "Pemesanan berhasil disimpan".into(),
        order_id: order.id.clone(),
        data: order,
    })
}

pub async fn list_orders(state: &AppState) -> AppResult<OrderListResponse> {
    let orders = Orders::find()
        .order_by_desc(OrderCol::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(order_from_entity)
        .collect::<AppResult<Vec<_>>>()?;

    Ok(OrderListResponse {
        success: true,
        orders,
    })
}

/// Server-side validation, in the same order the form applies it.
fn validate(payload: &CreateOrderRequest) -> AppResult<()> {
    let required = [
        &payload.full_name,
        &payload.business_name,
        &payload.whatsapp,
        &payload.email,
        &payload.page_count,
        &payload.domain,
    ];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(AppError::Validation(
            "Field yang wajib diisi tidak boleh kosong".into(),
        ));
    }

    if !EMAIL_RE.is_match(payload.email.trim()) {
        return Err(AppError::Validation("Format email tidak valid".into()));
    }

    if !is_valid_whatsapp(payload.whatsapp.trim()) {
        return Err(AppError::Validation(
            "Format nomor WhatsApp tidak valid".into(),
        ));
    }

    if payload.website_types.is_empty() {
        return Err(AppError::Validation("Pilih minimal satu jenis website".into()));
    }

    Ok(())
}

fn is_valid_whatsapp(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
}

fn order_from_entity(model: OrderModel) -> AppResult<Order> {
    let website_types: Vec<String> = serde_json::from_str(&model.website_types)?;
    Ok(Order {
        id: model.id,
        full_name: model.full_name,
        business_name: model.business_name,
        whatsapp: model.whatsapp,
        email: model.email,
        website_types,
        page_count: model.page_count,
        logo_status: model.logo_status,
        photo_status: model.photo_status,
        domain: model.domain,
        hosting_status: model.hosting_status,
        main_color: model.main_color,
        reference_website: model.reference_website,
        special_notes: model.special_notes,
        status: model.status,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}

fn build_order_id(seed: Uuid, now: DateTime<Utc>) -> String {
    let date = now.format("%Y%m%d");
    let suffix = seed.to_string();
    let short = &suffix[..8];
    format!("ORD-{}-{}", date, short)
}
