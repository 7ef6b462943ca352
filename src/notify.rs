use anyhow::Context;
use chrono::FixedOffset;

use crate::models::Order;

/// Build and dispatch the operator notification for a freshly stored order.
///
/// Dispatch currently goes to the log; callers treat any failure here as
/// non-fatal and the intake response never depends on it.
pub fn send_new_order_notification(order: &Order) -> anyhow::Result<()> {
    let message = build_operator_summary(order)?;
    tracing::info!(order_id = %order.id, "\n{message}");
    Ok(())
}

pub fn build_operator_summary(order: &Order) -> anyhow::Result<String> {
    let jakarta = FixedOffset::east_opt(7 * 3600).context("invalid Jakarta offset")?;
    let local_date = order
        .created_at
        .with_timezone(&jakarta)
        .format("%-d/%-m/%Y, %H.%M.%S");

    Ok(format!(
        "🚀 NEW WEBSITE ORDER - MEOWLABS.ID\n\
         \n\
         📋 Order Details:\n\
         • Order ID: {id}\n\
         • Full Name: {full_name}\n\
         • Business: {business_name}\n\
         • WhatsApp: {whatsapp}\n\
         • Email: {email}\n\
         \n\
         🌐 Website Requirements:\n\
         • Types: {types}\n\
         • Pages: {pages}\n\
         • Logo: {logo}\n\
         • Photos: {photos}\n\
         • Domain: {domain}\n\
         • Hosting: {hosting}\n\
         \n\
         🎨 Design Preferences:\n\
         • Colors: {colors}\n\
         • Reference: {reference}\n\
         • Notes: {notes}\n\
         \n\
         📅 Date: {date}",
        id = order.id,
        full_name = order.full_name,
        business_name = order.business_name,
        whatsapp = order.whatsapp,
        email = order.email,
        types = order.website_types.join(", "),
        pages = order.page_count,
        logo = or_not_specified(&order.logo_status),
        photos = or_not_specified(&order.photo_status),
        domain = order.domain,
        hosting = or_not_specified(&order.hosting_status),
        colors = or_not_specified(&order.main_color),
        reference = or_not_specified(&order.reference_website),
        notes = if order.special_notes.is_empty() {
            "None"
        } else {
            &order.special_notes
        },
        date = local_date,
    ))
}

fn or_not_specified(value: &str) -> &str {
    if value.is_empty() { "Not specified" } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_order() -> Order {
        Order {
            id: "ORD-20260828-0a1b2c3d".into(),
            full_name: "Ana".into(),
            business_name: "Toko Ana".into(),
            whatsapp: "08123456789".into(),
            email: "ana@toko.id".into(),
            website_types: vec!["blog".into(), "portfolio".into()],
            page_count: "3".into(),
            logo_status: "ada".into(),
            photo_status: String::new(),
            domain: "com".into(),
            hosting_status: "buat".into(),
            main_color: String::new(),
            reference_website: String::new(),
            special_notes: String::new(),
            status: "pending".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn summary_lists_types_and_placeholders() {
        let summary = build_operator_summary(&sample_order()).unwrap();
        assert!(summary.contains("• Order ID: ORD-20260828-0a1b2c3d"));
        assert!(summary.contains("• Types: blog, portfolio"));
        assert!(summary.contains("• Photos: Not specified"));
        assert!(summary.contains("• Colors: Not specified"));
        assert!(summary.contains("• Notes: None"));
        assert!(summary.contains("• Logo: ada"));
    }

    #[test]
    fn notification_is_best_effort_ok() {
        assert!(send_new_order_notification(&sample_order()).is_ok());
    }
}
