use anyhow::Context;

use crate::form::OrderDraft;

/// Agency WhatsApp number every submission is handed off to.
pub const WA_TARGET_NUMBER: &str = "6281223648245";

const BLANK_PLACEHOLDER: &str = "Belum ditentukan";
const SECTION_RULE: &str = "━━━━━━━━━━━━━━━━━━━━━";

/// The chat text the visitor lands on: every field of the draft, one section
/// per form step, with a placeholder wherever an optional field was left
/// blank.
pub fn build_order_message(draft: &OrderDraft) -> String {
    let types = draft
        .website_types
        .iter()
        .map(|t| format!("✓ {t}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "*PEMESANAN WEBSITE BARU - MEOWLABS.ID*\n\
         {rule}\n\
         \n\
         *DATA PEMESAN*\n\
         👤 Nama: {full_name}\n\
         🏢 Nama Usaha: {business_name}\n\
         📱 WhatsApp: {whatsapp}\n\
         📧 Email: {email}\n\
         \n\
         *JENIS WEBSITE*\n\
         {types}\n\
         \n\
         *INFORMASI KONTEN*\n\
         📄 Jumlah Halaman: {page_count}\n\
         🎨 Logo: {logo_status}\n\
         📸 Foto Produk/Layanan: {photo_status}\n\
         \n\
         *DOMAIN & HOSTING*\n\
         🌐 Domain: {domain}\n\
         🖥️ Hosting: {hosting_status}\n\
         \n\
         *DESAIN & PREFERENSI*\n\
         🎨 Warna Utama: {main_color}\n\
         🔗 Referensi Website: {reference_website}\n\
         \n\
         *CATATAN KHUSUS*\n\
         {special_notes}\n\
         \n\
         {rule}\n\
         _Pemesanan dikirim dari Form Meowlabs.id_",
        rule = SECTION_RULE,
        full_name = draft.full_name,
        business_name = draft.business_name,
        whatsapp = draft.whatsapp,
        email = draft.email,
        types = types,
        page_count = or_placeholder(&draft.page_count, BLANK_PLACEHOLDER),
        logo_status = draft.logo_status,
        photo_status = draft.photo_status,
        domain = draft.domain,
        hosting_status = draft.hosting_status,
        main_color = or_placeholder(&draft.main_color, BLANK_PLACEHOLDER),
        reference_website = or_placeholder(&draft.reference_website, "-"),
        special_notes = or_placeholder(&draft.special_notes, "-"),
    )
}

/// Messaging deep link: the message URL-encoded into the `text` parameter of
/// the fixed wa.me target.
pub fn build_wa_link(message: &str) -> anyhow::Result<String> {
    let url = reqwest::Url::parse_with_params(
        &format!("https://wa.me/{WA_TARGET_NUMBER}"),
        [("text", message)],
    )
    .context("building wa.me link")?;
    Ok(url.into())
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() { placeholder } else { value }
}
