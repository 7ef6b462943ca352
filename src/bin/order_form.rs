use std::env;

use anyhow::Context;

use webdev_order_api::{form::OrderDraft, wa};

/// Command-line stand-in for the browser order form: read a draft, validate
/// it, hand the visitor the pre-filled WhatsApp link right away and push the
/// order to the intake API in the background.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let path = env::args()
        .nth(1)
        .context("usage: order-form <draft.json>")?;
    let raw = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("reading draft from {path}"))?;
    let draft: OrderDraft = serde_json::from_str(&raw).context("parsing order draft")?;

    if let Err(err) = draft.validate() {
        eprintln!("{err}");
        std::process::exit(1);
    }

    let message = wa::build_order_message(&draft);
    let link = wa::build_wa_link(&message)?;

    let api_url = env::var("ORDER_API_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:3000/api/orders".to_string());

    // Fire-and-forget: the save must not delay the WhatsApp handoff, and its
    // outcome only ever reaches the log.
    let background_save = tokio::spawn(persist_draft(api_url, draft));

    println!("Buka WhatsApp: {link}");
    println!("Pemesanan Berhasil! Tim kami akan segera menghubungi Anda untuk konfirmasi.");

    // Keep the process alive long enough for the detached save to finish;
    // its result stays ignored.
    let _ = background_save.await;

    Ok(())
}

async fn persist_draft(api_url: String, draft: OrderDraft) {
    let client = reqwest::Client::new();
    match client.post(&api_url).json(&draft).send().await {
        Ok(response) if response.status().is_success() => {
            tracing::debug!(status = %response.status(), "background save ok");
        }
        Ok(response) => {
            tracing::warn!(status = %response.status(), "background save failed");
        }
        Err(err) => {
            tracing::warn!(error = %err, "background save failed");
        }
    }
}
