//! Moderation queue listing.

use anyhow::Result;

use crate::api::{SellerRequest, StatusFilter};
use crate::cli::commands::build_client;
use crate::config;
use crate::moderation::ModerationQueue;

pub struct QueueCommand {
    pub page: u32,
    pub size: Option<u32>,
    pub status: StatusFilter,
    pub wide: bool,
}

impl QueueCommand {
    pub fn new(page: u32, size: Option<u32>, status: StatusFilter, wide: bool) -> Self {
        Self {
            page,
            size,
            status,
            wide,
        }
    }

    pub async fn execute(&self) -> Result<()> {
        let cfg = config::config()?;
        let client = build_client()?;
        let page_size = self.size.unwrap_or(cfg.ui.page_size);

        let mut queue = ModerationQueue::new(client, page_size);
        queue.set_filter(self.status);
        queue.set_page(self.page);

        print!("🔄 Fetching seller requests... ");
        std::io::Write::flush(&mut std::io::stdout())?;
        if let Err(e) = queue.refresh().await {
            println!("❌");
            println!("❌ {}", e.user_message());
            return Err(e.into());
        }
        println!("✅");
        println!();

        if queue.rows().is_empty() {
            println!("📋 No seller requests match this filter");
            println!(
                "   💡 Try a different filter: sellerdesk queue --status pending"
            );
            return Ok(());
        }

        println!(
            "📋 SELLER REQUESTS - page {}/{} ({} total, filter: {})",
            queue.page() + 1,
            queue.total_pages().max(1),
            queue.total_elements(),
            queue.filter().as_param()
        );
        println!("──────────────────────────────────────────────");
        for request in queue.rows() {
            render_row(request, self.wide);
        }
        println!();
        println!("💡 Approve with 'sellerdesk approve <id>', reject with 'sellerdesk reject <id> --reason ...'");
        Ok(())
    }
}

fn render_row(request: &SellerRequest, wide: bool) {
    let marker = match request.status {
        crate::api::RequestStatus::Pending => "⏳",
        crate::api::RequestStatus::Approved => "✅",
        crate::api::RequestStatus::Rejected => "❌",
    };
    println!(
        " {} #{} {} - {} ({}) [{}]",
        marker,
        request.id,
        request.shop_name,
        request.requester.username,
        request.seller_type,
        request.status
    );
    if wide {
        println!("      📍 {}", request.address);
        println!("      📄 {}", request.description);
        println!(
            "      🏦 {} / {}{}",
            request.bank_name,
            request.bank_account,
            request
                .tax_number
                .as_deref()
                .map(|t| format!(" (tax: {t})"))
                .unwrap_or_default()
        );
        for (label, url) in [
            ("ID front", &request.id_card_front),
            ("ID back", &request.id_card_back),
            ("License", &request.business_license),
        ] {
            if let Some(url) = url {
                println!("      🖼️  {label}: {url}");
            }
        }
        if let Some(reason) = &request.rejection_reason {
            println!("      ⚠️  Rejected: {reason}");
        }
        if let Some(reviewer) = &request.reviewed_by {
            println!("      👤 Reviewed by: {reviewer}");
        }
    }
}
