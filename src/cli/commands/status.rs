use anyhow::Result;

use crate::cli::commands::build_client;
use crate::status_view::{StatusPoller, StatusView};

pub struct StatusCommand;

impl StatusCommand {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(&self) -> Result<()> {
        let client = build_client()?;
        let poller = StatusPoller::new(client);

        print!("🔄 Checking your application status... ");
        std::io::Write::flush(&mut std::io::stdout())?;

        match poller.fetch().await {
            Ok(view) => {
                println!("✅");
                println!();
                render(&view);
                Ok(())
            }
            Err(e) => {
                println!("❌");
                println!();
                println!("❌ {}", e.user_message());
                Err(e.into())
            }
        }
    }
}

impl Default for StatusCommand {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn render(view: &StatusView) {
    match view {
        StatusView::Wizard => {
            println!("📝 No seller application on file.");
            println!("   → Start one with: sellerdesk register");
        }
        StatusView::Pending => {
            println!("⏳ Your seller application is PENDING review.");
            println!("   Nothing to do right now - a reviewer will pick it up.");
        }
        StatusView::Approved => {
            println!("🎉 Your seller application was APPROVED!");
            println!("   → Refresh your roles with: sellerdesk whoami");
        }
        StatusView::Rejected { reason } => {
            println!("⚠️  Your seller application was REJECTED.");
            if let Some(reason) = reason {
                println!("   Reviewer's reason: {reason}");
            }
            println!("   → Apply again with: sellerdesk register");
        }
    }
}
