//! Approve a pending seller request.

use anyhow::Result;

use crate::cli::commands::{build_client, confirm};
use crate::config;
use crate::moderation::{ModerationError, ModerationQueue};

pub struct ApproveCommand {
    pub id: u64,
    pub yes: bool,
}

impl ApproveCommand {
    pub fn new(id: u64, yes: bool) -> Self {
        Self { id, yes }
    }

    pub async fn execute(&self) -> Result<()> {
        if !self.yes && !confirm(&format!("Approve seller request #{}?", self.id))? {
            println!("❌ Cancelled - nothing was sent.");
            return Ok(());
        }

        let cfg = config::config()?;
        let client = build_client()?;
        let mut queue = ModerationQueue::new(client, cfg.ui.page_size);

        print!("📤 Approving request #{}... ", self.id);
        std::io::Write::flush(&mut std::io::stdout())?;

        match queue.approve(self.id).await {
            Ok(()) => {
                println!("✅");
                println!();
                println!("✅ Request #{} approved; the list was refreshed.", self.id);
                println!("   → See the queue: sellerdesk queue --status pending");
                Ok(())
            }
            Err(ModerationError::Api(e)) if e.is_business() => {
                println!("❌");
                println!();
                // Usually decided by another reviewer in the meantime.
                println!("⚠️  {}", e.user_message());
                println!("   → Re-check the queue: sellerdesk queue");
                Ok(())
            }
            Err(e) => {
                println!("❌");
                println!();
                println!("❌ {e}");
                println!("   💡 Approve again once the problem is resolved.");
                Err(e.into())
            }
        }
    }
}
