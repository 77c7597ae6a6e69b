//! Reject a pending seller request. A reason is mandatory and is checked
//! before anything goes over the wire.

use anyhow::Result;

use crate::cli::commands::{build_client, confirm};
use crate::config;
use crate::moderation::{ModerationError, ModerationQueue};

pub struct RejectCommand {
    pub id: u64,
    pub reason: String,
    pub yes: bool,
}

impl RejectCommand {
    pub fn new(id: u64, reason: String, yes: bool) -> Self {
        Self { id, reason, yes }
    }

    pub async fn execute(&self) -> Result<()> {
        if self.reason.trim().is_empty() {
            println!("❗ A rejection reason is required - nothing was sent.");
            println!("   → sellerdesk reject {} --reason 'why it was declined'", self.id);
            return Ok(());
        }

        if !self.yes
            && !confirm(&format!(
                "Reject seller request #{} with reason \"{}\"?",
                self.id,
                self.reason.trim()
            ))?
        {
            println!("❌ Cancelled - nothing was sent.");
            return Ok(());
        }

        let cfg = config::config()?;
        let client = build_client()?;
        let mut queue = ModerationQueue::new(client, cfg.ui.page_size);

        print!("📤 Rejecting request #{}... ", self.id);
        std::io::Write::flush(&mut std::io::stdout())?;

        match queue.reject(self.id, &self.reason).await {
            Ok(()) => {
                println!("✅");
                println!();
                println!("✅ Request #{} rejected; the list was refreshed.", self.id);
                println!("   The applicant can re-apply with a new request.");
                Ok(())
            }
            Err(ModerationError::EmptyReason) => {
                println!("❌");
                println!("❗ A rejection reason is required - nothing was sent.");
                Ok(())
            }
            Err(ModerationError::Api(e)) if e.is_business() => {
                println!("❌");
                println!();
                println!("⚠️  {}", e.user_message());
                println!("   → Re-check the queue: sellerdesk queue");
                Ok(())
            }
            Err(e) => {
                println!("❌");
                println!();
                println!("❌ {e}");
                println!("   💡 Reject again once the problem is resolved.");
                Err(e.into())
            }
        }
    }
}
