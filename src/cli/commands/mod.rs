use anyhow::Result;

use crate::api::ApiClient;
use crate::config;

pub mod approve;
pub mod assign;
pub mod queue;
pub mod register;
pub mod reject;
pub mod status;
pub mod whoami;

/// Build the API client from the loaded configuration.
pub fn build_client() -> Result<ApiClient> {
    let cfg = config::config()?;
    let client = ApiClient::from_config(&cfg.api)?;
    Ok(client)
}

/// The account id the session runs as, or a setup hint.
pub fn session_user_id() -> Result<u64> {
    let cfg = config::config()?;
    cfg.api.user_id.ok_or_else(|| {
        anyhow::anyhow!(
            "no user id configured. Set SELLERDESK_USER_ID or add `user_id` to the [api] \
             section of sellerdesk.toml"
        )
    })
}

pub async fn show_how_to_get_started() -> Result<()> {
    println!("🛍️  sellerdesk - Seller Onboarding & Moderation Console");
    println!();
    println!("Seller commands:");
    println!("  📝 sellerdesk register      # Apply for the SELLER role");
    println!("  📄 sellerdesk status        # Check your application status");
    println!("  👤 sellerdesk whoami        # Show your account and roles");
    println!();
    println!("Reviewer commands:");
    println!("  📋 sellerdesk queue         # Browse the moderation queue");
    println!("  ✅ sellerdesk approve <id>  # Approve a pending request");
    println!("  ❌ sellerdesk reject <id> --reason '...'");
    println!("  🔑 sellerdesk assign-roles <user-id> --add SELLER");
    println!();
    println!("💡 Start with 'sellerdesk status' to see where you stand.");
    Ok(())
}

/// Prompt for one line of input. Returns the trimmed answer.
pub(crate) fn prompt(label: &str) -> Result<String> {
    use std::io::Write;
    print!("{label}: ");
    std::io::stdout().flush()?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// `[y/N]` confirmation prompt.
pub(crate) fn confirm(question: &str) -> Result<bool> {
    let answer = prompt(&format!("{question} [y/N]"))?;
    let answer = answer.to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
