//! Show the session account and its current role set. This is the manual
//! refresh behind the "approved" banner; roles are never re-fetched
//! automatically.

use anyhow::Result;

use crate::cli::commands::{build_client, session_user_id};
use crate::session::Session;

pub struct WhoamiCommand;

impl WhoamiCommand {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(&self) -> Result<()> {
        let client = build_client()?;

        print!("🔄 Fetching your account... ");
        std::io::Write::flush(&mut std::io::stdout())?;
        let session = Session::establish(&client, session_user_id()?).await?;
        println!("✅");
        println!();

        let user = session.user();
        println!("👤 {} ({})", user.username, user.full_name);
        println!("   📧 {}", user.email);
        println!("   🔑 Roles: {}", user.role_names().join(", "));
        if !user.active {
            println!("   ⚠️  Account is inactive");
        }

        session.close();
        Ok(())
    }
}

impl Default for WhoamiCommand {
    fn default() -> Self {
        Self::new()
    }
}
