//! Role assignment for a target user, guarded by the reviewer's own roles.

use anyhow::Result;

use crate::api::DirectoryApi;
use crate::cli::commands::{build_client, confirm, session_user_id};
use crate::roles::{guard, RoleAssignmentDialog, RoleDialogError};
use crate::session::Session;

pub struct AssignRolesCommand {
    pub user_id: u64,
    pub add: Vec<String>,
    pub remove: Vec<String>,
    pub yes: bool,
}

impl AssignRolesCommand {
    pub fn new(user_id: u64, add: Vec<String>, remove: Vec<String>, yes: bool) -> Self {
        Self {
            user_id,
            add,
            remove,
            yes,
        }
    }

    pub async fn execute(&self) -> Result<()> {
        let client = build_client()?;

        print!("🔄 Loading accounts and role catalog... ");
        std::io::Write::flush(&mut std::io::stdout())?;

        let session = Session::establish(&client, session_user_id()?).await?;
        let target = client.fetch_user(self.user_id).await?;
        let catalog = client.fetch_roles().await?;
        println!("✅");
        println!();

        let mut dialog = match RoleAssignmentDialog::open(session.user(), target, catalog) {
            Ok(dialog) => dialog,
            Err(RoleDialogError::TargetLocked) => {
                println!("🚫 You are not permitted to modify this user's roles.");
                println!("   (STAFF reviewers cannot act on an ADMIN-holding account.)");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        println!(
            "👤 {} ({})",
            dialog.target().username,
            dialog.target().full_name
        );
        println!(
            "   Current roles: {}",
            dialog.target().role_names().join(", ")
        );
        println!();
        println!("Selectable roles:");
        for role in dialog.selectable() {
            let mark = if dialog.is_selected(role.id) { "x" } else { " " };
            println!("   [{mark}] {} (#{})", role.name, role.id);
        }

        // Apply the requested toggles by role name.
        for name in self.add.iter().chain(self.remove.iter()) {
            let wanted_on = self.add.contains(name);
            let name_upper = name.to_ascii_uppercase();
            let Some(role_id) = dialog
                .selectable()
                .iter()
                .find(|r| r.name == name_upper)
                .map(|r| r.id)
            else {
                println!();
                println!("🚫 Role '{name_upper}' is not selectable here.");
                if name_upper == guard::ADMIN {
                    println!("   (Only an ADMIN reviewer may grant or revoke ADMIN.)");
                }
                return Ok(());
            };
            if dialog.is_selected(role_id) != wanted_on {
                dialog.toggle(role_id)?;
            }
        }

        println!();
        println!("New role-id set: {:?}", dialog.role_ids());
        if !self.yes && !confirm("Save this role set?")? {
            println!("❌ Cancelled - nothing was sent.");
            return Ok(());
        }

        print!("📤 Saving roles... ");
        std::io::Write::flush(&mut std::io::stdout())?;
        match dialog.save(&client).await {
            Ok(()) => {
                println!("✅");
                println!("✅ Roles updated for {}.", dialog.target().username);
                Ok(())
            }
            Err(RoleDialogError::Api(e)) => {
                println!("❌");
                println!("❌ {}", e.user_message());
                println!("   💡 Save again once the problem is resolved.");
                Ok(())
            }
            Err(e) => {
                println!("❌");
                println!("❌ {e}");
                Err(e.into())
            }
        }
    }
}
