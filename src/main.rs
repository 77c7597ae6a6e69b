use anyhow::Result;
use clap::{Parser, Subcommand};

use sellerdesk::api::StatusFilter;
use sellerdesk::cli::commands::{
    approve::ApproveCommand, assign::AssignRolesCommand, queue::QueueCommand,
    register::RegisterCommand, reject::RejectCommand, show_how_to_get_started,
    status::StatusCommand, whoami::WhoamiCommand,
};

#[derive(Parser)]
#[command(name = "sellerdesk")]
#[command(about = "Seller onboarding and role moderation console")]
#[command(long_about = "Sellerdesk drives the seller-onboarding workflow of the shop backend: \
                       apply for the SELLER role through the registration wizard, follow your \
                       application's moderation status, and (as a reviewer) work the approval \
                       queue and assign roles.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply for the SELLER role through the 4-step registration wizard
    Register,
    /// Show the moderation status of your own application
    Status,
    /// Browse the moderation queue (reviewers)
    Queue {
        /// Zero-based page to fetch
        #[arg(long, default_value = "0")]
        page: u32,
        /// Rows per page (defaults to the configured page size)
        #[arg(long)]
        size: Option<u32>,
        /// Filter: all, pending, approved or rejected
        #[arg(long, default_value = "ALL")]
        status: StatusFilter,
        /// Show attachments and payment details per row
        #[arg(long, short = 'w')]
        wide: bool,
    },
    /// Approve a pending seller request (reviewers)
    Approve {
        /// Seller request id
        id: u64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Reject a pending seller request; a reason is mandatory (reviewers)
    Reject {
        /// Seller request id
        id: u64,
        /// Why the request is declined (shown to the applicant)
        #[arg(long)]
        reason: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Change a user's role set (reviewers)
    AssignRoles {
        /// Target user id
        user_id: u64,
        /// Role names to grant
        #[arg(long)]
        add: Vec<String>,
        /// Role names to revoke
        #[arg(long)]
        remove: Vec<String>,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Show your account and current roles
    Whoami,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = sellerdesk::config::config()?;
    sellerdesk::telemetry::init_telemetry(
        &cfg.observability.log_level,
        cfg.observability.json_logs,
    )?;

    match cli.command {
        None => show_how_to_get_started().await,
        Some(Commands::Register) => RegisterCommand::new().execute().await,
        Some(Commands::Status) => StatusCommand::new().execute().await,
        Some(Commands::Queue {
            page,
            size,
            status,
            wide,
        }) => QueueCommand::new(page, size, status, wide).execute().await,
        Some(Commands::Approve { id, yes }) => ApproveCommand::new(id, yes).execute().await,
        Some(Commands::Reject { id, reason, yes }) => {
            RejectCommand::new(id, reason, yes).execute().await
        }
        Some(Commands::AssignRoles {
            user_id,
            add,
            remove,
            yes,
        }) => {
            AssignRolesCommand::new(user_id, add, remove, yes)
                .execute()
                .await
        }
        Some(Commands::Whoami) => WhoamiCommand::new().execute().await,
    }
}
