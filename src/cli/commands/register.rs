//! The interactive seller-registration wizard.

use std::path::Path;

use anyhow::Result;
use statig::prelude::*;

use crate::api::{ApiClient, SellerType};
use crate::attachments::{load_attachment, AttachmentLoader};
use crate::cli::commands::status::render;
use crate::cli::commands::{build_client, confirm, prompt};
use crate::status_view::{StatusPoller, StatusView};
use crate::submission::{SubmissionClient, SubmitError};
use crate::wizard::state_machine::WizardContext;
use crate::wizard::{FieldEdit, Refusal, RegistrationWizard, WizardEvent, WizardForm, WizardStep};

pub struct RegisterCommand;

impl RegisterCommand {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(&self) -> Result<()> {
        let client = build_client()?;
        let poller = StatusPoller::new(client.clone());

        print!("🔄 Checking for an existing application... ");
        std::io::Write::flush(&mut std::io::stdout())?;
        let view = match poller.fetch().await {
            Ok(view) => {
                println!("✅");
                view
            }
            Err(e) => {
                println!("❌");
                println!("❌ {}", e.user_message());
                return Err(e.into());
            }
        };

        match view {
            StatusView::Pending | StatusView::Approved => {
                println!();
                render(&view);
                return Ok(());
            }
            StatusView::Rejected { .. } => {
                println!();
                render(&view);
                println!();
                if !confirm("Clear the rejected status and register again?")? {
                    return Ok(());
                }
                // Re-check with the server before re-entering the wizard.
                let view = poller.reset_and_refetch().await?;
                if !view.shows_wizard() {
                    println!();
                    render(&view);
                    return Ok(());
                }
            }
            StatusView::Wizard => {}
        }

        run_wizard(client).await
    }
}

impl Default for RegisterCommand {
    fn default() -> Self {
        Self::new()
    }
}

/// Prompt for one field, showing the current value. Empty input keeps it.
fn read_field(label: &str, current: &str) -> Result<Option<String>> {
    let shown = if current.is_empty() {
        label.to_string()
    } else {
        format!("{label} [{current}]")
    };
    let input = prompt(&shown)?;
    Ok((!input.is_empty()).then_some(input))
}

async fn run_wizard(client: ApiClient) -> Result<()> {
    println!();
    println!("📝 SELLER REGISTRATION");
    println!("======================");

    let mut sm = RegistrationWizard::default().state_machine();
    let mut loader = AttachmentLoader::new();
    let mut submitter = SubmissionClient::new(client);

    // Gate the step: refused transitions report what is still missing.
    macro_rules! try_next {
        ($sm:expr) => {{
            $sm.handle(&WizardEvent::Next);
            if let Some(Refusal::MissingFields(missing)) = $sm.context().last_refusal() {
                let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
                println!("❗ Still required: {}", labels.join(", "));
            }
        }};
    }

    loop {
        let step = sm.context().step();
        println!();
        println!("── Step {}: {} ──", step.index(), step.title());

        match step {
            WizardStep::ShopInfo => {
                if let Some(v) = read_field("Shop name", &sm.context().form.shop_name)? {
                    sm.handle(&WizardEvent::Edit(FieldEdit::ShopName(v)));
                }
                if let Some(v) = read_field("Description", &sm.context().form.description)? {
                    sm.handle(&WizardEvent::Edit(FieldEdit::Description(v)));
                }
                if let Some(v) = read_field("Address", &sm.context().form.address)? {
                    sm.handle(&WizardEvent::Edit(FieldEdit::Address(v)));
                }
                let current = sm.context().form.seller_type;
                let answer = prompt(&format!("Seller type (individual/business) [{current}]"))?;
                let seller_type = match answer.to_lowercase().as_str() {
                    "business" | "b" => SellerType::Business,
                    "individual" | "i" => SellerType::Individual,
                    _ => current,
                };
                sm.handle(&WizardEvent::SwitchType(seller_type));
                try_next!(sm);
            }
            WizardStep::Payment => {
                if let Some(v) = read_field("Bank name", &sm.context().form.bank_name)? {
                    sm.handle(&WizardEvent::Edit(FieldEdit::BankName(v)));
                }
                if let Some(v) = read_field("Bank account", &sm.context().form.bank_account)? {
                    sm.handle(&WizardEvent::Edit(FieldEdit::BankAccount(v)));
                }
                let tax_label = match sm.context().form.seller_type {
                    SellerType::Business => "Tax number",
                    SellerType::Individual => "Tax number (optional)",
                };
                if let Some(v) = read_field(tax_label, &sm.context().form.tax_number)? {
                    sm.handle(&WizardEvent::Edit(FieldEdit::TaxNumber(v)));
                }
                try_next!(sm);
            }
            WizardStep::Identity => {
                let required = sm.context().form.required_attachments();
                for kind in required {
                    if sm.context().form.attachment(*kind).is_some() {
                        println!("   🖼️  {} already attached", kind.label());
                        continue;
                    }
                    loop {
                        let path = prompt(&format!("Path to {} image", kind.label()))?;
                        if path.is_empty() {
                            println!("   ❗ {} is required", kind.label());
                            continue;
                        }
                        // Each pick supersedes any read still in flight for
                        // the same slot.
                        let ticket = loader.begin(*kind);
                        match load_attachment(Path::new(&path)).await {
                            Ok(attachment) => {
                                if !loader.is_current(&ticket) {
                                    continue;
                                }
                                println!(
                                    "   🖼️  {} ({} bytes, {})",
                                    attachment.file_name,
                                    attachment.size(),
                                    attachment.mime
                                );
                                sm.handle(&WizardEvent::Attach {
                                    kind: *kind,
                                    attachment,
                                });
                                break;
                            }
                            Err(e) => {
                                println!("   ❌ {e}");
                            }
                        }
                    }
                }
                try_next!(sm);
            }
            WizardStep::Confirm => {
                print_summary(&sm.context().form);
                println!();
                let choice = prompt("(s)ubmit, (b)ack, (q)uit")?;
                match choice.to_lowercase().as_str() {
                    "s" | "submit" => {
                        if !sm.context().submit_allowed() {
                            println!("❗ The application is incomplete; go back and fill the missing fields.");
                            continue;
                        }
                        print!("📤 Submitting your application... ");
                        std::io::Write::flush(&mut std::io::stdout())?;
                        match submitter.submit(&sm.context().form).await {
                            Ok(_) => {
                                println!("✅");
                                println!();
                                println!("🎉 Application submitted - status is now PENDING.");
                                println!("   → Check progress with: sellerdesk status");
                                // Wizard state is cleared by dropping it here.
                                return Ok(());
                            }
                            Err(SubmitError::Api(e)) => {
                                println!("❌");
                                println!("❌ {}", e.user_message());
                                println!("   Your entries were kept - fix the problem and submit again.");
                            }
                            Err(e) => {
                                println!("❌");
                                println!("❌ {e}");
                            }
                        }
                    }
                    "b" | "back" => {
                        sm.handle(&WizardEvent::Back);
                    }
                    "q" | "quit" => {
                        println!("Registration cancelled; nothing was sent.");
                        return Ok(());
                    }
                    _ => {}
                }
            }
        }
    }
}

fn print_summary(form: &WizardForm) {
    println!("Review your application:");
    println!("   🏪 Shop name:    {}", form.shop_name);
    println!("   📄 Description:  {}", form.description);
    println!("   📍 Address:      {}", form.address);
    println!("   👥 Seller type:  {}", form.seller_type);
    println!("   🏦 Bank:         {} / {}", form.bank_name, form.bank_account);
    if !form.tax_number.trim().is_empty() {
        println!("   🧾 Tax number:   {}", form.tax_number);
    }
    for kind in form.required_attachments() {
        match form.attachment(*kind) {
            Some(att) => println!("   🖼️  {}: {} ({} bytes)", kind.label(), att.file_name, att.size()),
            None => println!("   🖼️  {}: missing", kind.label()),
        }
    }
}
