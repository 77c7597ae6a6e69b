//! Required-field gating for each wizard step.
//!
//! Pure functions over the form; the sequencer consults them before every
//! transition and the submission client re-checks the union before the
//! request leaves the client.

use crate::api::SellerType;
use crate::wizard::types::{FieldId, WizardForm, WizardStep};

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Required fields still empty for one step, given the chosen seller type.
pub fn missing_for_step(form: &WizardForm, step: WizardStep) -> Vec<FieldId> {
    let mut missing = Vec::new();
    match step {
        WizardStep::ShopInfo => {
            if is_blank(&form.shop_name) {
                missing.push(FieldId::ShopName);
            }
            if is_blank(&form.description) {
                missing.push(FieldId::Description);
            }
            if is_blank(&form.address) {
                missing.push(FieldId::Address);
            }
        }
        WizardStep::Payment => {
            if is_blank(&form.bank_name) {
                missing.push(FieldId::BankName);
            }
            if is_blank(&form.bank_account) {
                missing.push(FieldId::BankAccount);
            }
            if form.seller_type == SellerType::Business && is_blank(&form.tax_number) {
                missing.push(FieldId::TaxNumber);
            }
        }
        WizardStep::Identity => match form.seller_type {
            SellerType::Individual => {
                if form.id_card_front.is_none() {
                    missing.push(FieldId::IdCardFront);
                }
                if form.id_card_back.is_none() {
                    missing.push(FieldId::IdCardBack);
                }
            }
            SellerType::Business => {
                if form.business_license.is_none() {
                    missing.push(FieldId::BusinessLicense);
                }
            }
        },
        // Read-only summary; nothing to fill in.
        WizardStep::Confirm => {}
    }
    missing
}

pub fn step_is_complete(form: &WizardForm, step: WizardStep) -> bool {
    missing_for_step(form, step).is_empty()
}

/// Union of every step's requirements, in step order.
pub fn missing_for_submit(form: &WizardForm) -> Vec<FieldId> {
    let mut missing = missing_for_step(form, WizardStep::ShopInfo);
    missing.extend(missing_for_step(form, WizardStep::Payment));
    missing.extend(missing_for_step(form, WizardStep::Identity));
    missing
}
