//! Form state carried through the registration wizard.

use std::fmt;

use crate::api::{RegistrationPayload, SellerType};
use crate::attachments::{Attachment, AttachmentKind};
use crate::wizard::validation;

/// The four wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    ShopInfo,
    Payment,
    Identity,
    Confirm,
}

impl WizardStep {
    pub fn index(&self) -> usize {
        match self {
            WizardStep::ShopInfo => 0,
            WizardStep::Payment => 1,
            WizardStep::Identity => 2,
            WizardStep::Confirm => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::ShopInfo => "Shop information",
            WizardStep::Payment => "Payment details",
            WizardStep::Identity => "Identity verification",
            WizardStep::Confirm => "Confirm and submit",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.index(), self.title())
    }
}

/// Identifies a required input for refusal reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    ShopName,
    Description,
    Address,
    BankName,
    BankAccount,
    TaxNumber,
    IdCardFront,
    IdCardBack,
    BusinessLicense,
}

impl FieldId {
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::ShopName => "shop name",
            FieldId::Description => "description",
            FieldId::Address => "address",
            FieldId::BankName => "bank name",
            FieldId::BankAccount => "bank account",
            FieldId::TaxNumber => "tax number",
            FieldId::IdCardFront => "ID card (front)",
            FieldId::IdCardBack => "ID card (back)",
            FieldId::BusinessLicense => "business license",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Client-local wizard state. Ephemeral: cleared on submit success,
/// discarded when the user navigates away.
#[derive(Debug, Clone, Default)]
pub struct WizardForm {
    pub shop_name: String,
    pub description: String,
    pub address: String,
    pub seller_type: SellerType,
    pub bank_name: String,
    pub bank_account: String,
    pub tax_number: String,
    pub id_card_front: Option<Attachment>,
    pub id_card_back: Option<Attachment>,
    pub business_license: Option<Attachment>,
}

impl WizardForm {
    pub fn attachment(&self, kind: AttachmentKind) -> Option<&Attachment> {
        match kind {
            AttachmentKind::IdCardFront => self.id_card_front.as_ref(),
            AttachmentKind::IdCardBack => self.id_card_back.as_ref(),
            AttachmentKind::BusinessLicense => self.business_license.as_ref(),
        }
    }

    pub fn set_attachment(&mut self, kind: AttachmentKind, attachment: Attachment) {
        match kind {
            AttachmentKind::IdCardFront => self.id_card_front = Some(attachment),
            AttachmentKind::IdCardBack => self.id_card_back = Some(attachment),
            AttachmentKind::BusinessLicense => self.business_license = Some(attachment),
        }
    }

    pub fn clear_attachment(&mut self, kind: AttachmentKind) {
        match kind {
            AttachmentKind::IdCardFront => self.id_card_front = None,
            AttachmentKind::IdCardBack => self.id_card_back = None,
            AttachmentKind::BusinessLicense => self.business_license = None,
        }
    }

    /// Attachment slots the current seller type requires.
    pub fn required_attachments(&self) -> &'static [AttachmentKind] {
        match self.seller_type {
            SellerType::Individual => &[AttachmentKind::IdCardFront, AttachmentKind::IdCardBack],
            SellerType::Business => &[AttachmentKind::BusinessLicense],
        }
    }

    /// Build the wire payload, validating every step. The payload carries
    /// exactly the attachment subset the seller type requires, even if a
    /// slot for the other type was filled before the type switched.
    pub fn payload(&self) -> Result<RegistrationPayload, Vec<FieldId>> {
        let missing = validation::missing_for_submit(self);
        if !missing.is_empty() {
            return Err(missing);
        }

        let (id_card_front, id_card_back, business_license) = match self.seller_type {
            SellerType::Individual => {
                (self.id_card_front.clone(), self.id_card_back.clone(), None)
            }
            SellerType::Business => (None, None, self.business_license.clone()),
        };

        let tax_number = self.tax_number.trim();
        Ok(RegistrationPayload {
            shop_name: self.shop_name.trim().to_string(),
            description: self.description.trim().to_string(),
            address: self.address.trim().to_string(),
            seller_type: self.seller_type,
            bank_name: self.bank_name.trim().to_string(),
            bank_account: self.bank_account.trim().to_string(),
            tax_number: (!tax_number.is_empty()).then(|| tax_number.to_string()),
            id_card_front,
            id_card_back,
            business_license,
        })
    }
}
