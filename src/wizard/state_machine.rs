//! The four-step registration sequencer.
//!
//! A linear statig machine: shop info, payment, identity, confirm. Advancing
//! is refused while the current step's required fields are empty; `Back` is
//! refused at the first step; submission is only offered at the last.

use statig::prelude::*;

use crate::api::SellerType;
use crate::attachments::{Attachment, AttachmentKind};
use crate::wizard::types::{FieldId, WizardForm, WizardStep};
use crate::wizard::validation;

#[derive(Debug, Clone)]
pub enum WizardEvent {
    Edit(FieldEdit),
    SwitchType(SellerType),
    Attach {
        kind: AttachmentKind,
        attachment: Attachment,
    },
    ClearAttachment(AttachmentKind),
    Next,
    Back,
}

/// A text-field edit. Applied in whatever state the wizard is in; gating
/// only happens on `Next`.
#[derive(Debug, Clone)]
pub enum FieldEdit {
    ShopName(String),
    Description(String),
    Address(String),
    BankName(String),
    BankAccount(String),
    TaxNumber(String),
}

/// Why the last `Next`/`Back` was refused, for the view to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refusal {
    MissingFields(Vec<FieldId>),
    AtFirstStep,
    AtLastStep,
}

#[derive(Debug, Default)]
pub struct RegistrationWizard {
    pub form: WizardForm,
    step: WizardStep,
    last_refusal: Option<Refusal>,
}

/// Access the wizard behind a statig [`StateMachine`]. Spelled `context()` to
/// match the call sites; delegates to statig's inherent `inner()` accessor.
pub trait WizardContext {
    fn context(&self) -> &RegistrationWizard;
}

impl WizardContext for StateMachine<RegistrationWizard> {
    fn context(&self) -> &RegistrationWizard {
        self.inner()
    }
}

#[state_machine(initial = "State::shop_info()")]
impl RegistrationWizard {
    #[state]
    fn shop_info(&mut self, event: &WizardEvent) -> Outcome<State> {
        match event {
            WizardEvent::Next => {
                self.try_advance(WizardStep::ShopInfo, WizardStep::Payment, State::payment())
            }
            WizardEvent::Back => {
                self.refuse(Refusal::AtFirstStep);
                Handled
            }
            other => {
                self.apply(other);
                Handled
            }
        }
    }

    #[state]
    fn payment(&mut self, event: &WizardEvent) -> Outcome<State> {
        match event {
            WizardEvent::Next => {
                self.try_advance(WizardStep::Payment, WizardStep::Identity, State::identity())
            }
            WizardEvent::Back => self.retreat(WizardStep::ShopInfo, State::shop_info()),
            other => {
                self.apply(other);
                Handled
            }
        }
    }

    #[state]
    fn identity(&mut self, event: &WizardEvent) -> Outcome<State> {
        match event {
            WizardEvent::Next => {
                self.try_advance(WizardStep::Identity, WizardStep::Confirm, State::confirm())
            }
            WizardEvent::Back => self.retreat(WizardStep::Payment, State::payment()),
            other => {
                self.apply(other);
                Handled
            }
        }
    }

    #[state]
    fn confirm(&mut self, event: &WizardEvent) -> Outcome<State> {
        match event {
            WizardEvent::Next => {
                self.refuse(Refusal::AtLastStep);
                Handled
            }
            WizardEvent::Back => self.retreat(WizardStep::Identity, State::identity()),
            other => {
                self.apply(other);
                Handled
            }
        }
    }
}

impl RegistrationWizard {
    fn try_advance(&mut self, from: WizardStep, to: WizardStep, next: State) -> Outcome<State> {
        let missing = validation::missing_for_step(&self.form, from);
        if missing.is_empty() {
            self.step = to;
            self.last_refusal = None;
            tracing::info!(from = %from, to = %to, "wizard advanced");
            Transition(next)
        } else {
            tracing::debug!(step = %from, missing = ?missing, "advance refused");
            self.refuse(Refusal::MissingFields(missing));
            Handled
        }
    }

    fn retreat(&mut self, to: WizardStep, previous: State) -> Outcome<State> {
        self.step = to;
        self.last_refusal = None;
        tracing::info!(to = %to, "wizard went back");
        Transition(previous)
    }

    fn refuse(&mut self, refusal: Refusal) {
        self.last_refusal = Some(refusal);
    }

    fn apply(&mut self, event: &WizardEvent) {
        match event {
            WizardEvent::Edit(edit) => match edit {
                FieldEdit::ShopName(v) => self.form.shop_name = v.clone(),
                FieldEdit::Description(v) => self.form.description = v.clone(),
                FieldEdit::Address(v) => self.form.address = v.clone(),
                FieldEdit::BankName(v) => self.form.bank_name = v.clone(),
                FieldEdit::BankAccount(v) => self.form.bank_account = v.clone(),
                FieldEdit::TaxNumber(v) => self.form.tax_number = v.clone(),
            },
            WizardEvent::SwitchType(seller_type) => {
                self.form.seller_type = *seller_type;
                tracing::debug!(seller_type = %seller_type, "seller type switched");
            }
            WizardEvent::Attach { kind, attachment } => {
                self.form.set_attachment(*kind, attachment.clone());
            }
            WizardEvent::ClearAttachment(kind) => {
                self.form.clear_attachment(*kind);
            }
            // Navigation is handled per state.
            WizardEvent::Next | WizardEvent::Back => {}
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Whether `Next` (or `Submit`, at the last step) would be accepted now.
    pub fn can_advance(&self) -> bool {
        validation::step_is_complete(&self.form, self.step)
    }

    pub fn back_allowed(&self) -> bool {
        self.step != WizardStep::ShopInfo
    }

    /// `Submit` is only offered at the confirmation step, and only once
    /// every step's requirements are met.
    pub fn submit_allowed(&self) -> bool {
        self.step == WizardStep::Confirm && validation::missing_for_submit(&self.form).is_empty()
    }

    pub fn last_refusal(&self) -> Option<&Refusal> {
        self.last_refusal.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachments::Attachment;

    fn image(name: &str) -> Attachment {
        Attachment {
            file_name: name.to_string(),
            mime: "image/png".to_string(),
            bytes: vec![0x89, b'P', b'N', b'G'],
            preview: "data:image/png;base64,iVBO".to_string(),
        }
    }

    macro_rules! edit {
        ($sm:expr, $edit:expr) => {
            $sm.handle(&WizardEvent::Edit($edit))
        };
    }

    #[test]
    fn advance_refused_until_step_fields_are_filled() {
        let mut sm = RegistrationWizard::default().state_machine();

        sm.handle(&WizardEvent::Next);
        assert_eq!(sm.context().step(), WizardStep::ShopInfo);
        assert!(matches!(
            sm.context().last_refusal(),
            Some(Refusal::MissingFields(_))
        ));

        edit!(sm, FieldEdit::ShopName("Mira's Plants".to_string()));
        edit!(sm, FieldEdit::Description("Houseplants".to_string()));
        edit!(sm, FieldEdit::Address("12 Fern Way".to_string()));
        assert!(sm.context().can_advance());

        sm.handle(&WizardEvent::Next);
        assert_eq!(sm.context().step(), WizardStep::Payment);
    }

    #[test]
    fn back_is_refused_at_the_first_step() {
        let mut sm = RegistrationWizard::default().state_machine();

        assert!(!sm.context().back_allowed());
        sm.handle(&WizardEvent::Back);
        assert_eq!(sm.context().step(), WizardStep::ShopInfo);
        assert_eq!(sm.context().last_refusal(), Some(&Refusal::AtFirstStep));
    }

    #[test]
    fn submit_only_allowed_at_confirm() {
        let mut sm = RegistrationWizard::default().state_machine();

        edit!(sm, FieldEdit::ShopName("Shop".to_string()));
        edit!(sm, FieldEdit::Description("Things".to_string()));
        edit!(sm, FieldEdit::Address("1 Main St".to_string()));
        assert!(!sm.context().submit_allowed());
        sm.handle(&WizardEvent::Next);

        edit!(sm, FieldEdit::BankName("First Bank".to_string()));
        edit!(sm, FieldEdit::BankAccount("000111".to_string()));
        assert!(!sm.context().submit_allowed());
        sm.handle(&WizardEvent::Next);

        sm.handle(&WizardEvent::Attach {
            kind: AttachmentKind::IdCardFront,
            attachment: image("front.png"),
        });
        sm.handle(&WizardEvent::Attach {
            kind: AttachmentKind::IdCardBack,
            attachment: image("back.png"),
        });
        assert!(!sm.context().submit_allowed());
        sm.handle(&WizardEvent::Next);

        assert_eq!(sm.context().step(), WizardStep::Confirm);
        assert!(sm.context().submit_allowed());

        // Next past the last step is refused.
        sm.handle(&WizardEvent::Next);
        assert_eq!(sm.context().step(), WizardStep::Confirm);
        assert_eq!(sm.context().last_refusal(), Some(&Refusal::AtLastStep));
    }

    #[test]
    fn switching_type_regates_the_identity_step() {
        let mut sm = RegistrationWizard::default().state_machine();

        edit!(sm, FieldEdit::ShopName("Shop".to_string()));
        edit!(sm, FieldEdit::Description("Things".to_string()));
        edit!(sm, FieldEdit::Address("1 Main St".to_string()));
        sm.handle(&WizardEvent::Next);
        edit!(sm, FieldEdit::BankName("First Bank".to_string()));
        edit!(sm, FieldEdit::BankAccount("000111".to_string()));
        sm.handle(&WizardEvent::Next);

        sm.handle(&WizardEvent::Attach {
            kind: AttachmentKind::IdCardFront,
            attachment: image("front.png"),
        });
        sm.handle(&WizardEvent::Attach {
            kind: AttachmentKind::IdCardBack,
            attachment: image("back.png"),
        });
        assert!(sm.context().can_advance());

        // Business sellers verify with a license instead of ID cards.
        sm.handle(&WizardEvent::SwitchType(SellerType::Business));
        assert!(!sm.context().can_advance());
        sm.handle(&WizardEvent::Next);
        assert!(matches!(
            sm.context().last_refusal(),
            Some(Refusal::MissingFields(fields)) if fields == &[FieldId::BusinessLicense]
        ));

        sm.handle(&WizardEvent::Attach {
            kind: AttachmentKind::BusinessLicense,
            attachment: image("license.png"),
        });
        assert!(sm.context().can_advance());
    }
}
