//! Gating properties of the registration wizard.
//!
//! The sequencer must refuse to advance exactly when a required field for
//! the current step (given the chosen seller type) is empty.

use proptest::prelude::*;
use statig::prelude::*;

use sellerdesk::api::SellerType;
use sellerdesk::attachments::{Attachment, AttachmentKind};
use sellerdesk::wizard::state_machine::{FieldEdit, Refusal, WizardContext};
use sellerdesk::wizard::validation;
use sellerdesk::wizard::{RegistrationWizard, WizardEvent, WizardForm, WizardStep};

fn image(name: &str) -> Attachment {
    Attachment {
        file_name: name.to_string(),
        mime: "image/jpeg".to_string(),
        bytes: vec![0xFF, 0xD8, 0xFF, 0x01],
        preview: "data:image/jpeg;base64,/9j/AQ==".to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn form(
    shop: bool,
    desc: bool,
    addr: bool,
    bank_name: bool,
    bank_account: bool,
    tax: bool,
    business: bool,
    front: bool,
    back: bool,
    license: bool,
) -> WizardForm {
    WizardForm {
        shop_name: if shop { "Shop".into() } else { String::new() },
        description: if desc { "Things".into() } else { String::new() },
        address: if addr { "1 Main St".into() } else { String::new() },
        seller_type: if business {
            SellerType::Business
        } else {
            SellerType::Individual
        },
        bank_name: if bank_name { "Bank".into() } else { String::new() },
        bank_account: if bank_account { "000111".into() } else { String::new() },
        tax_number: if tax { "TX-1".into() } else { String::new() },
        id_card_front: front.then(|| image("front.jpg")),
        id_card_back: back.then(|| image("back.jpg")),
        business_license: license.then(|| image("license.jpg")),
    }
}

proptest! {
    #[test]
    fn advance_is_gated_exactly_on_required_fields(
        shop in any::<bool>(), desc in any::<bool>(), addr in any::<bool>(),
        bank_name in any::<bool>(), bank_account in any::<bool>(), tax in any::<bool>(),
        business in any::<bool>(), front in any::<bool>(), back in any::<bool>(),
        license in any::<bool>(),
    ) {
        let form = form(shop, desc, addr, bank_name, bank_account, tax, business,
                        front, back, license);

        prop_assert_eq!(
            validation::step_is_complete(&form, WizardStep::ShopInfo),
            shop && desc && addr
        );
        prop_assert_eq!(
            validation::step_is_complete(&form, WizardStep::Payment),
            bank_name && bank_account && (!business || tax)
        );
        prop_assert_eq!(
            validation::step_is_complete(&form, WizardStep::Identity),
            if business { license } else { front && back }
        );
        // The confirmation step never adds requirements of its own.
        prop_assert!(validation::step_is_complete(&form, WizardStep::Confirm));
    }
}

#[test]
fn full_walkthrough_reaches_confirm_and_only_confirm_offers_submit() {
    let mut sm = RegistrationWizard::default().state_machine();

    sm.handle(&WizardEvent::Edit(FieldEdit::ShopName("Shop".into())));
    sm.handle(&WizardEvent::Edit(FieldEdit::Description("Things".into())));
    sm.handle(&WizardEvent::Edit(FieldEdit::Address("1 Main St".into())));
    assert!(!sm.context().submit_allowed());
    sm.handle(&WizardEvent::Next);
    assert_eq!(sm.context().step(), WizardStep::Payment);

    sm.handle(&WizardEvent::Edit(FieldEdit::BankName("Bank".into())));
    sm.handle(&WizardEvent::Edit(FieldEdit::BankAccount("000111".into())));
    assert!(!sm.context().submit_allowed());
    sm.handle(&WizardEvent::Next);
    assert_eq!(sm.context().step(), WizardStep::Identity);

    sm.handle(&WizardEvent::Attach {
        kind: AttachmentKind::IdCardFront,
        attachment: image("front.jpg"),
    });
    sm.handle(&WizardEvent::Attach {
        kind: AttachmentKind::IdCardBack,
        attachment: image("back.jpg"),
    });
    assert!(!sm.context().submit_allowed());
    sm.handle(&WizardEvent::Next);

    assert_eq!(sm.context().step(), WizardStep::Confirm);
    assert!(sm.context().submit_allowed());
}

#[test]
fn back_walks_to_the_first_step_and_no_further() {
    let mut sm = RegistrationWizard::default().state_machine();

    sm.handle(&WizardEvent::Edit(FieldEdit::ShopName("Shop".into())));
    sm.handle(&WizardEvent::Edit(FieldEdit::Description("Things".into())));
    sm.handle(&WizardEvent::Edit(FieldEdit::Address("1 Main St".into())));
    sm.handle(&WizardEvent::Next);
    assert_eq!(sm.context().step(), WizardStep::Payment);
    assert!(sm.context().back_allowed());

    sm.handle(&WizardEvent::Back);
    assert_eq!(sm.context().step(), WizardStep::ShopInfo);
    assert!(!sm.context().back_allowed());

    sm.handle(&WizardEvent::Back);
    assert_eq!(sm.context().step(), WizardStep::ShopInfo);
    assert_eq!(sm.context().last_refusal(), Some(&Refusal::AtFirstStep));
}

#[test]
fn payload_excludes_the_other_seller_types_attachments() {
    let mut form = form(true, true, true, true, true, true, false, true, true, false);
    // A license left over from before a type switch must not be sent for an
    // individual application.
    form.business_license = Some(image("stale-license.jpg"));

    let payload = form.payload().expect("form is complete");
    assert!(payload.id_card_front.is_some());
    assert!(payload.id_card_back.is_some());
    assert!(payload.business_license.is_none());

    form.seller_type = SellerType::Business;
    form.business_license = Some(image("license.jpg"));
    let payload = form.payload().expect("form is complete");
    assert!(payload.id_card_front.is_none());
    assert!(payload.id_card_back.is_none());
    assert!(payload.business_license.is_some());
}
