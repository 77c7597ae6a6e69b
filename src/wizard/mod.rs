pub mod state_machine;
pub mod types;
pub mod validation;

pub use state_machine::{FieldEdit, Refusal, RegistrationWizard, WizardEvent};
pub use types::{FieldId, WizardForm, WizardStep};
