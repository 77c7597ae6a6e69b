// Sellerdesk Library - Seller Onboarding & Role Moderation
// This exposes the core components for testing and integration

pub mod api;
pub mod attachments;
pub mod cli;
pub mod config;
pub mod moderation;
pub mod roles;
pub mod session;
pub mod status_view;
pub mod submission;
pub mod telemetry;
pub mod wizard;

// Re-export key types for easy access
pub use api::{
    ApiClient, ApiError, DirectoryApi, OwnStatus, RegistrationPayload, RequestStatus, Role,
    SellerRequest, SellerRequestsApi, SellerType, StatusFilter, User,
};
pub use attachments::{load_attachment, Attachment, AttachmentKind, AttachmentLoader};
pub use config::{config, init_config, SellerdeskConfig};
pub use moderation::{ModerationError, ModerationQueue};
pub use roles::{guard, RoleAssignmentDialog, RoleDialogError};
pub use session::Session;
pub use status_view::{StatusPoller, StatusView};
pub use submission::{SubmissionClient, SubmitError};
pub use telemetry::{generate_correlation_id, init_telemetry};
pub use wizard::{FieldId, RegistrationWizard, WizardEvent, WizardForm, WizardStep};
