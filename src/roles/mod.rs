pub mod dialog;
pub mod guard;

pub use dialog::{RoleAssignmentDialog, RoleDialogError};
