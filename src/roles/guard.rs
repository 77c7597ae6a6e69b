//! Reviewer-side permission checks for role assignment.
//!
//! Pure predicates over role-name sets, shared by the dialog and the CLI.
//! These guards shape what the UI offers; the backend performs the
//! authoritative check on every mutation, and callers must not treat a
//! passing guard as authorization.

use crate::api::Role;

pub const ADMIN: &str = "ADMIN";
pub const STAFF: &str = "STAFF";
pub const SELLER: &str = "SELLER";
pub const USER: &str = "USER";

pub fn holds(roles: &[&str], name: &str) -> bool {
    roles.iter().any(|r| *r == name)
}

/// Whether the actor may modify the target's role set at all.
///
/// ADMIN may edit anyone. STAFF may edit anyone except an ADMIN-holding
/// account. Everyone else is not a reviewer.
pub fn can_edit_roles(actor: &[&str], target: &[&str]) -> bool {
    if holds(actor, ADMIN) {
        return true;
    }
    if holds(actor, STAFF) {
        return !holds(target, ADMIN);
    }
    false
}

/// Whether the actor may grant or revoke the ADMIN role.
pub fn can_grant_admin(actor: &[&str]) -> bool {
    holds(actor, ADMIN)
}

/// The subset of the catalog the actor may offer as checkboxes. ADMIN is
/// hidden from a STAFF-only reviewer, so it cannot end up in a role-id set
/// even indirectly.
pub fn selectable_roles<'a>(actor: &[&str], catalog: &'a [Role]) -> Vec<&'a Role> {
    catalog
        .iter()
        .filter(|role| role.name != ADMIN || can_grant_admin(actor))
        .collect()
}
