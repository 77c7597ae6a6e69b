//! Role-assignment dialog state.
//!
//! Opens against a target user and the full catalog, lets the reviewer
//! toggle roles within what the guard allows, and submits the resulting
//! role-id set. The guard runs before anything is sent; the backend still
//! re-checks on its side.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::api::{ApiError, DirectoryApi, Role, User};
use crate::roles::guard;

#[derive(Debug, Error)]
pub enum RoleDialogError {
    /// STAFF reviewer against an ADMIN-holding target: not actionable.
    #[error("you are not permitted to modify this user's roles")]
    TargetLocked,

    #[error("role '{0}' cannot be selected here")]
    RoleNotSelectable(String),

    #[error("unknown role id {0}")]
    UnknownRole(u64),

    #[error("an assignment for this user is already in flight")]
    SaveInFlight,

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug)]
pub struct RoleAssignmentDialog {
    target: User,
    catalog: Vec<Role>,
    actor_roles: Vec<String>,
    selected: BTreeSet<u64>,
    in_flight: bool,
}

impl RoleAssignmentDialog {
    /// Open the dialog. Refused outright when the guard says the actor may
    /// not act on this target.
    pub fn open(actor: &User, target: User, catalog: Vec<Role>) -> Result<Self, RoleDialogError> {
        let actor_names = actor.role_names();
        let target_names = target.role_names();
        if !guard::can_edit_roles(&actor_names, &target_names) {
            tracing::debug!(
                actor = %actor.username,
                target = %target.username,
                "role dialog refused by guard"
            );
            return Err(RoleDialogError::TargetLocked);
        }

        let selected = target.roles.iter().map(|r| r.id).collect();
        Ok(Self {
            actor_roles: actor_names.into_iter().map(String::from).collect(),
            target,
            catalog,
            selected,
            in_flight: false,
        })
    }

    pub fn target(&self) -> &User {
        &self.target
    }

    /// Catalog entries the reviewer may toggle. ADMIN is absent for a
    /// STAFF-only reviewer.
    pub fn selectable(&self) -> Vec<&Role> {
        let actor: Vec<&str> = self.actor_roles.iter().map(String::as_str).collect();
        guard::selectable_roles(&actor, &self.catalog)
    }

    pub fn is_selected(&self, role_id: u64) -> bool {
        self.selected.contains(&role_id)
    }

    /// Flip one role. Returns the new membership state.
    pub fn toggle(&mut self, role_id: u64) -> Result<bool, RoleDialogError> {
        let role = self
            .catalog
            .iter()
            .find(|r| r.id == role_id)
            .ok_or(RoleDialogError::UnknownRole(role_id))?;
        if !self.selectable().iter().any(|r| r.id == role_id) {
            return Err(RoleDialogError::RoleNotSelectable(role.name.clone()));
        }

        if self.selected.remove(&role_id) {
            Ok(false)
        } else {
            self.selected.insert(role_id);
            Ok(true)
        }
    }

    /// The role-id set as it would be submitted.
    pub fn role_ids(&self) -> Vec<u64> {
        self.selected.iter().copied().collect()
    }

    /// Submit the new role set. One save in flight at a time.
    pub async fn save<A: DirectoryApi>(&mut self, api: &A) -> Result<(), RoleDialogError> {
        if self.in_flight {
            return Err(RoleDialogError::SaveInFlight);
        }
        self.in_flight = true;
        let result = api.assign_roles(self.target.id, &self.role_ids()).await;
        self.in_flight = false;
        result.map_err(RoleDialogError::Api)
    }
}
