//! The authenticated session.
//!
//! One session object constructed at login and passed explicitly to every
//! component that needs the acting user. No ambient global: components that
//! check permissions take the session (or its role names) as a parameter,
//! and logout consumes the session.

use crate::api::{ApiError, DirectoryApi, User};

#[derive(Debug)]
pub struct Session {
    user: User,
}

impl Session {
    /// Establish the session by loading the configured account. This is the
    /// login edge of the lifecycle; the bearer token itself lives in the
    /// API client.
    pub async fn establish<A: DirectoryApi>(api: &A, user_id: u64) -> Result<Self, ApiError> {
        let user = api.fetch_user(user_id).await?;
        tracing::info!(user_id, username = %user.username, "session established");
        Ok(Self { user })
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn role_names(&self) -> Vec<&str> {
        self.user.role_names()
    }

    /// Re-fetch the session user, picking up role changes. Only ever called
    /// from an explicit user action; nothing refreshes roles automatically.
    pub async fn refresh<A: DirectoryApi>(&mut self, api: &A) -> Result<&User, ApiError> {
        self.user = api.fetch_user(self.user.id).await?;
        tracing::info!(username = %self.user.username, "session user refreshed");
        Ok(&self.user)
    }

    /// Logout edge: consumes the session.
    pub fn close(self) {
        tracing::info!(username = %self.user.username, "session closed");
    }
}
