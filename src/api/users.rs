//! User and role-catalog endpoints backing the role-assignment dialog.

use async_trait::async_trait;

use crate::api::client::ApiClient;
use crate::api::errors::ApiError;
use crate::api::types::{AckBody, Role, RolesBody, User, UserBody};

#[async_trait]
pub trait DirectoryApi {
    async fn fetch_roles(&self) -> Result<Vec<Role>, ApiError>;

    async fn fetch_user(&self, id: u64) -> Result<User, ApiError>;

    async fn assign_roles(&self, user_id: u64, role_ids: &[u64]) -> Result<(), ApiError>;
}

fn business_error(message: Option<String>) -> ApiError {
    ApiError::Business(message.unwrap_or_else(|| "The server declined the request".to_string()))
}

#[async_trait]
impl DirectoryApi for ApiClient {
    async fn fetch_roles(&self) -> Result<Vec<Role>, ApiError> {
        let body: RolesBody = self.send_json("/roles", self.get("/roles")).await?;
        if !body.success {
            return Err(business_error(body.message));
        }
        Ok(body.roles)
    }

    async fn fetch_user(&self, id: u64) -> Result<User, ApiError> {
        let path = format!("/users/{id}");
        let body: UserBody = self.send_json(&path, self.get(&path)).await?;
        if !body.success {
            return Err(business_error(body.message));
        }
        body.user
            .ok_or_else(|| ApiError::Payload("user missing from response body".to_string()))
    }

    async fn assign_roles(&self, user_id: u64, role_ids: &[u64]) -> Result<(), ApiError> {
        let path = format!("/users/{user_id}/roles");
        let request = self
            .put(&path)
            .json(&serde_json::json!({ "roleIds": role_ids }));
        let body: AckBody = self.send_json(&path, request).await?;
        if !body.success {
            return Err(business_error(body.message));
        }
        tracing::info!(user_id, roles = ?role_ids, "role set updated");
        Ok(())
    }
}
