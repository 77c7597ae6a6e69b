//! Wire types for the seller-onboarding backend.
//!
//! The backend wraps every response in a `{success, ...}` envelope and uses
//! camelCase field names; everything here mirrors that contract verbatim.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Moderation status of a seller request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "PENDING"),
            RequestStatus::Approved => write!(f, "APPROVED"),
            RequestStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}

/// Status filter for the moderation queue listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Approved,
    Rejected,
}

impl StatusFilter {
    /// Value sent as the `status` query parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            StatusFilter::All => "ALL",
            StatusFilter::Pending => "PENDING",
            StatusFilter::Approved => "APPROVED",
            StatusFilter::Rejected => "REJECTED",
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ALL" => Ok(StatusFilter::All),
            "PENDING" => Ok(StatusFilter::Pending),
            "APPROVED" => Ok(StatusFilter::Approved),
            "REJECTED" => Ok(StatusFilter::Rejected),
            other => Err(format!(
                "unknown status filter '{other}' (expected ALL, PENDING, APPROVED or REJECTED)"
            )),
        }
    }
}

/// Whether the applicant registers as an individual or a business.
///
/// Drives which identity attachments the backend expects: individuals send
/// both ID card sides, businesses send a business license.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SellerType {
    #[default]
    Individual,
    Business,
}

impl SellerType {
    /// Value sent as the `sellerType` multipart field.
    pub fn as_param(&self) -> &'static str {
        match self {
            SellerType::Individual => "individual",
            SellerType::Business => "business",
        }
    }
}

impl fmt::Display for SellerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// A seller application as the moderation endpoints return it.
///
/// Attachment fields are URLs to the stored images; which ones are present
/// depends on `seller_type`. Immutable once APPROVED or REJECTED.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerRequest {
    pub id: u64,
    pub requester: RequesterRef,
    pub shop_name: String,
    pub description: String,
    pub address: String,
    pub seller_type: SellerType,
    pub bank_name: String,
    pub bank_account: String,
    #[serde(default)]
    pub tax_number: Option<String>,
    #[serde(default)]
    pub id_card_front: Option<String>,
    #[serde(default)]
    pub id_card_back: Option<String>,
    #[serde(default)]
    pub business_license: Option<String>,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reviewed_by: Option<String>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

/// Lightweight user reference embedded in a seller request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequesterRef {
    pub id: u64,
    pub username: String,
}

/// A backend account. Roles form a flat set checked by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub roles: Vec<Role>,
    pub active: bool,
}

impl User {
    pub fn role_names(&self) -> Vec<&str> {
        self.roles.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn has_role(&self, name: &str) -> bool {
        self.roles.iter().any(|r| r.name == name)
    }
}

/// An entry in the fixed role catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One page of the moderation queue.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPage {
    pub content: Vec<SellerRequest>,
    pub total_elements: u64,
}

/// Moderation status of the session user's own application, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OwnStatus {
    pub status: Option<RequestStatus>,
    pub rejection_reason: Option<String>,
}

// ---- response envelopes -------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct AckBody {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RequestPageBody {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub content: Vec<SellerRequest>,
    #[serde(default)]
    pub total_elements: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OwnStatusBody {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<RequestStatus>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RolesBody {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserBody {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seller_request_deserializes_camel_case() {
        let json = serde_json::json!({
            "id": 42,
            "requester": {"id": 7, "username": "mira"},
            "shopName": "Mira's Plants",
            "description": "Houseplants and pots",
            "address": "12 Fern Way",
            "sellerType": "individual",
            "bankName": "First Bank",
            "bankAccount": "0001112223",
            "idCardFront": "https://cdn.example/id-front.jpg",
            "idCardBack": "https://cdn.example/id-back.jpg",
            "status": "PENDING",
            "createdAt": "2026-05-01T09:30:00Z"
        });

        let req: SellerRequest = serde_json::from_value(json).unwrap();
        assert_eq!(req.id, 42);
        assert_eq!(req.seller_type, SellerType::Individual);
        assert_eq!(req.status, RequestStatus::Pending);
        assert!(req.business_license.is_none());
        assert!(req.reviewed_at.is_none());
    }

    #[test]
    fn status_filter_round_trips_from_str() {
        assert_eq!("pending".parse::<StatusFilter>(), Ok(StatusFilter::Pending));
        assert_eq!("ALL".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert!("bogus".parse::<StatusFilter>().is_err());
    }
}
