//! Renders the session user's own application status as one of four
//! mutually exclusive views.

use crate::api::{ApiError, OwnStatus, RequestStatus, SellerRequestsApi};

/// What the owning view shows. Exactly one of these at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusView {
    /// No request on file; show the wizard directly.
    Wizard,
    /// Informational banner, no action available.
    Pending,
    /// Success banner with a manual refresh-roles action; the client never
    /// re-fetches the role set on its own.
    Approved,
    /// Warning banner with the reviewer's reason and a register-again
    /// action.
    Rejected { reason: Option<String> },
}

impl StatusView {
    pub fn from_status(own: &OwnStatus) -> Self {
        match own.status {
            None => StatusView::Wizard,
            Some(RequestStatus::Pending) => StatusView::Pending,
            Some(RequestStatus::Approved) => StatusView::Approved,
            Some(RequestStatus::Rejected) => StatusView::Rejected {
                reason: own.rejection_reason.clone(),
            },
        }
    }

    pub fn shows_wizard(&self) -> bool {
        matches!(self, StatusView::Wizard)
    }
}

/// Fetches the moderation status once per mount and again after an explicit
/// register-again reset.
#[derive(Debug)]
pub struct StatusPoller<A> {
    api: A,
}

impl<A: SellerRequestsApi> StatusPoller<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn fetch(&self) -> Result<StatusView, ApiError> {
        let own = self.api.fetch_own_status().await?;
        Ok(StatusView::from_status(&own))
    }

    /// The register-again action: drop the local REJECTED status and
    /// re-check with the server before re-entering the wizard.
    pub async fn reset_and_refetch(&self) -> Result<StatusView, ApiError> {
        tracing::info!("rejected status cleared; re-checking with server");
        self.fetch().await
    }
}
