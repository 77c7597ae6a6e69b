//! Reviewer-facing moderation queue.
//!
//! Server-driven pagination over seller requests with approve/reject
//! actions. Decisions are offered only for PENDING rows, a rejection needs
//! a non-empty reason before anything is sent, and at most one decision per
//! request id is in flight at a time. There is no retry queue; a failed
//! decision is re-triggered manually.

use std::collections::HashSet;

use thiserror::Error;

use crate::api::{ApiError, RequestStatus, SellerRequest, SellerRequestsApi, StatusFilter};

#[derive(Debug, Error)]
pub enum ModerationError {
    #[error("a rejection reason is required")]
    EmptyReason,

    #[error("a decision for request {0} is already in flight")]
    DecisionInFlight(u64),

    #[error("request {0} is not pending")]
    NotPending(u64),

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug)]
pub struct ModerationQueue<A> {
    api: A,
    page: u32,
    size: u32,
    filter: StatusFilter,
    rows: Vec<SellerRequest>,
    total_elements: u64,
    in_flight: HashSet<u64>,
}

impl<A: SellerRequestsApi> ModerationQueue<A> {
    pub fn new(api: A, page_size: u32) -> Self {
        Self {
            api,
            page: 0,
            size: page_size.max(1),
            filter: StatusFilter::All,
            rows: Vec::new(),
            total_elements: 0,
            in_flight: HashSet::new(),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn rows(&self) -> &[SellerRequest] {
        &self.rows
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    pub fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(self.size as u64)
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
        self.page = 0;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    /// Approve/reject are offered only while a row is PENDING.
    pub fn actionable(request: &SellerRequest) -> bool {
        request.status == RequestStatus::Pending
    }

    /// Fetch the current page with the current filter.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        let page = self
            .api
            .list_requests(self.page, self.size, self.filter)
            .await?;
        self.rows = page.content;
        self.total_elements = page.total_elements;
        tracing::debug!(
            page = self.page,
            size = self.size,
            filter = self.filter.as_param(),
            rows = self.rows.len(),
            "moderation queue refreshed"
        );
        Ok(())
    }

    pub async fn approve(&mut self, id: u64) -> Result<(), ModerationError> {
        self.begin_decision(id)?;
        let result = self.api.approve_request(id).await;
        self.finish_decision(id, result).await
    }

    pub async fn reject(&mut self, id: u64, reason: &str) -> Result<(), ModerationError> {
        // An empty reason never reaches the network.
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(ModerationError::EmptyReason);
        }
        self.begin_decision(id)?;
        let result = self.api.reject_request(id, reason).await;
        self.finish_decision(id, result).await
    }

    fn begin_decision(&mut self, id: u64) -> Result<(), ModerationError> {
        if let Some(request) = self.rows.iter().find(|r| r.id == id) {
            if !Self::actionable(request) {
                return Err(ModerationError::NotPending(id));
            }
        }
        if !self.in_flight.insert(id) {
            return Err(ModerationError::DecisionInFlight(id));
        }
        Ok(())
    }

    async fn finish_decision(
        &mut self,
        id: u64,
        result: Result<(), ApiError>,
    ) -> Result<(), ModerationError> {
        self.in_flight.remove(&id);
        match result {
            Ok(()) => {
                // Same page/size/filter the reviewer was looking at.
                self.refresh().await?;
                Ok(())
            }
            Err(err) if err.is_business() => {
                // Typically "request is no longer pending": another reviewer
                // got there first. Re-fetch so the list shows the updated
                // status instead of a stale actionable row.
                if let Err(refresh_err) = self.refresh().await {
                    tracing::warn!(error = %refresh_err, "refresh after stale decision failed");
                }
                Err(ModerationError::Api(err))
            }
            Err(err) => Err(ModerationError::Api(err)),
        }
    }
}
