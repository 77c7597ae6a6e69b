//! Packages wizard state into a multipart request and interprets the
//! backend's success/failure envelope.
//!
//! Exactly one submit may be in flight at a time; a second call while the
//! first is pending is refused locally rather than producing a duplicate
//! PENDING request on the server.

use thiserror::Error;

use crate::api::{ApiError, SellerRequestsApi};
use crate::wizard::{FieldId, WizardForm};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    AlreadyInFlight,

    /// Required fields still empty; nothing was sent.
    #[error("registration is incomplete")]
    Incomplete(Vec<FieldId>),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Outcome the owning view acts on: the wizard is cleared only on
/// `Accepted`; every error path preserves the entered data for retry.
#[derive(Debug, PartialEq, Eq)]
pub struct Accepted;

#[derive(Debug)]
pub struct SubmissionClient<A> {
    api: A,
    in_flight: bool,
}

impl<A: SellerRequestsApi> SubmissionClient<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            in_flight: false,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Validate the whole form, then post it as one multipart request.
    ///
    /// Validation failures never reach the network. On success the caller
    /// clears the wizard and shows the PENDING view; on any error the form
    /// stays as entered.
    pub async fn submit(&mut self, form: &WizardForm) -> Result<Accepted, SubmitError> {
        if self.in_flight {
            return Err(SubmitError::AlreadyInFlight);
        }
        let payload = form.payload().map_err(SubmitError::Incomplete)?;

        self.in_flight = true;
        let result = self.api.submit_registration(&payload).await;
        self.in_flight = false;

        match result {
            Ok(()) => Ok(Accepted),
            Err(err) => {
                tracing::warn!(error = %err, "registration submit failed");
                Err(SubmitError::Api(err))
            }
        }
    }
}
