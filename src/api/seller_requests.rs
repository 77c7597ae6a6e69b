//! Seller-request endpoints: submission, own-status, and the moderation
//! queue's list/approve/reject operations.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::api::client::ApiClient;
use crate::api::errors::ApiError;
use crate::api::types::{
    AckBody, OwnStatus, OwnStatusBody, RequestPage, RequestPageBody, SellerType, StatusFilter,
};
use crate::attachments::Attachment;

/// Everything the wizard, the status poller and the moderation queue need
/// from the backend. Implemented by [`ApiClient`]; a seam for tests.
#[async_trait]
pub trait SellerRequestsApi {
    async fn list_requests(
        &self,
        page: u32,
        size: u32,
        filter: StatusFilter,
    ) -> Result<RequestPage, ApiError>;

    async fn approve_request(&self, id: u64) -> Result<(), ApiError>;

    async fn reject_request(&self, id: u64, reason: &str) -> Result<(), ApiError>;

    async fn submit_registration(&self, payload: &RegistrationPayload) -> Result<(), ApiError>;

    async fn fetch_own_status(&self) -> Result<OwnStatus, ApiError>;
}

/// The complete registration as it goes over the wire. Built by the wizard
/// once every step validates; carries only the attachment subset the chosen
/// seller type requires.
#[derive(Debug, Clone)]
pub struct RegistrationPayload {
    pub shop_name: String,
    pub description: String,
    pub address: String,
    pub seller_type: SellerType,
    pub bank_name: String,
    pub bank_account: String,
    pub tax_number: Option<String>,
    pub id_card_front: Option<Attachment>,
    pub id_card_back: Option<Attachment>,
    pub business_license: Option<Attachment>,
}

impl RegistrationPayload {
    fn multipart(&self) -> Result<Form, ApiError> {
        let mut form = Form::new()
            .text("shopName", self.shop_name.clone())
            .text("description", self.description.clone())
            .text("address", self.address.clone())
            .text("sellerType", self.seller_type.as_param())
            .text("bankName", self.bank_name.clone())
            .text("bankAccount", self.bank_account.clone());

        if let Some(tax_number) = &self.tax_number {
            form = form.text("taxNumber", tax_number.clone());
        }

        let attachments = [
            ("idCardFront", &self.id_card_front),
            ("idCardBack", &self.id_card_back),
            ("businessLicense", &self.business_license),
        ];
        for (field, attachment) in attachments {
            if let Some(attachment) = attachment {
                let part = Part::bytes(attachment.bytes.clone())
                    .file_name(attachment.file_name.clone())
                    .mime_str(&attachment.mime)
                    .map_err(|e| ApiError::Payload(format!("{field}: {e}")))?;
                form = form.part(field, part);
            }
        }

        Ok(form)
    }
}

fn business_error(message: Option<String>) -> ApiError {
    ApiError::Business(message.unwrap_or_else(|| "The server declined the request".to_string()))
}

#[async_trait]
impl SellerRequestsApi for ApiClient {
    async fn list_requests(
        &self,
        page: u32,
        size: u32,
        filter: StatusFilter,
    ) -> Result<RequestPage, ApiError> {
        let request = self.get("/seller-requests").query(&[
            ("page", page.to_string()),
            ("size", size.to_string()),
            ("status", filter.as_param().to_string()),
        ]);
        let body: RequestPageBody = self.send_json("/seller-requests", request).await?;
        if !body.success {
            return Err(business_error(body.message));
        }
        Ok(RequestPage {
            content: body.content,
            total_elements: body.total_elements,
        })
    }

    async fn approve_request(&self, id: u64) -> Result<(), ApiError> {
        let path = format!("/seller-requests/{id}/approve");
        let body: AckBody = self.send_json(&path, self.put(&path)).await?;
        if !body.success {
            return Err(business_error(body.message));
        }
        tracing::info!(request_id = id, "seller request approved");
        Ok(())
    }

    async fn reject_request(&self, id: u64, reason: &str) -> Result<(), ApiError> {
        let path = format!("/seller-requests/{id}/reject");
        let request = self
            .put(&path)
            .json(&serde_json::json!({ "reason": reason }));
        let body: AckBody = self.send_json(&path, request).await?;
        if !body.success {
            return Err(business_error(body.message));
        }
        tracing::info!(request_id = id, "seller request rejected");
        Ok(())
    }

    async fn submit_registration(&self, payload: &RegistrationPayload) -> Result<(), ApiError> {
        let form = payload.multipart()?;
        let request = self.post("/seller-requests").multipart(form);
        let body: AckBody = self.send_json("/seller-requests", request).await?;
        if !body.success {
            return Err(business_error(body.message));
        }
        tracing::info!(shop_name = %payload.shop_name, "registration submitted");
        Ok(())
    }

    async fn fetch_own_status(&self) -> Result<OwnStatus, ApiError> {
        let body: OwnStatusBody = self
            .send_json(
                "/seller-requests/status",
                self.get("/seller-requests/status"),
            )
            .await?;
        if !body.success {
            return Err(business_error(body.message));
        }
        Ok(OwnStatus {
            status: body.status,
            rejection_reason: body.rejection_reason,
        })
    }
}
