pub mod client;
pub mod errors;
pub mod seller_requests;
pub mod types;
pub mod users;

pub use client::ApiClient;
pub use errors::ApiError;
pub use seller_requests::{RegistrationPayload, SellerRequestsApi};
pub use types::{
    OwnStatus, RequestPage, RequestStatus, RequesterRef, Role, SellerRequest, SellerType,
    StatusFilter, User,
};
pub use users::DirectoryApi;
