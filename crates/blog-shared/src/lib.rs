//! # Blog Shared
//!
//! Wire types shared between the API server and its callers.

pub mod dto;
pub mod response;

pub use dto::BlogPayload;
pub use response::{ErrorResponse, MessageResponse};
