//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Body of `POST /blogs` and `PUT /blogs/{id}`.
///
/// Every field is optional on the wire so that a missing title or body
/// surfaces as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPayload {
    pub title: Option<String>,
    pub body: Option<String>,
    pub author: Option<String>,
}
