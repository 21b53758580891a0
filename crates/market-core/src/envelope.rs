//! Response envelope for the resolve-by-code call
//!
//! Consumers receive either `{"success": true, "data": ...}` or
//! `{"error": "..."}` together with an HTTP-style status code.

use serde::{Deserialize, Serialize};

use crate::Error;
use crate::resolved::ResolvedMarketConfig;

pub const NOT_FOUND_MESSAGE: &str = "Market not found";
pub const UNAVAILABLE_MESSAGE: &str = "Service temporarily unavailable";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody<T> {
    Success { success: bool, data: T },
    Failure { error: String },
}

/// A status code plus the JSON body sent with it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub body: ResponseBody<T>,
}

/// Response for a market resolution.
pub type MarketResponse = ApiResponse<ResolvedMarketConfig>;

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: 200,
            body: ResponseBody::Success {
                success: true,
                data,
            },
        }
    }

    pub fn failure(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ResponseBody::Failure {
                error: message.into(),
            },
        }
    }

    /// Map a resolution outcome onto a response.
    ///
    /// Unknown markets are 404 and store failures 503. Anything else is a
    /// generic 500; its details go to the log, not to the caller.
    pub fn from_result(result: crate::Result<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(Error::MarketNotFound { code }) => {
                tracing::debug!(%code, "Market not found");
                Self::failure(404, NOT_FOUND_MESSAGE)
            }
            Err(err) if err.is_store_unavailable() => {
                tracing::error!(error = %err, "Market store unavailable");
                Self::failure(503, UNAVAILABLE_MESSAGE)
            }
            Err(err) => {
                tracing::error!(error = %err, "Market resolution failed");
                Self::failure(500, INTERNAL_ERROR_MESSAGE)
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.body, ResponseBody::Success { .. })
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.body)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.body)
    }
}
