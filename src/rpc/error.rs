use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::constants::{
    CODE_METHOD_NOT_FOUND, CODE_RESOURCE_NOT_FOUND, CODE_RESOURCE_UNAVAILABLE,
    CODE_USER_REJECTED_REQUEST,
};

/// Error shape surfaced by EIP-1193 providers: a numeric code, a human
/// readable message and optional structured data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("provider error {code}: {message}")]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), data: None }
    }

    /// The EIP-1193 notion of a user rejection. Hosts may widen this to
    /// wallet-specific patterns through their own classifier.
    pub fn is_user_rejection(&self) -> bool {
        self.code == CODE_USER_REJECTED_REQUEST
    }

    /// The wallet lacks the requested method or resource.
    pub fn is_resource_not_found(&self) -> bool {
        self.code == CODE_RESOURCE_NOT_FOUND || self.code == CODE_METHOD_NOT_FOUND
    }

    /// A request for the same resource is already open in the wallet.
    pub fn is_pending(&self) -> bool {
        self.code == CODE_RESOURCE_UNAVAILABLE
    }
}
