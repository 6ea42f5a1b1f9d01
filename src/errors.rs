//! Error taxonomy for the rent reclamation core.
//!
//! Two failure classes exist: a malformed input identifier, caught before
//! any network traffic, and an endpoint-level failure. An empty scan result
//! is not an error; it is `Ok(vec![])`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReclaimError {
    #[error("Invalid address '{address}': {reason}")] InvalidAddress {
        address: String,
        reason: String,
    },

    #[error("RPC failure: {0}")] RpcFailure(String),
}

impl ReclaimError {
    /// Invalid base58 identifier supplied by the caller
    pub fn invalid_address(address: impl Into<String>, reason: impl Into<String>) -> Self {
        ReclaimError::InvalidAddress {
            address: address.into(),
            reason: reason.into(),
        }
    }

    /// Network, HTTP, JSON-RPC, or response-shape failure
    pub fn rpc_failure(message: impl Into<String>) -> Self {
        ReclaimError::RpcFailure(message.into())
    }
}

impl From<reqwest::Error> for ReclaimError {
    fn from(err: reqwest::Error) -> Self {
        ReclaimError::RpcFailure(format!("HTTP request failed: {}", err))
    }
}

impl From<serde_json::Error> for ReclaimError {
    fn from(err: serde_json::Error) -> Self {
        ReclaimError::RpcFailure(format!("Malformed RPC response: {}", err))
    }
}
