//! JSON-RPC client for the Solana node endpoint.
//!
//! One HTTP POST per call, no retry, no fallback rotation, no internal
//! timeout. The caller imposes its own deadline if it wants one.

pub mod types;

use serde::de::DeserializeOwned;
use serde_json::json;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

use crate::config::Config;
use crate::errors::ReclaimError;
use crate::logger::{ self, LogTag };
use types::{ KeyedTokenAccount, LatestBlockhash, RpcEnvelope, WithContext };

#[derive(Debug, Clone)]
pub struct RpcClient {
    http: reqwest::Client,
    url: String,
}

impl RpcClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: config.rpc_url.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.url
    }

    /// Execute one JSON-RPC call and deserialize the result into `T`.
    ///
    /// Any HTTP-status error, JSON-RPC error object, or response that does
    /// not match the typed schema comes back as `RpcFailure`.
    async fn execute<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value
    ) -> Result<T, ReclaimError> {
        logger::debug(LogTag::Rpc, &format!("{} -> {}", method, self.url));

        let payload = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let response = self.http
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send().await?;

        if !response.status().is_success() {
            return Err(
                ReclaimError::rpc_failure(
                    format!("HTTP {} from {} for {}", response.status(), self.url, method)
                )
            );
        }

        let body = response.text().await?;
        let envelope: RpcEnvelope<T> = serde_json::from_str(&body)?;

        if let Some(err) = envelope.error {
            return Err(
                ReclaimError::rpc_failure(format!("{} failed: {} (code {})", method, err.message, err.code))
            );
        }

        envelope.result.ok_or_else(|| {
            ReclaimError::rpc_failure(format!("{} response missing result field", method))
        })
    }

    /// All parsed token accounts owned by `owner` under one token program.
    ///
    /// Uses the endpoint's `jsonParsed` encoding, so no raw account buffers
    /// are decoded locally. The method is not paginated; the endpoint
    /// returns the complete set in one response.
    pub async fn get_parsed_token_accounts_by_owner(
        &self,
        owner: &Pubkey,
        program_id: &Pubkey
    ) -> Result<Vec<KeyedTokenAccount>, ReclaimError> {
        let params = json!([
            owner.to_string(),
            { "programId": program_id.to_string() },
            { "encoding": "jsonParsed" }
        ]);

        let result: WithContext<Vec<KeyedTokenAccount>> = self.execute(
            "getTokenAccountsByOwner",
            params
        ).await?;

        Ok(result.value)
    }

    /// Fresh blockhash for transaction construction.
    ///
    /// Never cached; valid only for a short network-defined window, so it is
    /// fetched at build time.
    pub async fn get_latest_blockhash(&self) -> Result<Hash, ReclaimError> {
        let result: WithContext<LatestBlockhash> = self.execute(
            "getLatestBlockhash",
            json!([])
        ).await?;

        Hash::from_str(&result.value.blockhash).map_err(|e| {
            ReclaimError::rpc_failure(
                format!("Invalid blockhash '{}' in response: {}", result.value.blockhash, e)
            )
        })
    }
}
