//! Strongly-typed JSON-RPC response schema.
//!
//! Every field the core reads is declared here; a missing or mistyped field
//! fails deserialization and surfaces as `ReclaimError::RpcFailure` instead
//! of a crash on absent-field access.

use serde::Deserialize;

/// JSON-RPC 2.0 response envelope
#[derive(Debug, Deserialize)]
pub struct RpcEnvelope<T> {
    #[allow(dead_code)]
    pub jsonrpc: String,
    pub result: Option<T>,
    pub error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

/// `{ "context": {...}, "value": ... }` wrapper used by account queries
#[derive(Debug, Deserialize)]
pub struct WithContext<T> {
    pub value: T,
}

/// One entry from `getTokenAccountsByOwner` with `jsonParsed` encoding
#[derive(Debug, Deserialize)]
pub struct KeyedTokenAccount {
    pub pubkey: String,
    pub account: ParsedAccount,
}

#[derive(Debug, Deserialize)]
pub struct ParsedAccount {
    pub data: ParsedAccountData,
}

#[derive(Debug, Deserialize)]
pub struct ParsedAccountData {
    pub parsed: ParsedTokenData,
}

#[derive(Debug, Deserialize)]
pub struct ParsedTokenData {
    pub info: TokenAccountState,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAccountState {
    pub mint: String,
    pub token_amount: TokenAmount,
}

/// Balance as reported by the endpoint's inline parser
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAmount {
    /// Raw integer amount as a decimal string
    pub amount: String,
    pub decimals: u8,
    pub ui_amount: Option<f64>,
}

/// Result of `getLatestBlockhash`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestBlockhash {
    pub blockhash: String,
    pub last_valid_block_height: u64,
}
