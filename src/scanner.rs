//! Empty token account discovery.
//!
//! One query per token program against the configured endpoint, with the
//! endpoint doing the account parsing (`jsonParsed` encoding). Only accounts
//! with an exactly-zero balance come back; zero eligible accounts is a valid
//! result, not an error.

use crate::errors::ReclaimError;
use crate::logger::{ self, LogTag };
use crate::rpc::types::KeyedTokenAccount;
use crate::rpc::RpcClient;
use crate::types::TokenAccountDescriptor;
use crate::utils::parse_address;

pub struct AccountScanner {
    rpc: RpcClient,
}

impl AccountScanner {
    pub fn new(rpc: RpcClient) -> Self {
        Self { rpc }
    }

    /// Find every zero-balance token account owned by `wallet_address`.
    ///
    /// Covers both the SPL Token and Token-2022 programs. Fails with
    /// `InvalidAddress` before any network call if the address is malformed;
    /// endpoint errors propagate as `RpcFailure` with no retry.
    pub async fn scan(
        &self,
        wallet_address: &str
    ) -> Result<Vec<TokenAccountDescriptor>, ReclaimError> {
        let owner = parse_address(wallet_address)?;

        let mut descriptors = Vec::new();

        let spl_accounts = self.rpc
            .get_parsed_token_accounts_by_owner(&owner, &spl_token::id()).await?;
        for item in &spl_accounts {
            descriptors.push(descriptor_from_keyed(item, false)?);
        }

        let token_2022_accounts = self.rpc
            .get_parsed_token_accounts_by_owner(&owner, &spl_token_2022::id()).await?;
        for item in &token_2022_accounts {
            descriptors.push(descriptor_from_keyed(item, true)?);
        }

        let total = descriptors.len();
        let empty = filter_empty(descriptors);

        logger::debug(
            LogTag::Scan,
            &format!("{} token accounts, {} empty", total, empty.len())
        );

        Ok(empty)
    }
}

/// Convert one parsed RPC entry into a descriptor.
///
/// The raw amount arrives as a decimal string; anything unparseable means
/// the endpoint response is malformed.
fn descriptor_from_keyed(
    item: &KeyedTokenAccount,
    is_token_2022: bool
) -> Result<TokenAccountDescriptor, ReclaimError> {
    let state = &item.account.data.parsed.info;
    let balance = state.token_amount.amount.parse::<u64>().map_err(|e| {
        ReclaimError::rpc_failure(
            format!(
                "Malformed token amount '{}' for account {}: {}",
                state.token_amount.amount,
                item.pubkey,
                e
            )
        )
    })?;

    Ok(TokenAccountDescriptor {
        account: item.pubkey.clone(),
        mint: state.mint.clone(),
        decimals: state.token_amount.decimals,
        balance,
        is_token_2022,
    })
}

/// Keep only accounts whose balance is exactly zero.
///
/// The raw integer amount is compared, not the float-typed UI amount, so the
/// check is exact.
fn filter_empty(accounts: Vec<TokenAccountDescriptor>) -> Vec<TokenAccountDescriptor> {
    accounts
        .into_iter()
        .filter(|a| a.balance == 0)
        .collect()
}
