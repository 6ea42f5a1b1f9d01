//! Unsigned close-transaction construction.
//!
//! Builds transactions that close token accounts and return their rent
//! deposit to the owner. Nothing here signs or submits; the caller receives
//! unsigned transactions with the fee payer and a fresh blockhash set.

use solana_sdk::{
    hash::Hash,
    instruction::{ AccountMeta, Instruction },
    pubkey::Pubkey,
    transaction::Transaction,
};

use crate::constants::{ CLOSE_ACCOUNT_OPCODE, MAX_CLOSES_PER_TX };
use crate::errors::ReclaimError;
use crate::logger::{ self, LogTag };
use crate::rpc::RpcClient;
use crate::utils::parse_address;

pub struct CloseTransactionBuilder {
    rpc: RpcClient,
}

impl CloseTransactionBuilder {
    pub fn new(rpc: RpcClient) -> Self {
        Self { rpc }
    }

    /// Build one unsigned transaction closing `account_ids` under the SPL
    /// Token program.
    ///
    /// The wallet address is fee payer, rent destination, and sole signing
    /// authority. One instruction per id, in input order. An empty id list
    /// yields a zero-instruction transaction; callers should guard against
    /// submitting it. Lists longer than `MAX_CLOSES_PER_TX` produce an
    /// oversized transaction the network will reject - use
    /// [`build_chunked`](Self::build_chunked) for those.
    pub async fn build(
        &self,
        wallet_address: &str,
        account_ids: &[String]
    ) -> Result<Transaction, ReclaimError> {
        self.build_for_program(wallet_address, account_ids, false).await
    }

    /// Same as [`build`](Self::build) with an explicit token program choice.
    pub async fn build_for_program(
        &self,
        wallet_address: &str,
        account_ids: &[String],
        token_2022: bool
    ) -> Result<Transaction, ReclaimError> {
        let owner = parse_address(wallet_address)?;
        let instructions = close_instructions(&owner, account_ids, token_2022)?;

        if instructions.len() > MAX_CLOSES_PER_TX {
            logger::warning(
                LogTag::Build,
                &format!(
                    "{} close instructions exceed the {}-per-transaction packing bound; the network will reject this transaction as oversized (use build_chunked)",
                    instructions.len(),
                    MAX_CLOSES_PER_TX
                )
            );
        }

        let blockhash = self.rpc.get_latest_blockhash().await?;

        logger::debug(
            LogTag::Build,
            &format!("Built close transaction with {} instructions", instructions.len())
        );

        Ok(assemble_transaction(&instructions, &owner, blockhash))
    }

    /// Build as many transactions as needed, `MAX_CLOSES_PER_TX` closes per
    /// transaction.
    ///
    /// Every input id lands in exactly one output transaction, in input
    /// order; nothing is truncated. Each transaction gets its own freshly
    /// fetched blockhash.
    pub async fn build_chunked(
        &self,
        wallet_address: &str,
        account_ids: &[String],
        token_2022: bool
    ) -> Result<Vec<Transaction>, ReclaimError> {
        let owner = parse_address(wallet_address)?;
        let batches = chunked_close_instructions(&owner, account_ids, token_2022)?;

        let mut transactions = Vec::new();
        for instructions in &batches {
            let blockhash = self.rpc.get_latest_blockhash().await?;
            transactions.push(assemble_transaction(instructions, &owner, blockhash));
        }

        logger::debug(
            LogTag::Build,
            &format!(
                "Built {} transaction(s) for {} account(s)",
                transactions.len(),
                account_ids.len()
            )
        );

        Ok(transactions)
    }
}

/// The token program's CloseAccount instruction.
///
/// Account roles, in fixed order: the account being closed (writable), the
/// owner as rent destination (writable), the owner as closing authority
/// (read-only signer). Data is the single CloseAccount opcode byte.
pub fn close_instruction(account: &Pubkey, owner: &Pubkey, token_2022: bool) -> Instruction {
    let program_id = if token_2022 { spl_token_2022::id() } else { spl_token::id() };

    Instruction {
        program_id,
        accounts: vec![
            AccountMeta::new(*account, false),
            AccountMeta::new(*owner, false),
            AccountMeta::new_readonly(*owner, true)
        ],
        data: vec![CLOSE_ACCOUNT_OPCODE],
    }
}

/// One close instruction per account id, in input order.
///
/// Every id is validated up front; a malformed id fails with
/// `InvalidAddress` before any network traffic.
pub fn close_instructions(
    owner: &Pubkey,
    account_ids: &[String],
    token_2022: bool
) -> Result<Vec<Instruction>, ReclaimError> {
    account_ids
        .iter()
        .map(|id| {
            let account = parse_address(id)?;
            Ok(close_instruction(&account, owner, token_2022))
        })
        .collect()
}

/// Instruction batches for chunked building, `MAX_CLOSES_PER_TX` per batch.
///
/// Every input id lands in exactly one batch, in input order.
fn chunked_close_instructions(
    owner: &Pubkey,
    account_ids: &[String],
    token_2022: bool
) -> Result<Vec<Vec<Instruction>>, ReclaimError> {
    account_ids
        .chunks(MAX_CLOSES_PER_TX)
        .map(|chunk| close_instructions(owner, chunk, token_2022))
        .collect()
}

fn assemble_transaction(
    instructions: &[Instruction],
    fee_payer: &Pubkey,
    blockhash: Hash
) -> Transaction {
    let mut transaction = Transaction::new_with_payer(instructions, Some(fee_payer));
    transaction.message.recent_blockhash = blockhash;
    transaction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    const WALLET: &str = "JUP6LkbZbjS1jKKwapdHNy74zcZ3tLUZoi5QNyVTaV4";
    const ACC_1: &str = "MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr";
    const ACC_2: &str = "Stake11111111111111111111111111111111111111";

    fn owner() -> Pubkey {
        parse_address(WALLET).unwrap()
    }

    #[test]
    fn close_instruction_has_fixed_roles_and_opcode() {
        let account = parse_address(ACC_1).unwrap();
        let ix = close_instruction(&account, &owner(), false);

        assert_eq!(ix.program_id, spl_token::id());
        assert_eq!(ix.data, vec![9u8]);
        assert_eq!(ix.accounts.len(), 3);

        // Target account: writable, non-signing
        assert_eq!(ix.accounts[0].pubkey, account);
        assert!(ix.accounts[0].is_writable);
        assert!(!ix.accounts[0].is_signer);

        // Rent destination: the owner, writable, non-signing
        assert_eq!(ix.accounts[1].pubkey, owner());
        assert!(ix.accounts[1].is_writable);
        assert!(!ix.accounts[1].is_signer);

        // Authority: the owner, read-only, signing
        assert_eq!(ix.accounts[2].pubkey, owner());
        assert!(!ix.accounts[2].is_writable);
        assert!(ix.accounts[2].is_signer);
    }

    #[test]
    fn token_2022_selects_the_other_program() {
        let account = parse_address(ACC_1).unwrap();
        let ix = close_instruction(&account, &owner(), true);
        assert_eq!(ix.program_id, spl_token_2022::id());
        assert_eq!(ix.data, vec![9u8]);
    }

    #[test]
    fn one_instruction_per_id_in_input_order() {
        let ids = vec![ACC_1.to_string(), ACC_2.to_string()];
        let instructions = close_instructions(&owner(), &ids, false).unwrap();

        assert_eq!(instructions.len(), 2);
        assert_eq!(instructions[0].accounts[0].pubkey, parse_address(ACC_1).unwrap());
        assert_eq!(instructions[1].accounts[0].pubkey, parse_address(ACC_2).unwrap());

        // Rent always returns to the requester, never a third party
        for ix in &instructions {
            assert_eq!(ix.accounts[1].pubkey, owner());
            assert_eq!(ix.accounts[2].pubkey, owner());
        }
    }

    #[test]
    fn empty_id_list_is_valid() {
        let instructions = close_instructions(&owner(), &[], false).unwrap();
        assert!(instructions.is_empty());
    }

    #[test]
    fn malformed_account_id_is_invalid_address() {
        let ids = vec![ACC_1.to_string(), "zz!!".to_string()];
        let err = close_instructions(&owner(), &ids, false).unwrap_err();
        assert!(matches!(err, ReclaimError::InvalidAddress { .. }));
    }

    #[test]
    fn instruction_sequences_are_deterministic_across_builds() {
        let ids = vec![ACC_1.to_string(), ACC_2.to_string()];
        let first = close_instructions(&owner(), &ids, false).unwrap();
        let second = close_instructions(&owner(), &ids, false).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn assembled_transaction_sets_payer_blockhash_and_order() {
        let ids = vec![ACC_1.to_string(), ACC_2.to_string()];
        let instructions = close_instructions(&owner(), &ids, false).unwrap();
        let blockhash = Hash::new_from_array([7u8; 32]);

        let tx = assemble_transaction(&instructions, &owner(), blockhash);

        assert_eq!(tx.message.recent_blockhash, blockhash);
        assert_eq!(tx.message.account_keys[0], owner());
        assert_eq!(tx.message.instructions.len(), 2);
        // Unsigned: signature slots exist but are empty defaults
        assert!(tx.signatures.iter().all(|s| *s == Default::default()));
    }

    #[test]
    fn chunked_batches_cover_every_id_in_order_without_truncation() {
        // Alternate two addresses so ordering mistakes are visible
        let ids: Vec<String> = (0..MAX_CLOSES_PER_TX * 2 + 3)
            .map(|i| if i % 2 == 0 { ACC_1.to_string() } else { ACC_2.to_string() })
            .collect();

        let batches = chunked_close_instructions(&owner(), &ids, false).unwrap();

        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].len(), MAX_CLOSES_PER_TX);
        assert_eq!(batches[1].len(), MAX_CLOSES_PER_TX);
        assert_eq!(batches[2].len(), 3);

        // Flattened, the batches carry exactly the input ids in input order
        let targets: Vec<Pubkey> = batches
            .iter()
            .flatten()
            .map(|ix| ix.accounts[0].pubkey)
            .collect();
        let expected: Vec<Pubkey> = ids
            .iter()
            .map(|id| parse_address(id).unwrap())
            .collect();
        assert_eq!(targets, expected);

        // Each batch's instructions are the real close shape
        for ix in batches.iter().flatten() {
            assert_eq!(ix.data, vec![9u8]);
            assert_eq!(ix.accounts[1].pubkey, owner());
        }
    }

    #[test]
    fn chunked_batches_reject_malformed_ids_in_later_chunks() {
        let mut ids: Vec<String> = (0..MAX_CLOSES_PER_TX + 1).map(|_| ACC_1.to_string()).collect();
        ids[MAX_CLOSES_PER_TX] = "zz!!".to_string();

        let err = chunked_close_instructions(&owner(), &ids, false).unwrap_err();
        assert!(matches!(err, ReclaimError::InvalidAddress { .. }));
    }

    #[tokio::test]
    async fn malformed_wallet_address_fails_before_any_network_call() {
        let config = Config {
            rpc_url: "http://127.0.0.1:1".to_string(),
        };
        let builder = CloseTransactionBuilder::new(RpcClient::new(&config));

        let err = builder.build("not base58", &[ACC_1.to_string()]).await.unwrap_err();
        assert!(matches!(err, ReclaimError::InvalidAddress { .. }));
    }
}
