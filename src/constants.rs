//! Shared constants for the rent reclamation core.

/// Lamports per SOL
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Public mainnet RPC endpoint used when no override is configured
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Rent deposit held by a standard token account (0.00203928 SOL),
/// refunded to the destination when the account is closed.
pub const TOKEN_ACCOUNT_RENT_LAMPORTS: u64 = 2_039_280;

/// Instruction discriminator for the token program's CloseAccount operation.
/// Identical for SPL Token and Token-2022.
pub const CLOSE_ACCOUNT_OPCODE: u8 = 9;

/// Maximum close instructions packed into one transaction.
///
/// A transaction is capped at 1232 bytes. Each additional close adds one
/// 32-byte account key plus a few bytes of per-instruction overhead, so
/// roughly 30 closes fit; 24 leaves headroom for the message header and
/// future account growth. Inputs larger than this are split across
/// transactions, never truncated.
pub const MAX_CLOSES_PER_TX: usize = 24;
