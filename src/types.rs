use serde::{ Deserialize, Serialize };

/// A discovered token account eligible for closure.
///
/// Produced by the scanner, which only emits accounts whose balance is
/// exactly zero. `decimals` is carried for downstream display/accounting;
/// closing does not need it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenAccountDescriptor {
    /// The token account's own address (base58)
    pub account: String,
    /// Mint address of the token the account holds
    pub mint: String,
    /// Decimal precision of the mint
    pub decimals: u8,
    /// Raw balance; zero for everything the scanner returns
    pub balance: u64,
    /// Whether the account lives under the Token-2022 program
    pub is_token_2022: bool,
}
