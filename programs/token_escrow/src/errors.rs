use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Invalid amount: amount must be greater than zero")]
    InvalidAmount,
    #[msg("Invalid maker: maker does not match escrow maker")]
    InvalidMaker,
    #[msg("Invalid mint A: mint_a does not match escrow mint_a")]
    InvalidMintA,
    #[msg("Invalid mint B: mint_b does not match escrow mint_b")]
    InvalidMintB,
    #[msg("Unauthorized: only the escrow maker can refund")]
    Unauthorized,
    #[msg("Insufficient funds: token balance is below the required amount")]
    InsufficientFunds,
    #[msg("Invalid escrow address: stored seeds do not derive this account")]
    InvalidEscrowAddress,
}
