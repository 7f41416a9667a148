use anchor_lang::prelude::*;

#[event]
pub struct MakeEvent {
    pub escrow: Pubkey,
    pub maker: Pubkey,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
    pub seed: u64,
    pub deposit: u64,
    pub receive: u64,
}

#[event]
pub struct TakeEvent {
    pub escrow: Pubkey,
    pub maker: Pubkey,
    pub taker: Pubkey,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
    /// Amount of mint B paid to the maker
    pub paid: u64,
    /// Amount of mint A released from the vault to the taker
    pub released: u64,
}

#[event]
pub struct RefundEvent {
    pub escrow: Pubkey,
    pub maker: Pubkey,
    pub mint_a: Pubkey,
    pub refunded: u64,
}
