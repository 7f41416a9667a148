use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;

use crate::{constants::ESCROW_SEED, errors::EscrowError};

/// Escrow account that stores all the exchange terms
#[account(discriminator = 1)]
#[derive(InitSpace)]
pub struct Escrow {
    /// Seed used for PDA derivation, lets one maker run several escrows at once
    pub seed: u64,
    /// The maker's wallet address (creator of the escrow)
    pub maker: Pubkey,
    /// Token A mint address (the token maker deposits)
    pub mint_a: Pubkey,
    /// Token B mint address (the token maker wants to receive)
    pub mint_b: Pubkey,
    /// Amount of Token B the maker wants to receive
    pub receive: u64,
    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl Escrow {
    /// Bytes allocated for the account: discriminator plus fields
    pub const SPACE: usize = Escrow::DISCRIMINATOR.len() + Escrow::INIT_SPACE;

    /// Re-derive this record's address from its stored maker, seed and bump
    ///
    /// Client-side check for a fetched record. On chain the same derivation is
    /// enforced by the `seeds`/`bump` constraint on the escrow account.
    pub fn address(&self) -> Result<Pubkey> {
        Pubkey::create_program_address(
            &[
                ESCROW_SEED,
                self.maker.as_ref(),
                &self.seed.to_le_bytes(),
                &[self.bump],
            ],
            &crate::ID,
        )
        .map_err(|_| error!(EscrowError::InvalidEscrowAddress))
    }
}

/// Escrow PDA and canonical bump for a `(maker, seed)` pair
pub fn escrow_address(maker: &Pubkey, seed: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[ESCROW_SEED, maker.as_ref(), &seed.to_le_bytes()],
        &crate::ID,
    )
}

/// Vault address: the escrow PDA's associated token account for mint A
pub fn vault_address(escrow: &Pubkey, mint_a: &Pubkey) -> Pubkey {
    get_associated_token_address(escrow, mint_a)
}
