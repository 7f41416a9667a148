use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
mod instructions;
pub mod state;


pub use constants::*;
pub use instructions::*;
pub use state::{escrow_address, vault_address, Escrow};

declare_id!("3xQs9K4kbhkECPMommzqtrVqRpnG4nuEamnRAzUGB5u5");

#[program]
pub mod token_escrow {
    use super::*;

    /// Open an escrow: maker locks `deposit` of mint A and asks for `receive` of mint B
    #[instruction(discriminator = 0)]
    pub fn make(ctx: Context<Make>, seed: u64, deposit: u64, receive: u64) -> Result<()> {
        instructions::make::handler(ctx, seed, deposit, receive)
    }

    /// Settle the escrow: taker pays mint B to the maker and receives the vault's mint A
    #[instruction(discriminator = 1)]
    pub fn take(ctx: Context<Take>) -> Result<()> {
        instructions::take::handler(ctx)
    }

    /// Cancel the escrow: maker reclaims mint A and both accounts are closed
    #[instruction(discriminator = 2)]
    pub fn refund(ctx: Context<Refund>) -> Result<()> {
        instructions::refund::handler(ctx)
    }
}
