use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{
        close_account, transfer_checked, CloseAccount, Mint, Token, TokenAccount, TransferChecked,
    },
};

use crate::{constants::ESCROW_SEED, errors::EscrowError, events::RefundEvent, state::Escrow};

#[derive(Accounts)]
pub struct Refund<'info> {
    /// Must be the maker stored in the escrow
    #[account(mut)]
    pub maker: Signer<'info>,

    /// Escrow account storing exchange terms (will be closed)
    #[account(
        mut,
        close = maker,
        constraint = escrow.maker == maker.key() @ EscrowError::Unauthorized,
        has_one = mint_a @ EscrowError::InvalidMintA,
        seeds = [ESCROW_SEED, escrow.maker.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, Escrow>,

    /// Token A mint
    pub mint_a: Account<'info, Mint>,

    /// Vault holding Token A (owned by escrow)
    #[account(
        mut,
        associated_token::mint = mint_a,
        associated_token::authority = escrow,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Maker's associated token account for Token A (receives refund)
    #[account(
        init_if_needed,
        payer = maker,
        associated_token::mint = mint_a,
        associated_token::authority = maker,
    )]
    pub maker_ata_a: Account<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Refund<'info> {
    /// Withdraw all Token A from vault back to maker and close the vault
    pub fn refund_and_close_vault(&mut self) -> Result<u64> {
        let signer_seeds: &[&[&[u8]]] = &[&[
            ESCROW_SEED,
            self.escrow.maker.as_ref(),
            &self.escrow.seed.to_le_bytes(),
            &[self.escrow.bump],
        ]];
        let amount = self.vault.amount;

        let cpi_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.mint_a.to_account_info(),
            to: self.maker_ata_a.to_account_info(),
            authority: self.escrow.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        );
        transfer_checked(cpi_ctx, amount, self.mint_a.decimals)?;

        let cpi_accounts = CloseAccount {
            account: self.vault.to_account_info(),
            destination: self.maker.to_account_info(),
            authority: self.escrow.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        );
        close_account(cpi_ctx)?;

        Ok(amount)
    }
}

pub fn handler(ctx: Context<Refund>) -> Result<()> {
    let refunded = ctx.accounts.refund_and_close_vault()?;

    msg!(
        "Escrow {} refunded {} of mint A",
        ctx.accounts.escrow.key(),
        refunded
    );
    emit!(RefundEvent {
        escrow: ctx.accounts.escrow.key(),
        maker: ctx.accounts.maker.key(),
        mint_a: ctx.accounts.mint_a.key(),
        refunded,
    });

    Ok(())
}
