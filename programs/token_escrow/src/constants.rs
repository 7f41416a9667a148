/// PDA seed prefix for escrow records: `[ESCROW_SEED, maker, seed.to_le_bytes()]`
pub const ESCROW_SEED: &[u8] = b"escrow";
