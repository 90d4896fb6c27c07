//! Seed and derivation for the app account address.

use solana_sdk::pubkey::Pubkey;

use crate::error::{
    InterfaceError,
    InterfaceResult,
};

/// The seed used with the payer as the base key to derive the app account.
pub const APP_ACCOUNT_SEED: &str = "app";

/// Derives the app account address for `base` (the payer) under `program_id`.
///
/// Equivalent to `sha256(base || "app" || program_id)`, the same derivation the system program
/// checks in `CreateAccountWithSeed`, so the result is reproducible from any client.
pub fn find_app_account_address(base: &Pubkey, program_id: &Pubkey) -> InterfaceResult<Pubkey> {
    create_address_with_seed(base, APP_ACCOUNT_SEED, program_id)
}

pub fn create_address_with_seed(
    base: &Pubkey,
    seed: &str,
    owner: &Pubkey,
) -> InterfaceResult<Pubkey> {
    Pubkey::create_with_seed(base, seed, owner).map_err(|_| InterfaceError::InvalidSeed)
}
