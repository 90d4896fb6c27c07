use solana_sdk::{
    pubkey::Pubkey,
    signature::Keypair,
};

/// Everything the later pipeline steps need, fixed once the app account exists.
pub struct AppContext<'a, R> {
    pub rpc: &'a R,
    pub payer: &'a Keypair,
    pub program_id: Pubkey,
    pub app_account: Pubkey,
}
