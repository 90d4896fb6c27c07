use quotient_interface::state::AccountData;
use solana_keypair::read_keypair_file;
use solana_sdk::{
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signer,
    },
};

use crate::{
    error::{
        QuotientError,
        QuotientResult,
    },
    logs::log_info,
    rpc::ChainRpc,
};

/// Reads the payer keypair named by the Solana CLI config or `--keypair`.
pub fn load_payer(keypair_path: Option<&str>) -> QuotientResult<Keypair> {
    let path = keypair_path.ok_or_else(|| QuotientError::MissingPayer {
        reason: "no keypair path is configured".to_string(),
    })?;
    read_keypair_file(path).map_err(|e| QuotientError::MissingPayer {
        reason: format!("couldn't read {path}: {e}"),
    })
}

/// The lamports a payer must hold before the client submits anything.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FeeRequirement {
    /// Rent-exempt minimum for the app account.
    pub rent_exemption: u64,
    /// Lamports per signature times the configured number of signatures.
    pub signature_fees: u64,
}

impl FeeRequirement {
    pub fn total(&self) -> u64 {
        self.rent_exemption.saturating_add(self.signature_fees)
    }
}

pub async fn required_payer_balance<R: ChainRpc>(
    rpc: &R,
    payer: &Pubkey,
    fee_signatures: u64,
) -> QuotientResult<FeeRequirement> {
    let rent_exemption = rpc
        .minimum_balance_for_rent_exemption(AccountData::LEN)
        .await
        .map_err(|e| QuotientError::rpc(rpc.url(), e))?;
    let lamports_per_signature = rpc
        .lamports_per_signature(payer)
        .await
        .map_err(|e| QuotientError::rpc(rpc.url(), e))?;

    Ok(FeeRequirement {
        rent_exemption,
        signature_fees: lamports_per_signature.saturating_mul(fee_signatures),
    })
}

/// Fails with [`QuotientError::InsufficientFunds`] unless `payer` holds at least the
/// [`FeeRequirement`] total. Returns the payer's balance.
pub async fn check_payer_funds<R: ChainRpc>(
    rpc: &R,
    payer: &Keypair,
    fee_signatures: u64,
) -> QuotientResult<u64> {
    let address = payer.pubkey();
    let required = required_payer_balance(rpc, &address, fee_signatures)
        .await?
        .total();
    let balance = rpc
        .balance(&address)
        .await
        .map_err(|e| QuotientError::rpc(rpc.url(), e))?;

    if balance < required {
        return Err(QuotientError::InsufficientFunds {
            address,
            balance,
            required,
        });
    }

    log_info(
        "Using account",
        format!(
            "{address} containing {} SOL to pay for fees",
            balance as f64 / LAMPORTS_PER_SOL as f64
        ),
    );

    Ok(balance)
}
