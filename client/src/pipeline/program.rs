use std::path::Path;

use quotient_interface::{
    seeds::{
        find_app_account_address,
        APP_ACCOUNT_SEED,
    },
    state::AccountData,
};
use solana_keypair::read_keypair_file;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signer,
    },
};
use solana_system_interface::instruction::create_account_with_seed;

use crate::{
    error::{
        QuotientError,
        QuotientResult,
    },
    logs::{
        log_info,
        log_success,
    },
    rpc::ChainRpc,
};

/// Reads the program id out of the program's deploy keypair. Only the public key is used.
pub fn read_program_id(keypair_path: &Path, so_path: &Path) -> QuotientResult<Pubkey> {
    read_keypair_file(keypair_path)
        .map(|keypair| keypair.pubkey())
        .map_err(|e| QuotientError::MissingProgramKeypair {
            path: keypair_path.display().to_string(),
            so_path: so_path.display().to_string(),
            reason: e.to_string(),
        })
}

/// Fails unless `program_id` exists on-chain and is executable.
///
/// `so_path` only shapes the error: a missing program with a build artifact on disk needs to be
/// deployed, one without needs to be built first.
pub async fn check_program_deployed<R: ChainRpc>(
    rpc: &R,
    program_id: &Pubkey,
    so_path: &Path,
) -> QuotientResult<()> {
    let program_info = rpc
        .account(program_id)
        .await
        .map_err(|e| QuotientError::rpc(rpc.url(), e))?;

    match program_info {
        None if so_path.exists() => Err(QuotientError::ProgramNotDeployed {
            program_id: *program_id,
            so_path: so_path.display().to_string(),
        }),
        None => Err(QuotientError::ProgramNotBuilt {
            program_id: *program_id,
            so_path: so_path.display().to_string(),
        }),
        Some(info) if !info.executable => Err(QuotientError::ProgramNotExecutable {
            program_id: *program_id,
        }),
        Some(_) => {
            log_info("Using program", program_id);
            Ok(())
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AppAccount {
    pub address: Pubkey,
    /// Whether this call created the account, as opposed to finding it already on-chain.
    pub created: bool,
}

/// Derives the payer's app account under `program_id` and creates it if it doesn't exist yet.
///
/// Creation is conditioned on the account being absent, so calling this again after a failed
/// attempt is safe.
pub async fn ensure_app_account<R: ChainRpc>(
    rpc: &R,
    payer: &Keypair,
    program_id: &Pubkey,
) -> QuotientResult<AppAccount> {
    let payer_address = payer.pubkey();
    let address = find_app_account_address(&payer_address, program_id).map_err(|_| {
        QuotientError::AddressDerivation {
            program_id: *program_id,
        }
    })?;

    let existing = rpc
        .account(&address)
        .await
        .map_err(|e| QuotientError::rpc(rpc.url(), e))?;

    if let Some(account) = existing {
        if account.owner != *program_id {
            return Err(QuotientError::AppAccountOwner {
                address,
                owner: account.owner,
                program_id: *program_id,
            });
        }
        log_info("Using app account", address);
        return Ok(AppAccount {
            address,
            created: false,
        });
    }

    log_info("Creating app account", address);
    let lamports = rpc
        .minimum_balance_for_rent_exemption(AccountData::LEN)
        .await
        .map_err(|e| QuotientError::rpc(rpc.url(), e))?;

    let create = create_account_with_seed(
        &payer_address,
        &address,
        &payer_address,
        APP_ACCOUNT_SEED,
        lamports,
        AccountData::LEN as u64,
        program_id,
    );
    rpc.send_and_confirm(payer, &[create])
        .await
        .map_err(|e| QuotientError::submission("create the app account", e))?;

    log_success("Created app account", address);

    Ok(AppAccount {
        address,
        created: true,
    })
}
