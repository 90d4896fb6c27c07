//! Command-line arguments layered over the Solana CLI config file.
//!
//! Running with no flags reproduces the default pipeline: the cluster and payer come from the
//! Solana CLI config, the program keypair from `dist/program`, and the operands are 15 and 5.

use std::path::PathBuf;

use clap::Parser;
use solana_cli_config::Config;

use crate::{
    logs::log_warning,
    transactions::SendTransactionConfig,
};

/// Used when the Solana CLI config can't be loaded and no `--url` is passed.
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8899";
pub const DEFAULT_PROGRAM_KEYPAIR_PATH: &str = "dist/program/quotient-keypair.json";
pub const DEFAULT_PROGRAM_SO_PATH: &str = "dist/program/quotient.so";
/// The number of signatures the payer must be able to pay for, on top of the app account's rent,
/// before the client submits anything.
pub const DEFAULT_FEE_SIGNATURES: u64 = 100;
pub const DEFAULT_NUMERATOR: i32 = 15;
pub const DEFAULT_DENOMINATOR: i32 = 5;

#[derive(Parser, Debug)]
#[command(
    name = "quotient",
    about = "Stores numerator / denominator in a program-owned account and reads it back"
)]
pub struct CliArgs {
    /// Path to a Solana CLI config file. Defaults to the CLI's standard location.
    #[arg(short = 'C', long = "config")]
    pub config_file: Option<String>,

    /// RPC endpoint. Overrides `json_rpc_url` from the Solana CLI config.
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// Payer keypair file. Overrides `keypair_path` from the Solana CLI config.
    #[arg(short = 'k', long)]
    pub keypair: Option<String>,

    /// The deployed program's keypair file; only its public key is used.
    #[arg(long, default_value = DEFAULT_PROGRAM_KEYPAIR_PATH)]
    pub program_keypair: PathBuf,

    /// The program's build artifact, used to tell "not built" from "not deployed".
    #[arg(long, default_value = DEFAULT_PROGRAM_SO_PATH)]
    pub program_so: PathBuf,

    #[arg(long, default_value_t = DEFAULT_NUMERATOR, allow_negative_numbers = true)]
    pub numerator: i32,

    #[arg(long, default_value_t = DEFAULT_DENOMINATOR, allow_negative_numbers = true)]
    pub denominator: i32,

    /// How many signatures' worth of fees the payer must hold in addition to the app account rent.
    #[arg(long, default_value_t = DEFAULT_FEE_SIGNATURES)]
    pub fee_signatures: u64,

    /// Prepends compute budget instructions with this unit limit to every transaction.
    #[arg(long)]
    pub compute_unit_limit: Option<u32>,

    /// Don't log signatures of confirmed transactions.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Everything the pipeline needs from the outside world, resolved once at startup.
#[derive(Clone, Debug)]
pub struct Settings {
    pub rpc_url: String,
    /// `None` when neither the Solana CLI config nor `--keypair` names a payer.
    pub payer_keypair_path: Option<String>,
    pub program_keypair_path: PathBuf,
    pub program_so_path: PathBuf,
    pub fee_signatures: u64,
    pub numerator: i32,
    pub denominator: i32,
    pub transaction_config: SendTransactionConfig,
}

impl Settings {
    pub fn from_args(args: CliArgs) -> Self {
        let CliArgs {
            config_file,
            url,
            keypair,
            program_keypair,
            program_so,
            numerator,
            denominator,
            fee_signatures,
            compute_unit_limit,
            quiet,
        } = args;

        let cli_config = load_cli_config(config_file);
        let rpc_url = url
            .or_else(|| cli_config.as_ref().map(|c| c.json_rpc_url.clone()))
            .unwrap_or_else(|| DEFAULT_RPC_URL.to_string());
        let payer_keypair_path = keypair.or_else(|| cli_config.map(|c| c.keypair_path));

        Self {
            rpc_url,
            payer_keypair_path,
            program_keypair_path: program_keypair,
            program_so_path: program_so,
            fee_signatures,
            numerator,
            denominator,
            transaction_config: SendTransactionConfig {
                compute_budget: compute_unit_limit,
                debug_logs: Some(!quiet),
            },
        }
    }
}

fn load_cli_config(config_file: Option<String>) -> Option<Config> {
    let Some(path) = config_file.or_else(|| solana_cli_config::CONFIG_FILE.clone()) else {
        log_warning("Solana config", "no config file location could be determined");
        return None;
    };

    match Config::load(&path) {
        Ok(config) => Some(config),
        Err(e) => {
            log_warning("Solana config", format!("couldn't load {path}: {e}"));
            None
        }
    }
}
