//! Client for the quotient program: provisions the payer's app account, submits a division and
//! reads the stored quotient back.
//!
//! Includes the pipeline steps, the RPC seam they run against, configuration, logging and
//! transaction helpers, plus an in-memory cluster for tests.

use solana_sdk::pubkey::Pubkey;

pub mod config;
pub mod context;
pub mod error;
pub mod logs;
pub mod pipeline;
pub mod pretty;
pub mod rpc;
pub mod test_accounts;
pub mod test_helpers;
pub mod transactions;

pub use logs::LogColor;

pub const SYSTEM_PROGRAM_ID: Pubkey = solana_system_interface::program::ID;
pub const COMPUTE_BUDGET_ID: Pubkey = solana_compute_budget_interface::ID;
