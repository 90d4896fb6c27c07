//! The client's error taxonomy. Every variant is fatal to the pipeline and carries the text a user
//! needs to fix the problem.

use solana_sdk::pubkey::Pubkey;

#[derive(Clone, Copy, Debug, Eq, PartialEq, strum_macros::Display)]
pub enum ErrorKind {
    Connectivity,
    Configuration,
    InsufficientFunds,
    Deployment,
    Submission,
    NotFound,
    Decode,
}

#[derive(Debug, thiserror::Error)]
pub enum QuotientError {
    #[error("Couldn't reach the cluster at {url}: {reason}. Is a validator running? Try `solana-test-validator`")]
    Connectivity { url: String, reason: String },

    #[error("Cannot find a payer keypair in the solana config: {reason}. Set one with `solana config set --keypair <path>` or pass --keypair")]
    MissingPayer { reason: String },

    #[error("Failed to read program keypair at '{path}' due to error: {reason}. Program may need to be deployed with `solana program deploy {so_path}`")]
    MissingProgramKeypair {
        path: String,
        so_path: String,
        reason: String,
    },

    #[error("Couldn't derive the app account address for program {program_id}")]
    AddressDerivation { program_id: Pubkey },

    #[error("Not enough SOL to pay fees: {address} holds {balance} lamports but {required} are required ({} short). Fund it with `solana airdrop`", .required - .balance)]
    InsufficientFunds {
        address: Pubkey,
        balance: u64,
        required: u64,
    },

    #[error("Program {program_id} needs to be deployed with `solana program deploy {so_path}`")]
    ProgramNotDeployed { program_id: Pubkey, so_path: String },

    #[error("Program {program_id} needs to be built and deployed; no build artifact at {so_path}")]
    ProgramNotBuilt { program_id: Pubkey, so_path: String },

    #[error("Program {program_id} is not executable")]
    ProgramNotExecutable { program_id: Pubkey },

    #[error("App account {address} is owned by {owner}, not by program {program_id}")]
    AppAccountOwner {
        address: Pubkey,
        owner: Pubkey,
        program_id: Pubkey,
    },

    #[error("Failed to {action}: {reason}")]
    Submission { action: &'static str, reason: String },

    #[error("Cannot find the app account {address}")]
    AccountNotFound { address: Pubkey },

    #[error("App account {address} holds {actual} bytes but the record is {expected} bytes")]
    Decode {
        address: Pubkey,
        expected: usize,
        actual: usize,
    },
}

impl QuotientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Connectivity { .. } => ErrorKind::Connectivity,
            Self::MissingPayer { .. }
            | Self::MissingProgramKeypair { .. }
            | Self::AddressDerivation { .. } => ErrorKind::Configuration,
            Self::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            Self::ProgramNotDeployed { .. }
            | Self::ProgramNotBuilt { .. }
            | Self::ProgramNotExecutable { .. }
            | Self::AppAccountOwner { .. } => ErrorKind::Deployment,
            Self::Submission { .. } => ErrorKind::Submission,
            Self::AccountNotFound { .. } => ErrorKind::NotFound,
            Self::Decode { .. } => ErrorKind::Decode,
        }
    }

    /// Wraps a failed RPC lookup. Lookups only fail when the endpoint misbehaves, so these are
    /// connectivity errors regardless of which step issued them.
    pub(crate) fn rpc(url: impl Into<String>, error: anyhow::Error) -> Self {
        Self::Connectivity {
            url: url.into(),
            reason: format!("{error:#}"),
        }
    }

    pub(crate) fn submission(action: &'static str, error: anyhow::Error) -> Self {
        Self::Submission {
            action,
            reason: format!("{error:#}"),
        }
    }
}

pub type QuotientResult<T> = Result<T, QuotientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_funds_reports_the_shortfall() {
        let error = QuotientError::InsufficientFunds {
            address: Pubkey::new_unique(),
            balance: 900,
            required: 1_000,
        };
        assert_eq!(error.kind(), ErrorKind::InsufficientFunds);
        assert!(error.to_string().contains("(100 short)"));
    }

    #[test]
    fn lookup_failures_are_connectivity_errors() {
        let error = QuotientError::rpc("http://127.0.0.1:8899", anyhow::anyhow!("refused"));
        assert_eq!(error.kind(), ErrorKind::Connectivity);
        assert!(error.to_string().contains("refused"));
    }
}
