//! The seam between the pipeline and the cluster.
//!
//! Every step talks to the cluster through [`ChainRpc`], so the pipeline runs unchanged against
//! a live RPC endpoint ([`ClusterRpc`]) or an in-memory cluster in tests.

use anyhow::Context;
use solana_account::Account;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_instruction::Instruction;
use solana_sdk::{
    message::Message,
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
    },
};

use crate::transactions::{
    send_transaction_with_config,
    SendTransactionConfig,
};

#[allow(async_fn_in_trait)]
pub trait ChainRpc {
    fn url(&self) -> String;

    /// The version string the remote node reports.
    async fn version(&self) -> anyhow::Result<String>;

    async fn balance(&self, address: &Pubkey) -> anyhow::Result<u64>;

    /// `None` if no account exists at `address`.
    async fn account(&self, address: &Pubkey) -> anyhow::Result<Option<Account>>;

    async fn minimum_balance_for_rent_exemption(&self, data_len: usize) -> anyhow::Result<u64>;

    /// The fee for a single signature, as charged to `payer` at the latest blockhash.
    async fn lamports_per_signature(&self, payer: &Pubkey) -> anyhow::Result<u64>;

    /// Sends `instructions` in one transaction signed and paid for by `payer` and waits for
    /// confirmation.
    async fn send_and_confirm(
        &self,
        payer: &Keypair,
        instructions: &[Instruction],
    ) -> anyhow::Result<Signature>;
}

impl<T: ChainRpc> ChainRpc for &T {
    fn url(&self) -> String {
        (**self).url()
    }

    async fn version(&self) -> anyhow::Result<String> {
        (**self).version().await
    }

    async fn balance(&self, address: &Pubkey) -> anyhow::Result<u64> {
        (**self).balance(address).await
    }

    async fn account(&self, address: &Pubkey) -> anyhow::Result<Option<Account>> {
        (**self).account(address).await
    }

    async fn minimum_balance_for_rent_exemption(&self, data_len: usize) -> anyhow::Result<u64> {
        (**self).minimum_balance_for_rent_exemption(data_len).await
    }

    async fn lamports_per_signature(&self, payer: &Pubkey) -> anyhow::Result<u64> {
        (**self).lamports_per_signature(payer).await
    }

    async fn send_and_confirm(
        &self,
        payer: &Keypair,
        instructions: &[Instruction],
    ) -> anyhow::Result<Signature> {
        (**self).send_and_confirm(payer, instructions).await
    }
}

/// A live cluster, queried and written at `confirmed` commitment.
pub struct ClusterRpc {
    client: RpcClient,
    config: SendTransactionConfig,
}

impl ClusterRpc {
    pub fn new(url: String, config: SendTransactionConfig) -> Self {
        Self {
            client: RpcClient::new_with_commitment(url, CommitmentConfig::confirmed()),
            config,
        }
    }
}

impl ChainRpc for ClusterRpc {
    fn url(&self) -> String {
        self.client.url()
    }

    async fn version(&self) -> anyhow::Result<String> {
        let version = self
            .client
            .get_version()
            .await
            .context("Couldn't fetch the node version")?;
        Ok(version.solana_core)
    }

    async fn balance(&self, address: &Pubkey) -> anyhow::Result<u64> {
        self.client
            .get_balance(address)
            .await
            .with_context(|| format!("Couldn't fetch the balance of {address}"))
    }

    async fn account(&self, address: &Pubkey) -> anyhow::Result<Option<Account>> {
        let response = self
            .client
            .get_account_with_commitment(address, self.client.commitment())
            .await
            .with_context(|| format!("Couldn't fetch account {address}"))?;
        Ok(response.value)
    }

    async fn minimum_balance_for_rent_exemption(&self, data_len: usize) -> anyhow::Result<u64> {
        self.client
            .get_minimum_balance_for_rent_exemption(data_len)
            .await
            .context("Couldn't fetch the rent-exempt minimum")
    }

    async fn lamports_per_signature(&self, payer: &Pubkey) -> anyhow::Result<u64> {
        let bh = self
            .client
            .get_latest_blockhash()
            .await
            .context("Couldn't fetch the latest blockhash")?;
        // A message with no instructions still needs the fee payer's signature, so its fee is
        // exactly one signature's worth.
        let message = Message::new_with_blockhash(&[], Some(payer), &bh);
        self.client
            .get_fee_for_message(&message)
            .await
            .context("Couldn't fetch the fee for a single signature")
    }

    async fn send_and_confirm(
        &self,
        payer: &Keypair,
        instructions: &[Instruction],
    ) -> anyhow::Result<Signature> {
        send_transaction_with_config(&self.client, payer, instructions, &self.config).await
    }
}
