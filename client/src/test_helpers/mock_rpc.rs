use std::{
    cell::RefCell,
    collections::HashMap,
};

use anyhow::{
    anyhow,
    bail,
    Context,
};
use quotient_interface::{
    instructions::DivideInstructionData,
    pack::{
        Pack,
        Unpack,
    },
    seeds::create_address_with_seed,
    state::AccountData,
};
use solana_account::Account;
use solana_instruction::Instruction;
use solana_sdk::{
    message::Message,
    pubkey::Pubkey,
    rent::Rent,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
};
use solana_system_interface::instruction::SystemInstruction;

use crate::{
    rpc::ChainRpc,
    COMPUTE_BUDGET_ID,
    SYSTEM_PROGRAM_ID,
};

pub const MOCK_URL: &str = "mock://cluster";
pub const MOCK_VERSION: &str = "3.1.6";
pub const MOCK_LAMPORTS_PER_SIGNATURE: u64 = 5_000;

/// The rent-exempt minimum under the default cluster rent schedule.
pub fn mock_rent_exemption(data_len: usize) -> u64 {
    Rent::default().minimum_balance(data_len)
}

#[derive(Clone, Default)]
struct ClusterState {
    accounts: HashMap<Pubkey, Account>,
    /// The instructions of every confirmed transaction, in order.
    transactions: Vec<Vec<Instruction>>,
}

/// A single-threaded, in-memory cluster.
///
/// Transactions are applied atomically: system `CreateAccountWithSeed` and compute budget
/// instructions are understood, and any other executable program is treated as the quotient
/// program, which stores `numerator / denominator` in its account.
pub struct MockRpc {
    state: RefCell<ClusterState>,
    version: String,
    reachable: bool,
    reject_transactions: bool,
}

impl Default for MockRpc {
    fn default() -> Self {
        Self {
            state: Default::default(),
            version: MOCK_VERSION.to_string(),
            reachable: true,
            reject_transactions: false,
        }
    }
}

impl MockRpc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request fails as if the endpoint refused the connection.
    pub fn unreachable(mut self) -> Self {
        self.reachable = false;
        self
    }

    /// The node reports `version` instead of [`MOCK_VERSION`].
    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    /// Lookups succeed but every transaction is rejected.
    pub fn rejecting_transactions(mut self) -> Self {
        self.reject_transactions = true;
        self
    }

    pub fn with_account(self, address: Pubkey, account: Account) -> Self {
        self.state.borrow_mut().accounts.insert(address, account);
        self
    }

    /// Adds a system-owned account holding `lamports`.
    pub fn with_balance(self, address: Pubkey, lamports: u64) -> Self {
        self.with_account(address, Account::new(lamports, 0, &SYSTEM_PROGRAM_ID))
    }

    /// Adds an executable program account at `program_id`.
    pub fn with_program(self, program_id: Pubkey) -> Self {
        let program = Account {
            lamports: mock_rent_exemption(36),
            data: vec![0; 36],
            owner: Pubkey::new_unique(),
            executable: true,
            rent_epoch: 0,
        };
        self.with_account(program_id, program)
    }

    pub fn get_account(&self, address: &Pubkey) -> Option<Account> {
        self.state.borrow().accounts.get(address).cloned()
    }

    pub fn transactions(&self) -> Vec<Vec<Instruction>> {
        self.state.borrow().transactions.clone()
    }

    fn connect(&self) -> anyhow::Result<()> {
        if self.reachable {
            Ok(())
        } else {
            Err(anyhow!("error sending request for url ({MOCK_URL}): connection refused"))
        }
    }

    fn execute(&self, payer: &Pubkey, instructions: &[Instruction]) -> anyhow::Result<()> {
        // Work on a copy so a failing instruction leaves no trace.
        let mut state = self.state.borrow().clone();

        debit(&mut state.accounts, payer, MOCK_LAMPORTS_PER_SIGNATURE)
            .context("Fee payer can't pay the transaction fee")?;

        for (i, instruction) in instructions.iter().enumerate() {
            let res = match instruction.program_id {
                SYSTEM_PROGRAM_ID => execute_system(&mut state.accounts, instruction),
                COMPUTE_BUDGET_ID => Ok(()),
                _ => execute_divide(&mut state.accounts, instruction),
            };
            res.with_context(|| format!("Error processing instruction {i}"))?;
        }

        state.transactions.push(instructions.to_vec());
        *self.state.borrow_mut() = state;
        Ok(())
    }
}

fn debit(
    accounts: &mut HashMap<Pubkey, Account>,
    address: &Pubkey,
    lamports: u64,
) -> anyhow::Result<()> {
    let account = accounts
        .get_mut(address)
        .ok_or_else(|| anyhow!("account {address} not found"))?;
    account.lamports = account
        .lamports
        .checked_sub(lamports)
        .ok_or_else(|| anyhow!("insufficient lamports in {address}"))?;
    Ok(())
}

fn execute_system(
    accounts: &mut HashMap<Pubkey, Account>,
    instruction: &Instruction,
) -> anyhow::Result<()> {
    let system_instruction = bincode::deserialize::<SystemInstruction>(&instruction.data)
        .context("invalid system instruction data")?;

    let SystemInstruction::CreateAccountWithSeed {
        base,
        seed,
        lamports,
        space,
        owner,
    } = system_instruction
    else {
        bail!("unsupported system instruction");
    };

    let [funder, new_account, ..] = instruction.accounts.as_slice() else {
        bail!("not enough account keys");
    };
    let expected = create_address_with_seed(&base, &seed, &owner)?;
    if new_account.pubkey != expected {
        bail!(
            "create with seed address {} doesn't match derived {expected}",
            new_account.pubkey
        );
    }
    if accounts.contains_key(&expected) {
        bail!("account {expected} already in use");
    }

    debit(accounts, &funder.pubkey, lamports)?;
    accounts.insert(
        expected,
        Account {
            lamports,
            data: vec![0; space as usize],
            owner,
            executable: false,
            rent_epoch: 0,
        },
    );
    Ok(())
}

fn execute_divide(
    accounts: &mut HashMap<Pubkey, Account>,
    instruction: &Instruction,
) -> anyhow::Result<()> {
    let program_id = instruction.program_id;
    if !accounts.get(&program_id).is_some_and(|p| p.executable) {
        bail!("program {program_id} isn't deployed");
    }

    let meta = instruction
        .accounts
        .first()
        .ok_or_else(|| anyhow!("not enough account keys"))?;
    let app_account = accounts
        .get_mut(&meta.pubkey)
        .ok_or_else(|| anyhow!("account {} not found", meta.pubkey))?;
    if app_account.owner != program_id || !meta.is_writable {
        bail!("incorrect program id for instruction");
    }

    let data = DivideInstructionData::unpack(&instruction.data)?;
    // The program reads both operands as unsigned.
    let result = (data.numerator as u32)
        .checked_div(data.denominator as u32)
        .ok_or_else(|| anyhow!("division by zero"))?;

    if app_account.data.len() != AccountData::LEN {
        bail!("account data too small for instruction");
    }
    app_account
        .data
        .copy_from_slice(&AccountData { result }.pack());
    Ok(())
}

impl ChainRpc for MockRpc {
    fn url(&self) -> String {
        MOCK_URL.to_string()
    }

    async fn version(&self) -> anyhow::Result<String> {
        self.connect()?;
        Ok(self.version.clone())
    }

    async fn balance(&self, address: &Pubkey) -> anyhow::Result<u64> {
        self.connect()?;
        Ok(self.get_account(address).map_or(0, |a| a.lamports))
    }

    async fn account(&self, address: &Pubkey) -> anyhow::Result<Option<Account>> {
        self.connect()?;
        Ok(self.get_account(address))
    }

    async fn minimum_balance_for_rent_exemption(&self, data_len: usize) -> anyhow::Result<u64> {
        self.connect()?;
        Ok(mock_rent_exemption(data_len))
    }

    async fn lamports_per_signature(&self, _payer: &Pubkey) -> anyhow::Result<u64> {
        self.connect()?;
        Ok(MOCK_LAMPORTS_PER_SIGNATURE)
    }

    async fn send_and_confirm(
        &self,
        payer: &Keypair,
        instructions: &[Instruction],
    ) -> anyhow::Result<Signature> {
        self.connect()?;
        if self.reject_transactions {
            bail!("Transaction simulation failed: Blockhash not found");
        }

        let payer_address = payer.pubkey();
        let message = Message::new(instructions, Some(&payer_address));
        let signature = payer.sign_message(&message.serialize());

        self.execute(&payer_address, instructions)
            .context("Failed transaction submission")?;
        Ok(signature)
    }
}
