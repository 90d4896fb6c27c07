use anyhow::Context;
use solana_client::{
    client_error::{
        ClientError,
        ClientErrorKind,
    },
    nonblocking::rpc_client::RpcClient,
    rpc_response::RpcSimulateTransactionResult,
};
use solana_compute_budget_interface::ComputeBudgetInstruction;
use solana_instruction::Instruction;
use solana_sdk::{
    message::Message,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    transaction::Transaction,
};

use crate::{
    fmt_kv,
    logs::{
        log_error,
        log_info,
        log_success,
    },
    pretty::PrettyInstruction,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SendTransactionConfig {
    /// When set, a compute unit limit and a price of 1 micro-lamport are prepended.
    pub compute_budget: Option<u32>,
    pub debug_logs: Option<bool>,
}

impl Default for SendTransactionConfig {
    fn default() -> Self {
        SendTransactionConfig {
            compute_budget: Default::default(),
            debug_logs: Some(true),
        }
    }
}

/// Returns `instructions` preceded by the compute budget instructions, if any are configured.
pub fn with_compute_budget(
    instructions: &[Instruction],
    compute_budget: Option<u32>,
) -> Vec<Instruction> {
    [
        compute_budget.map_or(vec![], |budget| {
            vec![
                ComputeBudgetInstruction::set_compute_unit_limit(budget),
                ComputeBudgetInstruction::set_compute_unit_price(1),
            ]
        }),
        instructions.to_vec(),
    ]
    .concat()
}

/// Signs `instructions` with `payer` as the only signer and fee payer, sends the transaction and
/// waits for the client's commitment level.
pub async fn send_transaction_with_config(
    rpc: &RpcClient,
    payer: &Keypair,
    instructions: &[Instruction],
    config: &SendTransactionConfig,
) -> anyhow::Result<Signature> {
    let bh = rpc
        .get_latest_blockhash()
        .await
        .context("Couldn't fetch the latest blockhash")?;

    let instructions = with_compute_budget(instructions, config.compute_budget);
    let msg = Message::new(&instructions, Some(&payer.pubkey()));

    let mut tx = Transaction::new_unsigned(msg);
    tx.try_sign(&[payer], bh)
        .context("Couldn't sign the transaction")?;

    match rpc.send_and_confirm_transaction(&tx).await {
        Ok(sig) => {
            if matches!(config.debug_logs, Some(true)) {
                let tx_info = format!("{sig}\n{}", fmt_kv!("sender", payer.pubkey()));
                log_success("Signature", tx_info);
            }
            Ok(sig)
        }
        Err(error) => {
            log_instruction_error(&error, &instructions);
            log_info("Payer", payer.pubkey());

            Err(error).context("Failed transaction submission")
        }
    }
}

/// Logs which instruction failed preflight and why, along with the simulation's program logs.
pub fn log_instruction_error(error: &ClientError, instructions: &[Instruction]) {
    use solana_client::rpc_request::{
        RpcError::RpcResponseError,
        RpcResponseErrorData,
    };
    use solana_instruction_error::InstructionError;
    use solana_transaction_error::TransactionError;

    let kind = error.kind();
    let ClientErrorKind::RpcError(RpcResponseError {
        data:
            RpcResponseErrorData::SendTransactionPreflightFailure(RpcSimulateTransactionResult {
                err: Some(ui_err),
                logs,
                ..
            }),
        ..
    }) = kind
    else {
        log_error("Generic error", error);
        return;
    };

    let transaction_error: TransactionError = ui_err.clone().into();
    match transaction_error {
        TransactionError::InstructionError(ixn_idx, ixn_error) => {
            let name = instructions
                .get(ixn_idx as usize)
                .map(|instruction| PrettyInstruction(instruction).to_string())
                .unwrap_or_else(|| format!("Instruction #{ixn_idx}"));
            let reason = match ixn_error {
                InstructionError::Custom(code) => format!("custom program error {code:#x}"),
                other => other.to_string(),
            };
            log_error("Instruction error", format!("({name}, {reason})"));
        }
        other => log_error("Transaction error", other),
    }

    for line in logs.iter().flatten() {
        log_info("Program log", line);
    }
}

#[cfg(test)]
mod tests {
    use solana_sdk::pubkey::Pubkey;

    use super::*;

    #[test]
    fn compute_budget_instructions_come_first() {
        let program_id = Pubkey::new_unique();
        let instruction = Instruction::new_with_bytes(program_id, &[1, 2, 3], vec![]);

        let plain = with_compute_budget(std::slice::from_ref(&instruction), None);
        assert_eq!(plain, vec![instruction.clone()]);

        let budgeted = with_compute_budget(std::slice::from_ref(&instruction), Some(20_000));
        assert_eq!(budgeted.len(), 3);
        assert_eq!(
            budgeted[0],
            ComputeBudgetInstruction::set_compute_unit_limit(20_000)
        );
        assert_eq!(budgeted[2], instruction);
    }
}
