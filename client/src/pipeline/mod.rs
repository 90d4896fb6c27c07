//! The client's five steps, run strictly in order. Each step consumes what the previous one
//! produced; the first failure halts the pipeline.

pub mod connection;
pub mod payer;
pub mod program;
pub mod result;
pub mod submit;

use quotient_interface::state::AccountData;
use solana_sdk::{
    pubkey::Pubkey,
    signature::Signature,
};

pub use self::{
    connection::*,
    payer::*,
    program::*,
    result::*,
    submit::*,
};
use crate::{
    config::Settings,
    context::AppContext,
    error::QuotientResult,
    logs::{
        log_info,
        log_warning,
    },
    rpc::ChainRpc,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, strum_macros::Display)]
pub enum PipelineStage {
    Disconnected,
    Connected,
    PayerReady,
    ProgramLocated,
    AccountReady,
    Submitted,
    Read,
}

#[derive(Debug)]
pub struct PipelineReport {
    pub stage: PipelineStage,
    pub program_id: Pubkey,
    pub app_account: AppAccount,
    pub signature: Signature,
    pub data: AccountData,
}

/// Connects through `rpc` and runs every step with the operands in `settings`.
pub async fn run_pipeline<R: ChainRpc>(
    rpc: R,
    settings: &Settings,
) -> QuotientResult<PipelineReport> {
    let mut stage = PipelineStage::Disconnected;
    let res = run_stages(rpc, settings, &mut stage).await;
    if res.is_err() {
        log_warning("Pipeline halted after", stage);
    }
    res
}

async fn run_stages<R: ChainRpc>(
    rpc: R,
    settings: &Settings,
    stage: &mut PipelineStage,
) -> QuotientResult<PipelineReport> {
    let connection = establish_connection(rpc).await?;
    advance(stage, PipelineStage::Connected);

    let payer = load_payer(settings.payer_keypair_path.as_deref())?;
    check_payer_funds(&connection.rpc, &payer, settings.fee_signatures).await?;
    advance(stage, PipelineStage::PayerReady);

    let program_id = read_program_id(&settings.program_keypair_path, &settings.program_so_path)?;
    check_program_deployed(&connection.rpc, &program_id, &settings.program_so_path).await?;
    advance(stage, PipelineStage::ProgramLocated);

    let app_account = ensure_app_account(&connection.rpc, &payer, &program_id).await?;
    advance(stage, PipelineStage::AccountReady);

    let ctx = AppContext {
        rpc: &connection.rpc,
        payer: &payer,
        program_id,
        app_account: app_account.address,
    };

    let signature = run_program(&ctx, settings.numerator, settings.denominator).await?;
    advance(stage, PipelineStage::Submitted);

    let data = check_result(&ctx).await?;
    advance(stage, PipelineStage::Read);

    Ok(PipelineReport {
        stage: *stage,
        program_id,
        app_account,
        signature,
        data,
    })
}

fn advance(stage: &mut PipelineStage, next: PipelineStage) {
    debug_assert!(next > *stage, "pipeline stages only move forward");
    *stage = next;
    log_info("Stage", next);
}
