use quotient_interface::instructions::divide;
use solana_sdk::signature::Signature;

use crate::{
    context::AppContext,
    error::{
        QuotientError,
        QuotientResult,
    },
    fmt_kv,
    logs::log_info,
    rpc::ChainRpc,
};

/// Submits the program's divide instruction against the app account and waits for confirmation.
/// The operands are sent as-is; the program is responsible for rejecting a zero denominator.
pub async fn run_program<R: ChainRpc>(
    ctx: &AppContext<'_, R>,
    numerator: i32,
    denominator: i32,
) -> QuotientResult<Signature> {
    log_info(
        "Running program",
        format!(
            "{} {}",
            fmt_kv!("app account", ctx.app_account),
            fmt_kv!("program id", ctx.program_id)
        ),
    );

    let instruction = divide(&ctx.program_id, &ctx.app_account, numerator, denominator);
    ctx.rpc
        .send_and_confirm(ctx.payer, &[instruction])
        .await
        .map_err(|e| QuotientError::submission("run the program", e))
}
