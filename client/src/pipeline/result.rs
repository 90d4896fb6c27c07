use quotient_interface::state::AccountData;

use crate::{
    context::AppContext,
    error::{
        QuotientError,
        QuotientResult,
    },
    logs::log_success,
    rpc::ChainRpc,
};

/// Reads and decodes the app account as it is on-chain right now.
pub async fn check_result<R: ChainRpc>(ctx: &AppContext<'_, R>) -> QuotientResult<AccountData> {
    let address = ctx.app_account;
    let account = ctx
        .rpc
        .account(&address)
        .await
        .map_err(|e| QuotientError::rpc(ctx.rpc.url(), e))?
        .ok_or(QuotientError::AccountNotFound { address })?;

    let data = AccountData::decode(&account.data).map_err(|_| QuotientError::Decode {
        address,
        expected: AccountData::LEN,
        actual: account.data.len(),
    })?;

    log_success(address, format!("result = {}", data.result));

    Ok(data)
}
