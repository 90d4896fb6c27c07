use crate::{
    error::{
        QuotientError,
        QuotientResult,
    },
    fmt_kv,
    logs::log_success,
    rpc::ChainRpc,
};

/// A cluster that answered a version request.
pub struct Connection<R> {
    pub rpc: R,
    pub version: String,
}

pub async fn establish_connection<R: ChainRpc>(rpc: R) -> QuotientResult<Connection<R>> {
    let url = rpc.url();
    let version = rpc
        .version()
        .await
        .map_err(|e| QuotientError::rpc(&url, e))?;
    if version.trim().is_empty() {
        return Err(QuotientError::Connectivity {
            url,
            reason: "the node returned no version info".to_string(),
        });
    }

    log_success(
        "Connection to cluster established",
        format!("{url} {}", fmt_kv!("version", &version)),
    );

    Ok(Connection { rpc, version })
}
