use std::process::ExitCode;

use clap::Parser;
use quotient_client::{
    config::{
        CliArgs,
        Settings,
    },
    logs::{
        log_divider,
        log_error,
        log_info,
    },
    pipeline::run_pipeline,
    rpc::ClusterRpc,
};

#[tokio::main]
async fn main() -> ExitCode {
    let settings = Settings::from_args(CliArgs::parse());

    log_info("Start", "quotient client");
    let rpc = ClusterRpc::new(
        settings.rpc_url.clone(),
        settings.transaction_config.clone(),
    );

    match run_pipeline(rpc, &settings).await {
        Ok(_) => {
            log_divider();
            ExitCode::SUCCESS
        }
        Err(error) => {
            log_error(error.kind(), &error);
            // -1 as an unsigned exit status.
            ExitCode::from(255)
        }
    }
}
