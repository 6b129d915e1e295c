use std::process::ExitCode;

use colabra_core::impls::{ActionsHost, ReqwestTransport};
use colabra_core::ports::PipelineHost;
use colabra_core::{ApiConfig, RunOutcome, run_action};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // stdout belongs to the runner's workflow commands; diagnostics go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let config = ApiConfig::default();
    let mut host = ActionsHost::from_env();

    let transport = match ReqwestTransport::new(&config.user_agent) {
        Ok(transport) => transport,
        Err(err) => {
            host.set_failed(&err.to_string());
            return ExitCode::FAILURE;
        }
    };

    match run_action(&mut host, &transport, &config).await {
        RunOutcome::Posted { comment_id } => {
            info!(%comment_id, "done");
            ExitCode::SUCCESS
        }
        RunOutcome::Failed { kind, .. } => {
            info!(?kind, "failed");
            ExitCode::FAILURE
        }
    }
}
