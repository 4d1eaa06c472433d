use crate::cli::Cli;
use anyhow::Context;
use chainlog_extractor::extract;
use chainlog_node_client::{default_http_client, RpcClient};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};


pub async fn run(args: &Cli) -> anyhow::Result<()> {
    let output = std::env::current_dir()
        .context("failed to resolve working directory")?
        .join(&args.output);

    let http = default_http_client(Duration::from_secs(args.timeout))?;
    let node = RpcClient::new(http, args.rpc_url.clone())?;
    info!("reading chain from {}", node.url());

    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            shutdown_signal().await;
            warn!("stop requested, finishing current transaction");
            cancel.cancel();
        }
    });

    let stats = extract(&node, &output, &cancel).await?;

    info!(
        "done: {} transactions from {} blocks",
        stats.transactions,
        stats.blocks
    );
    Ok(())
}


async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error =? err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(err) => {
                warn!(error =? err, "failed to install signal handler");
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
