use crate::error::{ConnectionError, FetchError, Interrupted};
use crate::progress::Progress;
use crate::tx_log::TxLogWriter;
use anyhow::{anyhow, Context};
use chainlog_node_client::NodeApi;
use chainlog_primitives::BlockNumber;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};


pub const LOG_FILE_NAME: &str = "transactions.json";


#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct ExtractStats {
    /// Chain head observed at the start of the run
    pub head: BlockNumber,
    pub blocks: u64,
    pub transactions: u64,
}


/// Writes every transaction of blocks `1..=head` to `output`, one JSON document per line.
///
/// Any previous file at `output` is removed first. The chain head is read once,
/// blocks produced while the run is in progress are not included.
/// Lines appended before a failure stay in the file.
pub async fn extract<N: NodeApi>(
    node: &N,
    output: &Path,
    cancel: &CancellationToken
) -> anyhow::Result<ExtractStats>
{
    remove_stale_log(output).await;

    let head = node.current_height().await.context(ConnectionError)?;

    info!("creating file {}", output.display());
    info!("total number of blocks: {}", head);

    let mut log = TxLogWriter::create(output).await?;
    let mut progress = Progress::new(10, Duration::from_secs(1), Duration::from_secs(5));
    let mut stats = ExtractStats {
        head,
        ..ExtractStats::default()
    };

    // block 0 is genesis and carries no transactions
    for number in 1..=head {
        check_cancelled(cancel, || FetchError::block(number))?;

        let block = node.block(number).await.with_context(|| FetchError::block(number))?;

        if block.number() != number {
            return Err(
                anyhow!("node returned block {} instead", block.number())
                    .context(FetchError::block(number))
            )
        }

        debug!(
            block = number,
            hash = block.hash.as_deref().unwrap_or("None"),
            transactions = block.transactions.len(),
            "fetched block"
        );

        for hash in block.transactions.iter() {
            check_cancelled(cancel, || FetchError::transaction(number, hash))?;

            let tx = node.transaction(hash)
                .await
                .with_context(|| FetchError::transaction(number, hash))?;

            info!(
                "from: {} to: {} nonce: {}",
                tx.from,
                tx.to.as_deref().unwrap_or("null"),
                tx.nonce
            );

            log.append(&tx).await?;
        }

        stats.blocks += 1;
        stats.transactions = log.written();

        progress.set_current_value(number);
        if progress.should_report() {
            info!(
                "last block: {}, progress: {} blocks/sec",
                number,
                progress.speed().round()
            );
        }
    }

    info!(
        blocks = stats.blocks,
        transactions = stats.transactions,
        "wrote {}",
        log.path().display()
    );

    Ok(stats)
}


async fn remove_stale_log(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => info!("{} was deleted", path.display()),
        Err(err) if err.kind() == ErrorKind::NotFound => {},
        Err(err) => warn!(error =? err, "failed to delete {}", path.display())
    }
}


fn check_cancelled(
    cancel: &CancellationToken,
    context: impl FnOnce() -> FetchError
) -> anyhow::Result<()>
{
    if cancel.is_cancelled() {
        Err(anyhow::Error::new(Interrupted).context(context()))
    } else {
        Ok(())
    }
}
