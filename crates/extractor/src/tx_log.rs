use crate::error::{FileSystemError, FsOp};
use anyhow::Context;
use chainlog_primitives::Transaction;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};


/// Append-only JSON-lines log of transactions.
///
/// Every [TxLogWriter::append] is flushed before it returns, so the file
/// always ends at a transaction boundary.
pub struct TxLogWriter {
    path: PathBuf,
    file: File,
    line: Vec<u8>,
    written: u64
}


impl TxLogWriter {
    /// Creates the log file, truncating whatever was there.
    pub async fn create(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let file = File::create(&path).await.with_context(|| FileSystemError {
            path: path.clone(),
            op: FsOp::Create
        })?;
        Ok(Self {
            path,
            file,
            line: Vec::with_capacity(1024),
            written: 0
        })
    }

    pub async fn append(&mut self, tx: &Transaction) -> anyhow::Result<()> {
        self.line.clear();
        serde_json::to_writer(&mut self.line, tx).context("failed to serialize transaction")?;
        self.line.push(b'\n');

        let res = async {
            self.file.write_all(&self.line).await?;
            self.file.flush().await
        }.await;

        res.with_context(|| FileSystemError {
            path: self.path.clone(),
            op: FsOp::Append
        })?;

        self.written += 1;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn written(&self) -> u64 {
        self.written
    }
}


/// Reads a transaction log back. Blank lines are skipped.
pub async fn read_tx_log(path: impl AsRef<Path>) -> anyhow::Result<Vec<Transaction>> {
    let path = path.as_ref();
    let fs_error = || FileSystemError {
        path: path.to_path_buf(),
        op: FsOp::Read
    };

    let file = File::open(path).await.with_context(fs_error)?;
    let mut lines = BufReader::new(file).lines();
    let mut result = Vec::new();
    let mut line_number = 0usize;

    while let Some(line) = lines.next_line().await.with_context(fs_error)? {
        line_number += 1;
        if line.trim().is_empty() {
            continue
        }
        let tx = serde_json::from_str(&line).with_context(|| {
            format!("malformed transaction at line {} of {}", line_number, path.display())
        })?;
        result.push(tx);
    }

    Ok(result)
}
