use anyhow::bail;
use chainlog_node_client::NodeApi;
use chainlog_primitives::{Block, BlockNumber, Quantity, Transaction};
use futures::future::BoxFuture;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio_util::sync::CancellationToken;


pub fn tx(hash: &str, from: &str, to: Option<&str>, nonce: u64) -> Transaction {
    serde_json::from_value(json!({
        "hash": hash,
        "from": from,
        "to": to,
        "nonce": Quantity(nonce),
        "value": "0x0",
        "gas": "0x6691b7",
        "gasPrice": "0x4a817c800",
        "input": "0x"
    })).unwrap()
}


/// In-memory chain. `blocks[0]` is genesis.
#[derive(Default)]
pub struct FakeNode {
    blocks: Vec<Vec<Transaction>>,
    offline: bool,
    /// number of transaction fetches that succeed before the node goes away
    fail_after: Option<usize>,
    /// cancel the token while serving the n-th transaction fetch
    cancel_at: Option<(usize, CancellationToken)>,
    /// serve the next block instead of the requested one at this height
    misnumbered: Option<BlockNumber>,
    served: Mutex<usize>,
    requested_blocks: Mutex<Vec<BlockNumber>>,
}


impl FakeNode {
    pub fn new(blocks: Vec<Vec<Transaction>>) -> Self {
        assert!(!blocks.is_empty(), "genesis block is required");
        Self {
            blocks,
            ..Self::default()
        }
    }

    pub fn offline() -> Self {
        Self {
            blocks: vec![vec![]],
            offline: true,
            ..Self::default()
        }
    }

    pub fn fail_after(mut self, n: usize) -> Self {
        self.fail_after = Some(n);
        self
    }

    pub fn cancel_at(mut self, n: usize, token: CancellationToken) -> Self {
        self.cancel_at = Some((n, token));
        self
    }

    pub fn misnumber_block(mut self, number: BlockNumber) -> Self {
        self.misnumbered = Some(number);
        self
    }

    pub fn requested_blocks(&self) -> Vec<BlockNumber> {
        self.requested_blocks.lock().unwrap().clone()
    }

    /// Transactions a complete run is expected to write, in order.
    pub fn expected(&self) -> Vec<Transaction> {
        self.blocks[1..].iter().flatten().cloned().collect()
    }

    fn hash_of(&self, number: usize, index: usize) -> String {
        self.blocks[number][index]
            .hash()
            .map(|h| h.to_string())
            .unwrap_or_else(|| format!("0x{:x}{:04x}", number, index))
    }

    fn index(&self) -> HashMap<String, Transaction> {
        let mut index = HashMap::new();
        for (number, txs) in self.blocks.iter().enumerate() {
            for (i, tx) in txs.iter().enumerate() {
                index.insert(self.hash_of(number, i), tx.clone());
            }
        }
        index
    }
}


impl NodeApi for FakeNode {
    fn current_height(&self) -> BoxFuture<'_, anyhow::Result<BlockNumber>> {
        Box::pin(async move {
            if self.offline {
                bail!("connection refused")
            }
            Ok(self.blocks.len() as BlockNumber - 1)
        })
    }

    fn block(&self, number: BlockNumber) -> BoxFuture<'_, anyhow::Result<Block>> {
        Box::pin(async move {
            self.requested_blocks.lock().unwrap().push(number);
            let idx = number as usize;
            if idx >= self.blocks.len() {
                bail!("unknown block {}", number)
            }
            let served_number = if self.misnumbered == Some(number) {
                number + 1
            } else {
                number
            };
            Ok(Block {
                number: Quantity(served_number),
                hash: Some(format!("0xb{:x}", number)),
                transactions: (0..self.blocks[idx].len())
                    .map(|i| self.hash_of(idx, i))
                    .collect()
            })
        })
    }

    fn transaction<'a>(&'a self, hash: &'a str) -> BoxFuture<'a, anyhow::Result<Transaction>> {
        Box::pin(async move {
            let n = {
                let mut served = self.served.lock().unwrap();
                *served += 1;
                *served
            };
            if let Some(limit) = self.fail_after {
                if n > limit {
                    bail!("node disconnected")
                }
            }
            if let Some((at, token)) = self.cancel_at.as_ref() {
                if n == *at {
                    token.cancel();
                }
            }
            match self.index().remove(hash) {
                Some(tx) => Ok(tx),
                None => bail!("unknown transaction {}", hash)
            }
        })
    }
}
