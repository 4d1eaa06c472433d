use crate::error::{NotFound, RpcError};
use crate::NodeApi;
use anyhow::{anyhow, Context};
use chainlog_primitives::{Block, BlockNumber, Quantity, Transaction};
use futures::future::BoxFuture;
use reqwest::{Client, IntoUrl, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::fmt::{Debug, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, instrument};


pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);


pub fn default_http_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .read_timeout(timeout)
        .connect_timeout(timeout)
        .gzip(true)
        .build()
}


#[derive(Deserialize)]
struct RpcResponse<R> {
    result: Option<R>,
    error: Option<RpcError>
}


/// JSON-RPC 2.0 client of an Ethereum node.
pub struct RpcClient {
    http: Client,
    url: Url,
    next_id: AtomicU64
}


impl Debug for RpcClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient")
            .field("url", &self.url.as_str())
            .finish()
    }
}


impl RpcClient {
    pub fn from_url(url: impl IntoUrl) -> anyhow::Result<Self> {
        let http = default_http_client(DEFAULT_TIMEOUT)?;
        Self::new(http, url)
    }

    pub fn new(http: Client, url: impl IntoUrl) -> anyhow::Result<Self> {
        Ok(Self {
            http,
            url: url.into_url().context("invalid node url")?,
            next_id: AtomicU64::new(1)
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub async fn block_number(&self) -> anyhow::Result<BlockNumber> {
        let height: Option<Quantity> = self.call("eth_blockNumber", json!([])).await?;
        height
            .map(Quantity::get)
            .ok_or_else(|| anyhow!("eth_blockNumber returned null"))
    }

    pub async fn get_block(&self, number: BlockNumber) -> anyhow::Result<Block> {
        let params = json!([Quantity(number).to_hex(), false]);
        let block: Option<Block> = self.call("eth_getBlockByNumber", params).await?;
        block.ok_or_else(|| NotFound { what: format!("block {}", number) }.into())
    }

    pub async fn get_transaction(&self, hash: &str) -> anyhow::Result<Transaction> {
        let tx: Option<Transaction> = self.call("eth_getTransactionByHash", json!([hash])).await?;
        tx.ok_or_else(|| NotFound { what: format!("transaction {}", hash) }.into())
    }

    #[instrument(level = "debug", skip_all, err(Debug), fields(
        url = %self.url.as_str(),
        method = method
    ))]
    async fn call<R: DeserializeOwned>(
        &self,
        method: &'static str,
        params: Value
    ) -> anyhow::Result<Option<R>>
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params
        });

        debug!(id, "send request");

        let res = self.http
            .post(self.url.clone())
            .json(&body)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(response_error(res).await)
        }

        let res: RpcResponse<R> = res.json().await.with_context(|| {
            format!("failed to decode {} response", method)
        })?;

        if let Some(err) = res.error {
            return Err(err.into())
        }

        Ok(res.result)
    }
}


async fn response_error(response: Response) -> anyhow::Error {
    let status = response.status().as_u16();
    if let Some(text) = response.text().await.ok() {
        anyhow!("got HTTP {}: {}", status, text)
    } else {
        anyhow!("got HTTP {}", status)
    }
}


impl NodeApi for RpcClient {
    fn current_height(&self) -> BoxFuture<'_, anyhow::Result<BlockNumber>> {
        Box::pin(self.block_number())
    }

    fn block(&self, number: BlockNumber) -> BoxFuture<'_, anyhow::Result<Block>> {
        Box::pin(self.get_block(number))
    }

    fn transaction<'a>(&'a self, hash: &'a str) -> BoxFuture<'a, anyhow::Result<Transaction>> {
        Box::pin(self.get_transaction(hash))
    }
}
