use chainlog_primitives::{Block, BlockNumber, Transaction};
use futures::future::BoxFuture;


/// Read side of an Ethereum node.
pub trait NodeApi: Sync {
    fn current_height(&self) -> BoxFuture<'_, anyhow::Result<BlockNumber>>;

    /// Block at the given height, with transaction hashes in inclusion order.
    fn block(&self, number: BlockNumber) -> BoxFuture<'_, anyhow::Result<Block>>;

    fn transaction<'a>(&'a self, hash: &'a str) -> BoxFuture<'a, anyhow::Result<Transaction>>;
}


impl<T: NodeApi + ?Sized> NodeApi for &T {
    fn current_height(&self) -> BoxFuture<'_, anyhow::Result<BlockNumber>> {
        (**self).current_height()
    }

    fn block(&self, number: BlockNumber) -> BoxFuture<'_, anyhow::Result<Block>> {
        (**self).block(number)
    }

    fn transaction<'a>(&'a self, hash: &'a str) -> BoxFuture<'a, anyhow::Result<Transaction>> {
        (**self).transaction(hash)
    }
}
