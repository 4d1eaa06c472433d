use chainlog_primitives::BlockNumber;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;


/// The node could not answer the initial chain height query.
#[derive(Debug)]
pub struct ConnectionError;


impl Display for ConnectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to query current chain height")
    }
}


impl std::error::Error for ConnectionError {}


#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FetchTarget {
    Block(BlockNumber),
    Transaction {
        block: BlockNumber,
        hash: String
    }
}


/// A block or transaction query failed in the middle of a run.
#[derive(Debug)]
pub struct FetchError {
    pub target: FetchTarget
}


impl FetchError {
    pub fn block(number: BlockNumber) -> Self {
        Self {
            target: FetchTarget::Block(number)
        }
    }

    pub fn transaction(block: BlockNumber, hash: &str) -> Self {
        Self {
            target: FetchTarget::Transaction {
                block,
                hash: hash.to_string()
            }
        }
    }
}


impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.target {
            FetchTarget::Block(number) => write!(f, "failed to fetch block {}", number),
            FetchTarget::Transaction { block, hash } => {
                write!(f, "failed to fetch transaction {} of block {}", hash, block)
            }
        }
    }
}


impl std::error::Error for FetchError {}


#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FsOp {
    Create,
    Append,
    Read
}


/// The transaction log could not be written.
#[derive(Debug)]
pub struct FileSystemError {
    pub path: PathBuf,
    pub op: FsOp
}


impl Display for FileSystemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let op = match self.op {
            FsOp::Create => "create",
            FsOp::Append => "append to",
            FsOp::Read => "read"
        };
        write!(f, "failed to {} {}", op, self.path.display())
    }
}


impl std::error::Error for FileSystemError {}


/// Cause of a [FetchError] when the run was stopped from outside.
#[derive(Debug)]
pub struct Interrupted;


impl Display for Interrupted {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "extraction was interrupted")
    }
}


impl std::error::Error for Interrupted {}
