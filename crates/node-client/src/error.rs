use std::fmt::{Display, Formatter};


/// Error object of a JSON-RPC response.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct RpcError {
    pub code: i64,
    pub message: String
}


impl Display for RpcError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "rpc error {}: {}", self.code, self.message)
    }
}


impl std::error::Error for RpcError {}


/// Node answered with `null` for a block or transaction.
#[derive(Debug)]
pub struct NotFound {
    pub what: String
}


impl Display for NotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} not found", self.what)
    }
}


impl std::error::Error for NotFound {}
