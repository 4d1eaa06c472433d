mod types;
mod evm;


pub use evm::*;
pub use types::*;
