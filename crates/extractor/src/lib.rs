mod error;
mod extract;
mod progress;
mod tx_log;


pub use error::*;
pub use extract::*;
pub use tx_log::*;
