mod api;
mod error;
mod rpc;


pub use api::*;
pub use error::*;
pub use rpc::*;
