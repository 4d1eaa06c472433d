use clap::{value_parser, Parser};
use chainlog_extractor::LOG_FILE_NAME;
use std::path::PathBuf;
use url::Url;


#[derive(Parser, Debug)]
#[command(version, about = "Dumps every transaction of a chain into a JSON-lines file", long_about = None)]
pub struct Cli {
    /// JSON-RPC endpoint of the node to read from
    #[arg(long, value_name = "URL", env = "CHAINLOG_RPC_URL", default_value = "http://127.0.0.1:8545")]
    pub rpc_url: Url,

    /// Output file, relative paths are resolved against the working directory
    #[arg(short, long, value_name = "FILE", default_value = LOG_FILE_NAME)]
    pub output: PathBuf,

    /// Connect and read timeout of node requests in seconds
    #[arg(long, value_name = "SECS", value_parser = value_parser!(u64).range(1..), default_value_t = 20)]
    pub timeout: u64,

    /// Whether the logs should be structured in JSON format
    #[arg(long)]
    pub json_log: bool,
}
