use crate::types::{BlockNumber, Quantity, Wei};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};


pub type TxHash = String;


/// Block as returned by `eth_getBlockByNumber` with hashes only.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub number: Quantity,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub transactions: Vec<TxHash>,
}


impl Block {
    #[inline]
    pub fn number(&self) -> BlockNumber {
        self.number.get()
    }
}


/// Transaction record in the shape web3 hands out.
///
/// Integer quantities are JSON numbers and wei amounts are decimal strings,
/// whatever encoding the node used. Fields not listed here are carried
/// through untouched.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub from: String,
    #[serde(default)]
    pub to: Option<String>,
    pub nonce: Quantity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<Quantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_index: Option<Quantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<Quantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Wei>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<Wei>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<Wei>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<Wei>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}


impl Transaction {
    pub fn hash(&self) -> Option<&str> {
        self.fields.get("hash").and_then(Value::as_str)
    }

    pub fn is_contract_creation(&self) -> bool {
        self.to.is_none()
    }
}
