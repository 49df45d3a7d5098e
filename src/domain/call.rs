use serde::ser::{Serialize, Serializer};

use super::codec::bytes_to_prefixed_hex;
use super::identifier::EncodedIdentifier;

/// One positional argument of a Move entry or view function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallArgument {
    Address(String),
    U64(u64),
    Bytes(Vec<u8>),
}

impl From<EncodedIdentifier> for CallArgument {
    fn from(id: EncodedIdentifier) -> Self {
        CallArgument::U64(id.value())
    }
}

// Aptos JSON encoding: u64 as a decimal string, vector<u8> as 0x-prefixed hex.
impl Serialize for CallArgument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CallArgument::Address(addr) => serializer.serialize_str(addr),
            CallArgument::U64(n) => serializer.collect_str(n),
            CallArgument::Bytes(bytes) => serializer.serialize_str(&bytes_to_prefixed_hex(bytes)),
        }
    }
}

/// Fully describes one ledger invocation. Built per operation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CallDescriptor {
    pub function: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<CallArgument>,
}

impl CallDescriptor {
    pub fn new(function: String, arguments: Vec<CallArgument>) -> Self {
        Self {
            function,
            type_arguments: Vec::new(),
            arguments,
        }
    }

    /// Request body for the node's `/view` endpoint and for wallet entry-function payloads.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "function": self.function,
            "type_arguments": self.type_arguments,
            "arguments": self.arguments,
        })
    }
}
