#[allow(unused_imports)]
use tracing::{info, warn, debug, error, trace, instrument, span, Level};
use serde::{Serialize, Deserialize};
use sha3::Digest;
use std::convert::TryInto;
use crate::conf::MessagePrefix;
use crate::conf::ETHEREUM_SIGNED_MESSAGE_PREFIX;
use crate::utils::hex_serialize;
use crate::utils::hex_deserialize;
use crate::utils::strip_hex_prefix;

use super::*;

/// Keccak-256 digest of a message. This is the value that signatures are
/// produced over and recovered against.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[serde(transparent)]
pub struct MessageHash {
    #[serde(serialize_with = "hex_serialize", deserialize_with = "hex_deserialize")]
    pub val: [u8; 32]
}

impl MessageHash {
    pub fn from_hex_string(input: &str) -> Option<MessageHash> {
        hex::decode(strip_hex_prefix(input))
            .ok()
            .map(|a| {
                let bytes32: Option<[u8; 32]> = a.try_into().ok();
                bytes32
            })
            .flatten()
            .map(|a| {
                MessageHash {
                    val: a
                }
            })
    }

    pub fn from_bytes(input: &[u8]) -> MessageHash {
        let mut hasher = sha3::Keccak256::default();
        hasher.update(input);
        MessageHash::from_hasher(hasher)
    }

    /// Hashes the raw concatenation of both inputs (no length prefixes).
    pub fn from_bytes_twice(input1: &[u8], input2: &[u8]) -> MessageHash {
        let mut hasher = sha3::Keccak256::default();
        hasher.update(input1);
        hasher.update(input2);
        MessageHash::from_hasher(hasher)
    }

    fn from_hasher(hasher: sha3::Keccak256) -> MessageHash {
        let result = hasher.finalize();
        let mut val = [0u8; 32];
        val.copy_from_slice(&result[..]);
        MessageHash {
            val,
        }
    }

    /// Hash that binds an authorization to both the registry that checks it
    /// and the subject it was issued for.
    pub fn for_authorization(registry: &Identity, subject: &Identity) -> MessageHash {
        MessageHash::from_bytes_twice(registry.as_bytes(), subject.as_bytes())
    }

    /// Wraps this hash the way `eth_sign` does before signing.
    pub fn to_eth_signed_message_hash(&self) -> MessageHash {
        MessageHash::from_bytes_twice(ETHEREUM_SIGNED_MESSAGE_PREFIX, &self.val[..])
    }

    pub fn with_prefix(&self, prefix: MessagePrefix) -> MessageHash {
        match prefix {
            MessagePrefix::EthereumSigned => self.to_eth_signed_message_hash(),
            MessagePrefix::Raw => *self,
        }
    }

    pub fn to_hex_string(&self) -> String {
        format!("0x{}", hex::encode(self.val))
    }

    pub fn to_8hex(&self) -> String {
        let ret = hex::encode(self.val);
        format!("{}", &ret[..8])
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.val
    }
}

impl From<&'static str>
for MessageHash
{
    fn from(val: &'static str) -> MessageHash {
        MessageHash::from_bytes(val.as_bytes())
    }
}

impl std::fmt::Display for MessageHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}
