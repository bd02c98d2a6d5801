#[allow(unused_imports)]
use tracing::{info, warn, debug, error, trace, instrument, span, Level};
use serde::{Serialize, Deserialize};
use std::convert::TryInto;
use k256::ecdsa::VerifyingKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use crate::error::*;
use crate::utils::hex_serialize;
use crate::utils::hex_deserialize;
use crate::utils::strip_hex_prefix;

use super::*;

pub const IDENTITY_LEN: usize = 20;

/// Principal that can hold roles, sign authorizations or be the subject
/// of one. Identities are the last 20 bytes of the keccak-256 hash of an
/// uncompressed secp256k1 public key (an Ethereum address) but the
/// registry treats them as opaque bytes compared for exact equality.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[serde(transparent)]
pub struct Identity {
    #[serde(serialize_with = "hex_serialize", deserialize_with = "hex_deserialize")]
    pub val: [u8; IDENTITY_LEN]
}

impl Identity {
    pub fn new(val: [u8; IDENTITY_LEN]) -> Identity {
        Identity {
            val
        }
    }

    /// Random identity, handy for principals that never sign anything
    pub fn generate() -> Identity {
        Identity {
            val: rand::random()
        }
    }

    pub fn from_slice(input: &[u8]) -> Result<Identity, IdentityError> {
        let val: [u8; IDENTITY_LEN] = input
            .try_into()
            .map_err(|_| IdentityErrorKind::InvalidLength(input.len()))?;
        Ok(Identity {
            val
        })
    }

    pub fn from_hex_string(input: &str) -> Result<Identity, IdentityError> {
        let bytes = hex::decode(strip_hex_prefix(input))
            .map_err(|err| IdentityErrorKind::InvalidHex(err.to_string()))?;
        Identity::from_slice(&bytes[..])
    }

    pub fn from_public_key(key: &VerifyingKey) -> Identity {
        let point = key.as_affine().to_encoded_point(false);
        let hash = MessageHash::from_bytes(&point.as_bytes()[1..]);
        let mut val = [0u8; IDENTITY_LEN];
        val.copy_from_slice(&hash.val[32 - IDENTITY_LEN..]);
        Identity {
            val
        }
    }

    pub fn to_hex_string(&self) -> String {
        format!("0x{}", hex::encode(self.val))
    }

    pub fn as_bytes(&self) -> &[u8; IDENTITY_LEN] {
        &self.val
    }
}

impl From<[u8; IDENTITY_LEN]>
for Identity
{
    fn from(val: [u8; IDENTITY_LEN]) -> Identity {
        Identity::new(val)
    }
}

impl std::str::FromStr
for Identity
{
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Identity::from_hex_string(s)
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}
