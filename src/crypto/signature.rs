#[allow(unused_imports)]
use tracing::{info, warn, debug, error, trace, instrument, span, Level};
use error_chain::bail;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use crate::conf::ConfBouncer;
use crate::error::*;

use super::*;

/// Length of a recoverable signature in its `r || s || v` wire form
pub const SIGNATURE_LEN: usize = 65;

/// Offset added to the recovery parity in the trailing `v` byte
pub const RECOVERY_ID_OFFSET: u8 = 27;

/// Recoverable secp256k1 signature as produced by Ethereum tooling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BouncerSignature
{
    signature: Signature,
    recovery_id: RecoveryId,
}

impl BouncerSignature
{
    pub(crate) fn new(signature: Signature, recovery_id: RecoveryId) -> BouncerSignature {
        BouncerSignature {
            signature,
            recovery_id,
        }
    }

    /// Parses the 65 byte `r || s || v` form. The recovery byte may be
    /// `27`/`28` or, when the configuration allows, `0`/`1`.
    pub fn from_bytes(data: &[u8], conf: &ConfBouncer) -> Result<BouncerSignature, SignatureError> {
        if data.len() != SIGNATURE_LEN {
            bail!(SignatureErrorKind::InvalidLength(data.len()));
        }

        let v = data[SIGNATURE_LEN - 1];
        let is_y_odd = match v {
            27 | 28 => v == 28,
            0 | 1 if conf.accept_raw_recovery_id => v == 1,
            _ => return Err(SignatureErrorKind::InvalidRecoveryId(v).into()),
        };

        let signature = Signature::from_slice(&data[..SIGNATURE_LEN - 1])
            .map_err(|err| SignatureErrorKind::MalformedSignature(err.to_string()))?;

        // A high s value has a low s twin that recovers to the same key once
        // the y parity is flipped.
        let ret = match signature.normalize_s() {
            Some(normalized) if conf.normalize_high_s => {
                trace!("normalized a high s signature");
                BouncerSignature::new(normalized, RecoveryId::new(!is_y_odd, false))
            },
            Some(_) => return Err(SignatureErrorKind::MalformedSignature("signature has a high s value".to_string()).into()),
            None => BouncerSignature::new(signature, RecoveryId::new(is_y_odd, false)),
        };
        Ok(ret)
    }

    /// Recovers the identity of whoever produced this signature over `hash`.
    pub fn recover(&self, hash: &MessageHash) -> Result<Identity, SignatureError> {
        let key = VerifyingKey::recover_from_prehash(&hash.val[..], &self.signature, self.recovery_id)
            .map_err(|err| SignatureErrorKind::RecoveryFailed(err.to_string()))?;
        Ok(Identity::from_public_key(&key))
    }

    pub fn is_y_odd(&self) -> bool {
        self.recovery_id.is_y_odd()
    }

    /// Encodes the signature as `r || s || v` with `v` in `27`/`28`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut ret = Vec::with_capacity(SIGNATURE_LEN);
        ret.extend_from_slice(&self.signature.to_bytes()[..]);
        ret.push(RECOVERY_ID_OFFSET + self.recovery_id.is_y_odd() as u8);
        ret
    }

    pub fn to_hex_string(&self) -> String {
        format!("0x{}", hex::encode(self.to_bytes()))
    }
}

impl std::fmt::Display
for BouncerSignature
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}
