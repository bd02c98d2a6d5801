#[allow(unused_imports)]
use tracing::{info, warn, debug, error, trace, instrument, span, Level};
use error_chain::bail;
use k256::ecdsa::SigningKey;
use rand::rngs::OsRng;
use crate::conf::MessagePrefix;
use crate::error::*;

use super::*;

/// Private key held by a bouncer. Signing an authorization with it lets a
/// subject prove to a registry that a bouncer approved them, without the
/// bouncer ever touching the registry itself.
#[derive(Clone)]
pub struct BouncerSigningKey
{
    key: SigningKey,
}

impl BouncerSigningKey
{
    pub fn generate() -> BouncerSigningKey {
        BouncerSigningKey {
            key: SigningKey::random(&mut OsRng),
        }
    }

    pub fn from_bytes(data: &[u8]) -> Result<BouncerSigningKey, SignatureError> {
        let key = SigningKey::from_slice(data)
            .map_err(|err| SignatureErrorKind::MalformedSignature(format!("invalid secret key ({})", err)))?;
        Ok(BouncerSigningKey {
            key,
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.key.to_bytes().to_vec()
    }

    /// Identity that signatures from this key recover to
    pub fn identity(&self) -> Identity {
        Identity::from_public_key(self.key.verifying_key())
    }

    /// Signs a digest as-is, no prefix is applied.
    pub fn sign_hash(&self, hash: &MessageHash) -> Result<BouncerSignature, SignatureError> {
        let (signature, recovery_id) = self.key
            .sign_prehash_recoverable(&hash.val[..])
            .map_err(|err| SignatureErrorKind::SigningFailed(err.to_string()))?;
        if recovery_id.is_x_reduced() {
            bail!(SignatureErrorKind::SigningFailed("recovery id can not be expressed in a single parity byte".to_string()));
        }
        Ok(BouncerSignature::new(signature, recovery_id))
    }

    /// Produces the signature a registry expects when authorizing `subject`.
    pub fn sign_authorization(&self, registry: &Identity, subject: &Identity, prefix: MessagePrefix) -> Result<BouncerSignature, SignatureError> {
        let hash = MessageHash::for_authorization(registry, subject).with_prefix(prefix);
        trace!("signing authorization for {} on {} (digest={})", subject, registry, hash.to_8hex());
        self.sign_hash(&hash)
    }
}

impl std::fmt::Debug
for BouncerSigningKey
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BouncerSigningKey({})", self.identity())
    }
}

impl std::fmt::Display
for BouncerSigningKey
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "secp256k1:{}+sk", self.identity())
    }
}
