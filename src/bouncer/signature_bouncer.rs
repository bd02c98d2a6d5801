#[allow(unused_imports)]
use tracing::{info, warn, debug, error, trace, instrument, span, Level};

use crate::conf::*;
use crate::crypto::*;
use crate::error::*;
use crate::roles::*;

/// Digest a bouncer must sign to authorize `subject` on the registry
/// known as `registry_identity`.
pub fn signing_digest(registry_identity: &Identity, subject: &Identity, prefix: MessagePrefix) -> MessageHash {
    MessageHash::for_authorization(registry_identity, subject).with_prefix(prefix)
}

/// Recovers who signed an authorization for `subject`. The digest is
/// rebuilt from the claimed subject so a signature issued for anyone else
/// recovers to an unrelated identity.
pub fn recover_signer(registry_identity: &Identity, subject: &Identity, signature: &[u8], conf: &ConfBouncer) -> Result<Identity, SignatureError> {
    let signature = BouncerSignature::from_bytes(signature, conf)?;
    let hash = signing_digest(registry_identity, subject, conf.message_prefix);
    signature.recover(&hash)
}

/// Returns true only when `signature` was produced by a bouncer of
/// `registry` over the authorization for `subject`. Any failure along the
/// way (bad length, bad encoding, failed recovery, unknown signer) is a
/// plain `false`.
pub fn check_valid_signature(registry_identity: &Identity, registry: &RoleRegistry, subject: &Identity, signature: &[u8], conf: &ConfBouncer) -> bool {
    let signer = match recover_signer(registry_identity, subject, signature, conf) {
        Ok(a) => a,
        Err(err) => {
            debug!("signature for {} rejected - {}", subject, err);
            return false;
        }
    };

    if registry.has_role(&signer, Role::Bouncer) == false {
        debug!("signature for {} rejected - signer {} is not a bouncer", subject, signer);
        return false;
    }
    trace!("signature for {} accepted from bouncer {}", subject, signer);
    true
}

/// A role registry bound to its own identity, able to verify
/// authorizations that its bouncers signed off-line.
#[derive(Debug, Clone)]
pub struct Bouncer
{
    identity: Identity,
    registry: RoleRegistry,
    conf: ConfBouncer,
}

impl Bouncer
{
    pub fn new(identity: Identity, creator: Identity) -> Bouncer {
        Bouncer::new_with_conf(identity, creator, ConfBouncer::default())
    }

    pub fn new_with_conf(identity: Identity, creator: Identity, conf: ConfBouncer) -> Bouncer {
        debug!("bouncer {} created by {} (prefix={})", identity, creator, conf.message_prefix);
        Bouncer {
            identity,
            registry: RoleRegistry::new(creator),
            conf,
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn conf(&self) -> &ConfBouncer {
        &self.conf
    }

    pub fn registry(&self) -> &RoleRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut RoleRegistry {
        &mut self.registry
    }

    pub fn has_role(&self, identity: &Identity, role: Role) -> bool {
        self.registry.has_role(identity, role)
    }

    pub fn add_bouncer(&mut self, caller: &Identity, target: Identity) -> Result<(), RoleError> {
        self.registry.add_bouncer(caller, target)
    }

    pub fn remove_bouncer(&mut self, caller: &Identity, target: &Identity) -> Result<(), RoleError> {
        self.registry.remove_bouncer(caller, target)
    }

    pub fn signing_digest(&self, subject: &Identity) -> MessageHash {
        signing_digest(&self.identity, subject, self.conf.message_prefix)
    }

    pub fn check_valid_signature(&self, subject: &Identity, signature: &[u8]) -> bool {
        check_valid_signature(&self.identity, &self.registry, subject, signature, &self.conf)
    }

    /// Same check as [`Bouncer::check_valid_signature`] for callers that
    /// want to bail out with `?`.
    pub fn require_valid_signature(&self, subject: &Identity, signature: &[u8]) -> Result<(), SignatureError> {
        if self.check_valid_signature(subject, signature) == false {
            return Err(SignatureErrorKind::InvalidSignature(*subject).into());
        }
        Ok(())
    }
}
