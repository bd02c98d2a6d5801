#[allow(unused_imports)]
use tracing::{info, warn, debug, error, trace, instrument, span, Level};
use std::collections::BTreeSet;
use fxhash::FxHashMap;
#[allow(unused_imports)]
use serde::{Serialize, Deserialize, de::DeserializeOwned};

use crate::crypto::Identity;
use crate::error::*;

use super::*;

/// Registry of which identities hold which roles.
///
/// The identity that creates the registry becomes its first owner. From
/// then on only owners may change role membership, which includes handing
/// out the bouncer role to the identities whose signatures should be
/// trusted.
///
/// Mutations take `&mut self` and lookups take `&self` so a registry can
/// be read from many threads at once but only changed by one.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleRegistry
{
    roles: FxHashMap<Identity, BTreeSet<Role>>,
}

impl RoleRegistry
{
    pub fn new(creator: Identity) -> RoleRegistry {
        let mut ret = RoleRegistry::default();
        ret.add_role(creator, Role::Owner);
        ret
    }

    pub fn has_role(&self, identity: &Identity, role: Role) -> bool {
        self.roles
            .get(identity)
            .map(|r| r.contains(&role))
            .unwrap_or(false)
    }

    /// Fails unless `identity` holds `role`
    pub fn check_role(&self, identity: &Identity, role: Role) -> Result<(), RoleError> {
        if self.has_role(identity, role) == false {
            return Err(RoleErrorKind::Unauthorized(*identity, role).into());
        }
        Ok(())
    }

    pub fn add_bouncer(&mut self, caller: &Identity, target: Identity) -> Result<(), RoleError> {
        self.grant_role(caller, target, Role::Bouncer)
    }

    pub fn remove_bouncer(&mut self, caller: &Identity, target: &Identity) -> Result<(), RoleError> {
        self.revoke_role(caller, target, Role::Bouncer)
    }

    pub fn add_owner(&mut self, caller: &Identity, target: Identity) -> Result<(), RoleError> {
        self.grant_role(caller, target, Role::Owner)
    }

    /// Grants `role` to `target`. Granting a role that is already held
    /// succeeds without changing anything.
    pub fn grant_role(&mut self, caller: &Identity, target: Identity, role: Role) -> Result<(), RoleError> {
        self.authorize(caller, role)?;
        self.add_role(target, role);
        Ok(())
    }

    /// Revokes `role` from `target`. Revoking a role that is not held
    /// succeeds without changing anything. An owner may revoke its own
    /// ownership, including the last one.
    pub fn revoke_role(&mut self, caller: &Identity, target: &Identity, role: Role) -> Result<(), RoleError> {
        self.authorize(caller, role)?;
        self.remove_role(target, role);
        Ok(())
    }

    /// Identities currently holding `role`, in no particular order
    pub fn holders<'a>(&'a self, role: Role) -> impl Iterator<Item = &'a Identity> {
        self.roles
            .iter()
            .filter(move |(_, r)| r.contains(&role))
            .map(|(identity, _)| identity)
    }

    pub fn roles_of<'a>(&'a self, identity: &Identity) -> impl Iterator<Item = Role> + 'a {
        self.roles
            .get(identity)
            .into_iter()
            .flat_map(|r| r.iter().copied())
    }

    fn authorize(&self, caller: &Identity, role: Role) -> Result<(), RoleError> {
        if let Err(err) = self.check_role(caller, Role::Owner) {
            warn!("rejected change to role ({}) by {} - {}", role, caller, err);
            return Err(err);
        }
        Ok(())
    }

    fn add_role(&mut self, target: Identity, role: Role) {
        if self.roles.entry(target).or_default().insert(role) {
            info!("role added: {} -> {}", role, target);
        } else {
            debug!("role already held: {} -> {}", role, target);
        }
    }

    fn remove_role(&mut self, target: &Identity, role: Role) {
        let removed = match self.roles.get_mut(target) {
            Some(r) => {
                let ret = r.remove(&role);
                if r.is_empty() {
                    self.roles.remove(target);
                }
                ret
            },
            None => false,
        };
        if removed {
            info!("role removed: {} -> {}", role, target);
        }
    }
}
