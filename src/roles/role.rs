#[allow(unused_imports)]
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use once_cell::sync::Lazy;

use crate::crypto::MessageHash;

pub const ROLE_OWNER: &'static str = "owner";
pub const ROLE_BOUNCER: &'static str = "bouncer";

static ROLE_OWNER_ID: Lazy<MessageHash> = Lazy::new(|| MessageHash::from(ROLE_OWNER));
static ROLE_BOUNCER_ID: Lazy<MessageHash> = Lazy::new(|| MessageHash::from(ROLE_BOUNCER));

/// Capabilities that can be held by an identity within a `RoleRegistry`
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May grant and revoke roles
    Owner,
    /// May sign authorizations that the registry will accept
    Bouncer,
}

impl Role {
    pub fn all() -> [Role; 2] {
        [Role::Owner, Role::Bouncer]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Role::Owner => ROLE_OWNER,
            Role::Bouncer => ROLE_BOUNCER,
        }
    }

    /// Stable identifier derived from the role name
    pub fn id(&self) -> MessageHash {
        match self {
            Role::Owner => *ROLE_OWNER_ID,
            Role::Bouncer => *ROLE_BOUNCER_ID,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Role {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_OWNER => Ok(Role::Owner),
            ROLE_BOUNCER => Ok(Role::Bouncer),
            _ => Err("valid values are 'owner' and 'bouncer'"),
        }
    }
}
