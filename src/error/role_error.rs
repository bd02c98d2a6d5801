use error_chain::error_chain;

use crate::crypto::Identity;
use crate::roles::Role;

error_chain! {
    types {
        RoleError, RoleErrorKind, ResultExt, Result;
    }
    errors {
        Unauthorized(identity: Identity, role: Role) {
            description("the caller does not hold the role required for this operation"),
            display("the caller ({}) does not hold the role required for this operation ({})", identity, role),
        }
    }
}
