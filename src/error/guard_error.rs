use error_chain::error_chain;

error_chain! {
    types {
        GuardError, GuardErrorKind, ResultExt, Result;
    }
    links {
        IdentityError(super::IdentityError, super::IdentityErrorKind);
        MathError(super::MathError, super::MathErrorKind);
        RoleError(super::RoleError, super::RoleErrorKind);
        SignatureError(super::SignatureError, super::SignatureErrorKind);
    }
    foreign_links {
        SerdeJson(::serde_json::Error);
    }
}
