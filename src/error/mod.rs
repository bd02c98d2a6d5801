pub mod guard_error;
pub mod identity_error;
pub mod math_error;
pub mod role_error;
pub mod signature_error;

pub use guard_error::GuardError;
pub use guard_error::GuardErrorKind;
pub use identity_error::IdentityError;
pub use identity_error::IdentityErrorKind;
pub use math_error::MathError;
pub use math_error::MathErrorKind;
pub use role_error::RoleError;
pub use role_error::RoleErrorKind;
pub use signature_error::SignatureError;
pub use signature_error::SignatureErrorKind;
