pub use crate::error::GuardError;
pub use crate::error::MathError;
pub use crate::error::MathErrorKind;
pub use crate::error::RoleError;
pub use crate::error::RoleErrorKind;
pub use crate::error::SignatureError;
pub use crate::error::SignatureErrorKind;

pub use crate::conf::ConfBouncer;
pub use crate::conf::MessagePrefix;

pub use crate::math::U256;
pub use crate::math::add;
pub use crate::math::subtract;
pub use crate::math::multiply;
pub use crate::math::divide;
pub use crate::math::shift_left;

pub use crate::crypto::Identity;
pub use crate::crypto::MessageHash;
pub use crate::crypto::BouncerSignature;
pub use crate::crypto::BouncerSigningKey;

pub use crate::roles::Role;
pub use crate::roles::RoleRegistry;

pub use crate::bouncer::Bouncer;
pub use crate::bouncer::check_valid_signature;

pub use crate::utils::log_init;
