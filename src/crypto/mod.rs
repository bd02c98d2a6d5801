pub mod hash;
pub mod identity;
pub mod sign_key;
pub mod signature;
pub mod tests;

pub use self::hash::*;
pub use identity::*;
pub use sign_key::*;
pub use signature::*;
