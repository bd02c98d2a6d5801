pub mod role;
pub mod role_registry;

pub use role::*;
pub use role_registry::*;
