pub mod conf_bouncer;
pub mod message_prefix;

pub use conf_bouncer::*;
pub use message_prefix::*;
