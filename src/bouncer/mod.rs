pub mod signature_bouncer;

pub use signature_bouncer::*;
