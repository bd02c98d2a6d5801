#![cfg_attr(not(debug_assertions), allow(dead_code, unused_imports, unused_variables))]
#![warn(unused_extern_crates)]

//! Checked 256-bit arithmetic and signature gated role authorization.
//!
//! The [`math`] module rejects additions, subtractions, multiplications,
//! divisions and shifts whose results do not fit in a `U256` instead of
//! wrapping.
//!
//! The [`bouncer`] module pairs a [`roles::RoleRegistry`] with off-line
//! authorizations: an owner appoints bouncers, a bouncer signs
//! `keccak256(registry || subject)` with its secp256k1 key, and the
//! registry later confirms that the signature came from one of its
//! bouncers for that exact subject.

pub mod utils;
pub mod error;
pub mod conf;
pub mod math;
pub mod crypto;
pub mod roles;
pub mod bouncer;
pub mod prelude;
