#![allow(unused_imports)]
use tracing::{error, info, debug};

mod b16;
mod log;
mod test;

pub use super::utils::test::*;
pub use log::log_init;
pub use b16::hex_serialize;
pub use b16::hex_deserialize;
pub use b16::strip_hex_prefix;
