pub mod safe_math;

pub use primitive_types::U256;

pub use safe_math::*;
