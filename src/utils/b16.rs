#![allow(unused_imports)]
use tracing::{info, warn, debug, error, trace, instrument, span, Level};
use serde::{Serialize, Deserialize};
use serde::{Serializer, de::Deserializer};
use std::convert::TryInto;

/// Removes an optional `0x` or `0X` prefix from a hex string.
pub fn strip_hex_prefix(input: &str) -> &str {
    let input = input.trim();
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

pub fn hex_serialize<S, const N: usize>(data: &[u8; N], serializer: S) -> Result<S::Ok, S::Error>
where S: Serializer
{
    if serializer.is_human_readable() {
        serializer.serialize_str(&format!("0x{}", hex::encode(&data[..])))
    } else {
        data.to_vec().serialize(serializer)
    }
}

pub fn hex_deserialize<'a, D, const N: usize>(deserializer: D) -> Result<[u8; N], D::Error>
where D: Deserializer<'a>
{
    use serde::de::Error;
    let ret = if deserializer.is_human_readable() {
        let string = String::deserialize(deserializer)?;
        hex::decode(strip_hex_prefix(&string))
            .map_err(|err| Error::custom(err.to_string()))?
    } else {
        <Vec<u8>>::deserialize(deserializer)?
    };
    ret.try_into().map_err(|e: Vec<u8>| {
        Error::custom(format!("expected {} bytes but found {}", N, e.len()).as_str())
    })
}
