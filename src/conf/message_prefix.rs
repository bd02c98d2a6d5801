use serde::{Serialize, Deserialize};

/// Header that wallets prepend to a 32-byte hash before signing it
pub const ETHEREUM_SIGNED_MESSAGE_PREFIX: &'static [u8] = b"\x19Ethereum Signed Message:\n32";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum MessagePrefix
{
    /// The signer signed `keccak256(prefix || hash)`
    EthereumSigned,
    /// The signer signed the hash directly
    Raw,
}

impl Default
for MessagePrefix
{
    fn default() -> MessagePrefix {
        MessagePrefix::EthereumSigned
    }
}

impl std::fmt::Display for MessagePrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessagePrefix::EthereumSigned => write!(f, "eth"),
            MessagePrefix::Raw => write!(f, "raw"),
        }
    }
}

impl std::str::FromStr for MessagePrefix {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eth" => Ok(MessagePrefix::EthereumSigned),
            "raw" => Ok(MessagePrefix::Raw),
            _ => Err("valid values are 'eth' and 'raw'"),
        }
    }
}
