#[allow(unused_imports)]
use tracing::{info, warn, debug, error, trace, instrument, span, Level};
use serde::{Serialize, Deserialize};

use crate::error::*;

use super::*;

/// Configuration settings for signature checks performed by a `Bouncer`
///
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ConfBouncer
{
    /// Determines what is actually signed over the authorization hash. The
    /// default matches what `eth_sign` style wallets produce.
    pub message_prefix: MessagePrefix,

    /// Accepts signatures whose trailing recovery byte is `0` or `1` as
    /// well as the usual `27` or `28`
    pub accept_raw_recovery_id: bool,

    /// Signatures with a high `s` value are folded into their low `s`
    /// twin (flipping the recovery parity) rather than being rejected.
    /// `ecrecover` accepts both forms so this is on by default.
    pub normalize_high_s: bool,
}

impl Default
for ConfBouncer
{
    fn default() -> ConfBouncer {
        ConfBouncer {
            message_prefix: MessagePrefix::EthereumSigned,
            accept_raw_recovery_id: true,
            normalize_high_s: true,
        }
    }
}

impl ConfBouncer
{
    /// Strict settings that only accept `27`/`28` recovery bytes and
    /// low `s` signatures.
    pub fn strict() -> ConfBouncer {
        ConfBouncer {
            accept_raw_recovery_id: false,
            normalize_high_s: false,
            ..ConfBouncer::default()
        }
    }

    /// Loads settings from JSON, any missing field takes its default
    pub fn from_json(data: &str) -> Result<ConfBouncer, GuardError> {
        let ret: ConfBouncer = serde_json::from_str(data)?;
        debug!("loaded bouncer settings (prefix={}, raw_recovery_id={}, normalize_high_s={})", ret.message_prefix, ret.accept_raw_recovery_id, ret.normalize_high_s);
        Ok(ret)
    }
}
