#![cfg(test)]
#[allow(unused_imports)]
use tracing::{debug, error, info, instrument, span, trace, warn, Level};

use crate::conf::*;
use crate::error::*;
use crate::math::U256;

use super::*;

const SECP256K1_ORDER: &'static str = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

fn key_from_scalar(n: u8) -> BouncerSigningKey {
    let mut bytes = [0u8; 32];
    bytes[31] = n;
    BouncerSigningKey::from_bytes(&bytes[..]).unwrap()
}

/// Rewrites `s` as `n - s` and flips the parity byte, giving the high s
/// twin of a signature.
fn to_high_s(sig: &[u8]) -> Vec<u8> {
    let order = U256::from_big_endian(&hex::decode(SECP256K1_ORDER).unwrap()[..]);
    let s = U256::from_big_endian(&sig[32..64]);
    let mut ret = sig.to_vec();
    (order - s).to_big_endian(&mut ret[32..64]);
    ret[64] = if sig[64] == 27 { 28 } else { 27 };
    ret
}

#[test]
fn test_keccak_empty() {
    crate::utils::bootstrap_test_env();

    let hash = MessageHash::from_bytes(b"");
    assert_eq!(hash.to_hex_string(), "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470");
    assert_eq!(MessageHash::from_hex_string(&hash.to_hex_string()), Some(hash));
    assert_eq!(MessageHash::from_hex_string("0x1234"), None);
}

#[test]
fn test_hash_twice_is_concatenation() {
    crate::utils::bootstrap_test_env();

    let a = Identity::generate();
    let b = Identity::generate();

    let mut joined = a.as_bytes().to_vec();
    joined.extend_from_slice(&b.as_bytes()[..]);

    assert_eq!(MessageHash::for_authorization(&a, &b), MessageHash::from_bytes(&joined[..]));
    assert_ne!(MessageHash::for_authorization(&a, &b), MessageHash::for_authorization(&b, &a));
}

#[test]
fn test_eth_signed_prefix() {
    crate::utils::bootstrap_test_env();

    let hash = MessageHash::from("authorization");
    let mut joined = ETHEREUM_SIGNED_MESSAGE_PREFIX.to_vec();
    joined.extend_from_slice(&hash.val[..]);

    assert_eq!(hash.with_prefix(MessagePrefix::EthereumSigned), MessageHash::from_bytes(&joined[..]));
    assert_eq!(hash.with_prefix(MessagePrefix::Raw), hash);
}

#[test]
fn test_identity_from_known_key() {
    crate::utils::bootstrap_test_env();

    let key = key_from_scalar(1);
    assert_eq!(key.identity().to_hex_string(), "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf");

    let key = key_from_scalar(2);
    assert_eq!(key.identity().to_hex_string(), "0x2b5ad5c4795c026514f8317c7a215e218dccd6cf");
}

#[test]
fn test_identity_hex() {
    crate::utils::bootstrap_test_env();

    let identity = Identity::generate();
    let parsed: Identity = identity.to_string().parse().unwrap();
    assert_eq!(parsed, identity);

    let parsed = Identity::from_hex_string("7E5F4552091A69125D5DFCB7B8C2659029395BDF").unwrap();
    assert_eq!(parsed, key_from_scalar(1).identity());

    let err = Identity::from_hex_string("0xabcd").unwrap_err();
    assert!(matches!(err.kind(), IdentityErrorKind::InvalidLength(2)));

    let err = Identity::from_hex_string("0xnothex").unwrap_err();
    assert!(matches!(err.kind(), IdentityErrorKind::InvalidHex(_)));
}

#[test]
fn test_identity_serde() {
    crate::utils::bootstrap_test_env();

    let identity = key_from_scalar(1).identity();
    let json = serde_json::to_string(&identity).unwrap();
    assert_eq!(json, r#""0x7e5f4552091a69125d5dfcb7b8c2659029395bdf""#);
    let test: Identity = serde_json::from_str(&json).unwrap();
    assert_eq!(test, identity);

    let bytes = bincode::serialize(&identity).unwrap();
    let test: Identity = bincode::deserialize(&bytes[..]).unwrap();
    assert_eq!(test, identity);
}

#[test]
fn test_sign_and_recover() {
    crate::utils::bootstrap_test_env();

    let conf = ConfBouncer::default();
    let key = BouncerSigningKey::generate();
    let hash = MessageHash::from("payload");

    let sig = key.sign_hash(&hash).unwrap();
    assert_eq!(sig.recover(&hash).unwrap(), key.identity());

    let bytes = sig.to_bytes();
    assert_eq!(bytes.len(), SIGNATURE_LEN);
    assert!(bytes[64] == 27 || bytes[64] == 28);

    let parsed = BouncerSignature::from_bytes(&bytes[..], &conf).unwrap();
    assert_eq!(parsed, sig);

    let other = MessageHash::from("other payload");
    let recovered = sig.recover(&other);
    assert!(recovered.is_err() || recovered.unwrap() != key.identity());
}

#[test]
fn test_key_round_trip() {
    crate::utils::bootstrap_test_env();

    let key = BouncerSigningKey::generate();
    let copy = BouncerSigningKey::from_bytes(&key.to_bytes()[..]).unwrap();
    assert_eq!(copy.identity(), key.identity());

    assert!(BouncerSigningKey::from_bytes(&[0u8; 32][..]).is_err());
    assert!(BouncerSigningKey::from_bytes(&[1u8; 12][..]).is_err());
}

#[test]
fn test_raw_recovery_id() {
    crate::utils::bootstrap_test_env();

    let key = BouncerSigningKey::generate();
    let hash = MessageHash::from("payload");
    let mut bytes = key.sign_hash(&hash).unwrap().to_bytes();
    bytes[64] -= RECOVERY_ID_OFFSET;

    let sig = BouncerSignature::from_bytes(&bytes[..], &ConfBouncer::default()).unwrap();
    assert_eq!(sig.recover(&hash).unwrap(), key.identity());

    let err = BouncerSignature::from_bytes(&bytes[..], &ConfBouncer::strict()).unwrap_err();
    assert!(matches!(err.kind(), SignatureErrorKind::InvalidRecoveryId(_)));
}

#[test]
fn test_high_s_signature() {
    crate::utils::bootstrap_test_env();

    let key = BouncerSigningKey::generate();
    let hash = MessageHash::from("payload");
    let low = key.sign_hash(&hash).unwrap().to_bytes();
    let high = to_high_s(&low[..]);

    let sig = BouncerSignature::from_bytes(&high[..], &ConfBouncer::default()).unwrap();
    assert_eq!(sig.to_bytes(), low);
    assert_eq!(sig.recover(&hash).unwrap(), key.identity());

    let err = BouncerSignature::from_bytes(&high[..], &ConfBouncer::strict()).unwrap_err();
    assert!(matches!(err.kind(), SignatureErrorKind::MalformedSignature(_)));
}

#[test]
fn test_malformed_signatures() {
    crate::utils::bootstrap_test_env();

    let conf = ConfBouncer::default();

    let err = BouncerSignature::from_bytes(&hex::decode("abcd").unwrap()[..], &conf).unwrap_err();
    assert!(matches!(err.kind(), SignatureErrorKind::InvalidLength(2)));

    let err = BouncerSignature::from_bytes(&[], &conf).unwrap_err();
    assert!(matches!(err.kind(), SignatureErrorKind::InvalidLength(0)));

    let mut bytes = [7u8; SIGNATURE_LEN];
    bytes[64] = 29;
    let err = BouncerSignature::from_bytes(&bytes[..], &conf).unwrap_err();
    assert!(matches!(err.kind(), SignatureErrorKind::InvalidRecoveryId(29)));

    let mut bytes = [0u8; SIGNATURE_LEN];
    bytes[64] = 27;
    let err = BouncerSignature::from_bytes(&bytes[..], &conf).unwrap_err();
    assert!(matches!(err.kind(), SignatureErrorKind::MalformedSignature(_)));
}
