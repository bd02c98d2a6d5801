use error_chain::error_chain;

use crate::crypto::Identity;

error_chain! {
    types {
        SignatureError, SignatureErrorKind, ResultExt, Result;
    }
    errors {
        InvalidLength(len: usize) {
            description("the signature has the wrong length"),
            display("the signature has the wrong length (expected 65 bytes but found {})", len),
        }
        InvalidRecoveryId(v: u8) {
            description("the signature carries an unsupported recovery id"),
            display("the signature carries an unsupported recovery id ({})", v),
        }
        MalformedSignature(err: String) {
            description("the signature is not a valid secp256k1 signature"),
            display("the signature is not a valid secp256k1 signature - {}", err),
        }
        RecoveryFailed(err: String) {
            description("failed to recover the signer from the signature"),
            display("failed to recover the signer from the signature - {}", err),
        }
        SigningFailed(err: String) {
            description("failed to sign the message"),
            display("failed to sign the message - {}", err),
        }
        InvalidSignature(subject: Identity) {
            description("the signature was not issued by a bouncer for this subject"),
            display("the signature was not issued by a bouncer for this subject ({})", subject),
        }
    }
}
