use error_chain::error_chain;

error_chain! {
    types {
        IdentityError, IdentityErrorKind, ResultExt, Result;
    }
    errors {
        InvalidHex(err: String) {
            description("the identity is not valid hex"),
            display("the identity is not valid hex - {}", err),
        }
        InvalidLength(len: usize) {
            description("the identity has the wrong length"),
            display("the identity has the wrong length (expected 20 bytes but found {})", len),
        }
    }
}
