use error_chain::error_chain;

use crate::math::U256;

error_chain! {
    types {
        MathError, MathErrorKind, ResultExt, Result;
    }
    errors {
        Overflow {
            description("the result of the arithmetic operation exceeds the largest 256-bit value"),
            display("the result of the arithmetic operation exceeds the largest 256-bit value"),
        }
        Underflow {
            description("the result of the subtraction would be negative"),
            display("the result of the subtraction would be negative"),
        }
        InvalidShift(amount: U256) {
            description("the shift amount is outside the accepted range"),
            display("the shift amount ({}) is outside the accepted range", amount),
        }
        DivisionByZero {
            description("attempted to divide by zero"),
            display("attempted to divide by zero"),
        }
    }
}
