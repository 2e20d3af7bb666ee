use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum ArithmeticError {
    #[error("division by zero: the magic number must be nonzero")]
    DivisionByZero,
    #[error("result does not fit in a 64-bit integer")]
    Overflow,
}
