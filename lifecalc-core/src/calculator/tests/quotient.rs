use super::*;
use crate::errors::ArithmeticError;

#[test]
fn test_quotient() {
    assert_eq!(quotient(84, 2), Ok(42));
    assert_eq!(quotient(0, -3), Ok(0));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(quotient(0, 0), Err(ArithmeticError::DivisionByZero));
    assert_eq!(quotient(42, 0), Err(ArithmeticError::DivisionByZero));
}

#[test]
fn test_unrepresentable_quotient() {
    assert_eq!(quotient(i64::MIN, -1), Err(ArithmeticError::Overflow));
}

#[test]
fn test_positive_counts_always_yield_the_answer() {
    for n in [1i64, 2, 7, 100, 65536] {
        let sum = accumulate(n).unwrap();
        assert_eq!(quotient(sum, n), Ok(42));
    }
}
