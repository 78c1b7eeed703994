use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
    util::num::f64_to_i64_truncated,
};

/// Evaluates a binary operation between two values.
///
/// Only numeric operands are combined. If either side is not
/// [`Value::Numeric`] the result is [`Value::Null`]; this is not an error.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use francois::{Value, ast::BinaryOperator, interpreter::evaluator::binary::eval_binary};
///
/// let seven = eval_binary(BinaryOperator::Add, &Value::Numeric(3.0), &Value::Numeric(4.0), 1);
/// assert_eq!(seven.unwrap(), Value::Numeric(7.0));
///
/// let null = eval_binary(BinaryOperator::Add, &Value::Numeric(3.0), &Value::Null, 1);
/// assert_eq!(null.unwrap(), Value::Null);
/// ```
///
/// # Errors
/// See [`eval_numeric`].
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Numeric(a), Value::Numeric(b)) => eval_numeric(op, *a, *b, line).map(Value::Numeric),
        _ => Ok(Value::Null),
    }
}

/// Applies an arithmetic operator to two numbers.
///
/// `+`, `-`, `*` and `/` follow IEEE 754, so dividing by zero gives an
/// infinity or NaN rather than an error. `%` truncates both operands toward
/// zero and takes the integer remainder, whose sign follows the dividend:
/// `7.9 % 2.5` is `7 % 2`, which is `1`. The remainder is converted back to
/// the nearest `f64`.
///
/// # Errors
/// - `ModuloByZero` if the truncated divisor of `%` is zero.
/// - `Overflow` if an operand of `%` is not finite or its integer part does
///   not fit in an `i64`.
#[allow(clippy::cast_precision_loss)]
pub fn eval_numeric(op: BinaryOperator, left: f64, right: f64, line: usize) -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mod, Mul, Sub};

    match op {
        Add => Ok(left + right),
        Sub => Ok(left - right),
        Mul => Ok(left * right),
        Div => Ok(left / right),
        Mod => {
            let dividend = f64_to_i64_truncated(left, RuntimeError::Overflow { line })?;
            let divisor = f64_to_i64_truncated(right, RuntimeError::Overflow { line })?;
            if divisor == 0 {
                return Err(RuntimeError::ModuloByZero { line });
            }
            // `i64::MIN % -1` wraps to 0.
            Ok(dividend.wrapping_rem(divisor) as f64)
        },
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeMap, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;

    fn arith(op: BinaryOperator, a: f64, b: f64) -> EvalResult<f64> {
        eval_numeric(op, a, b, 1)
    }

    #[test]
    fn basic_arithmetic() {
        assert_eq!(arith(BinaryOperator::Add, 1.5, 2.0), Ok(3.5));
        assert_eq!(arith(BinaryOperator::Sub, 1.0, 3.0), Ok(-2.0));
        assert_eq!(arith(BinaryOperator::Mul, 2.5, 4.0), Ok(10.0));
        assert_eq!(arith(BinaryOperator::Div, 7.0, 2.0), Ok(3.5));
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        assert_eq!(arith(BinaryOperator::Div, 1.0, 0.0), Ok(f64::INFINITY));
        assert!(arith(BinaryOperator::Div, 0.0, 0.0).unwrap().is_nan());
    }

    #[test]
    fn modulo_truncates_both_operands() {
        assert_eq!(arith(BinaryOperator::Mod, 7.0, 2.0), Ok(1.0));
        assert_eq!(arith(BinaryOperator::Mod, 7.9, 2.5), Ok(1.0));
        assert_eq!(arith(BinaryOperator::Mod, -7.0, 2.0), Ok(-1.0));
        assert_eq!(arith(BinaryOperator::Mod, 7.0, -3.0), Ok(1.0));
    }

    #[test]
    fn modulo_errors() {
        assert_eq!(arith(BinaryOperator::Mod, 5.0, 0.5),
                   Err(RuntimeError::ModuloByZero { line: 1 }));
        assert_eq!(arith(BinaryOperator::Mod, f64::INFINITY, 2.0),
                   Err(RuntimeError::Overflow { line: 1 }));
        assert_eq!(arith(BinaryOperator::Mod, 1e19, 3.0),
                   Err(RuntimeError::Overflow { line: 1 }));
    }

    #[test]
    fn modulo_accepts_every_i64_operand() {
        assert_eq!(arith(BinaryOperator::Mod, 1e17, 3e16), Ok(1e16));
        assert_eq!(arith(BinaryOperator::Mod, -1e17, 3e16), Ok(-1e16));
        assert_eq!(arith(BinaryOperator::Mod, -9_223_372_036_854_775_808.0, -1.0), Ok(0.0));
    }

    #[test]
    fn non_numeric_operands_give_null() {
        let object = Value::Object(Rc::new(BTreeMap::new()));
        let operands = [Value::Null, Value::Boolean(true), object];

        for other in &operands {
            assert_eq!(eval_binary(BinaryOperator::Add, other, &Value::Numeric(1.0), 1),
                       Ok(Value::Null));
            assert_eq!(eval_binary(BinaryOperator::Mod, &Value::Numeric(1.0), other, 1),
                       Ok(Value::Null));
        }
    }
}
