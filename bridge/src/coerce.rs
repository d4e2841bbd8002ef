//! Conversion of loosely typed host values into native argument types.
//!
//! The rules mirror what a dynamic host does implicitly at a native call:
//! numbers narrow to integers by truncation, numbers stand in for booleans,
//! and anything that is not a number (text, lists) is refused outright.

use crate::error::ArgumentError;
use crate::signature::BoundArgs;
use value::Value;

/// Build a native argument struct from bound host values.
///
/// Implementors call [`BoundArgs::int`] / [`BoundArgs::flag`] per parameter;
/// the first fault aborts the call before any native code runs.
pub trait FromArgs: Sized {
    fn from_args(bound: &BoundArgs<'_>) -> Result<Self, ArgumentError>;
}

/// Coerce to `i32`.
///
/// Floats are truncated toward zero (`10.9` -> `10`, `-2.7` -> `-2`), never
/// rounded. Booleans count as 0/1. NaN and infinities are type faults, finite
/// values outside the `i32` range are range faults.
pub fn to_i32(function: &'static str, param: &'static str, value: &Value) -> Result<i32, ArgumentError> {
    let out_of_range = || ArgumentError::OutOfRange {
        function,
        param,
        expected: "int",
        value: value.to_string(),
    };

    match value {
        Value::Int(i) => i32::try_from(*i).map_err(|_| out_of_range()),
        Value::Bool(b) => Ok(i32::from(*b)),
        Value::Float(x) if x.is_finite() => {
            let truncated = x.trunc();
            if truncated < f64::from(i32::MIN) || truncated > f64::from(i32::MAX) {
                Err(out_of_range())
            } else {
                Ok(truncated as i32)
            }
        }
        _ => Err(mismatch(function, param, "int", value)),
    }
}

/// Coerce to `bool`.
///
/// Numbers are truthy when non-zero and `nil` is false. Strings are refused
/// even though many hosts consider them truthy; a native flag should not
/// silently flip on `"false"`.
pub fn to_bool(function: &'static str, param: &'static str, value: &Value) -> Result<bool, ArgumentError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Int(i) => Ok(*i != 0),
        Value::Float(x) => Ok(*x != 0.0),
        Value::Nil => Ok(false),
        Value::Str(_) | Value::List(_) => Err(mismatch(function, param, "bool", value)),
    }
}

fn mismatch(function: &'static str, param: &'static str, expected: &'static str, value: &Value) -> ArgumentError {
    ArgumentError::TypeMismatch {
        function,
        param,
        expected,
        found: value.kind(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use value::Kind;

    fn int(v: Value) -> Result<i32, ArgumentError> {
        to_i32("f", "n", &v)
    }

    fn flag(v: Value) -> Result<bool, ArgumentError> {
        to_bool("f", "b", &v)
    }

    #[test]
    fn ints_pass_through() {
        assert_eq!(int(Value::int(10)), Ok(10));
        assert_eq!(int(Value::int(-10)), Ok(-10));
        assert_eq!(int(Value::int(i64::from(i32::MAX))), Ok(i32::MAX));
        assert_eq!(int(Value::int(i64::from(i32::MIN))), Ok(i32::MIN));
    }

    #[test]
    fn floats_truncate_toward_zero() {
        assert_eq!(int(Value::float(10.5)), Ok(10));
        assert_eq!(int(Value::float(10.9)), Ok(10));
        assert_eq!(int(Value::float(-2.7)), Ok(-2));
        assert_eq!(int(Value::float(-0.5)), Ok(0));
        assert_eq!(int(Value::float(2147483647.9)), Ok(i32::MAX));
    }

    #[test]
    fn bools_are_integers() {
        assert_eq!(int(Value::bool(true)), Ok(1));
        assert_eq!(int(Value::bool(false)), Ok(0));
    }

    #[test]
    fn out_of_range_ints() {
        assert!(matches!(
            int(Value::int(i64::from(i32::MAX) + 1)),
            Err(ArgumentError::OutOfRange { param: "n", .. })
        ));
        assert!(matches!(
            int(Value::float(-3e10)),
            Err(ArgumentError::OutOfRange { .. })
        ));
    }

    #[test]
    fn non_numbers_are_refused_for_int() {
        for v in [
            Value::string("10"),
            Value::nil(),
            Value::list(vec![Value::int(1)]),
            Value::float(f64::NAN),
            Value::float(f64::INFINITY),
        ] {
            assert!(
                matches!(int(v.clone()), Err(ArgumentError::TypeMismatch { .. })),
                "{v} should be refused"
            );
        }
        assert!(matches!(
            int(Value::string("10")),
            Err(ArgumentError::TypeMismatch { found: Kind::Str, expected: "int", .. })
        ));
    }

    #[test]
    fn truthy_numbers_for_bool() {
        assert_eq!(flag(Value::bool(true)), Ok(true));
        assert_eq!(flag(Value::int(1)), Ok(true));
        assert_eq!(flag(Value::int(0)), Ok(false));
        assert_eq!(flag(Value::int(-3)), Ok(true));
        assert_eq!(flag(Value::float(0.0)), Ok(false));
        assert_eq!(flag(Value::float(0.25)), Ok(true));
        assert_eq!(flag(Value::nil()), Ok(false));
    }

    #[test]
    fn text_is_refused_for_bool() {
        assert!(matches!(
            flag(Value::string("true")),
            Err(ArgumentError::TypeMismatch { found: Kind::Str, expected: "bool", .. })
        ));
        assert!(matches!(
            flag(Value::list(vec![])),
            Err(ArgumentError::TypeMismatch { found: Kind::List, .. })
        ));
    }
}
