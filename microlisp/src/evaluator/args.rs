//! Argument helpers shared by built-in functions
//!
//! Each helper returns `Err(value)` with the `Value::Error` the built-in
//! should hand back unchanged, so handlers can use `?` and finish with
//! [`finish`].

use super::eval;
use crate::{Environment, FunctionTable, Value};

/// Result of an argument check; the error side is a `Value::Error`
pub type ArgResult<T> = Result<T, Value>;

/// Collapse a handler body into the value it returns.
pub fn finish(result: ArgResult<Value>) -> Value {
    result.unwrap_or_else(|error| error)
}

/// Require exactly `expected` arguments
pub fn exactly(arguments: &[Value], expected: usize, message: &str) -> ArgResult<()> {
    if arguments.len() == expected {
        Ok(())
    } else {
        Err(Value::error(message))
    }
}

/// Require at least one argument
pub fn at_least_one(arguments: &[Value], message: &str) -> ArgResult<()> {
    if arguments.is_empty() {
        Err(Value::error(message))
    } else {
        Ok(())
    }
}

/// Evaluate `argument` and require a boolean.
///
/// An `Error` result is passed through untouched; any other variant becomes
/// `Error(mismatch)`.
pub fn eval_bool(
    functions: &FunctionTable,
    env: &Environment,
    argument: &Value,
    mismatch: &str,
) -> ArgResult<bool> {
    match eval(functions, env, argument) {
        Value::Bool(b) => Ok(b),
        error @ Value::Error(_) => Err(error),
        _ => Err(Value::error(mismatch)),
    }
}

/// Evaluate `argument` and require a float, like [`eval_bool`].
pub fn eval_float(
    functions: &FunctionTable,
    env: &Environment,
    argument: &Value,
    mismatch: &str,
) -> ArgResult<f32> {
    match eval(functions, env, argument) {
        Value::Float(f) => Ok(f),
        error @ Value::Error(_) => Err(error),
        _ => Err(Value::error(mismatch)),
    }
}
