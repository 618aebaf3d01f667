//! Fuzzy logic over membership degrees
//!
//! Degrees are floats, conceptually in `[0, 1]` though nothing enforces it.
//! `fand` is the minimum and `for` the maximum of its arguments. Neither
//! short-circuits on value; both stop at the first error or non-float.

use crate::evaluator::args::{at_least_one, eval_float, exactly, finish, ArgResult};
use crate::{Environment, FunctionTable, Value};

/// `fnot`, `fand` and `for`
pub fn fuzzy_logic() -> FunctionTable {
    FunctionTable::new()
        .with("fnot", |functions, env, arguments| {
            finish(fnot(functions, env, arguments))
        })
        .with("fand", |functions, env, arguments| {
            finish(fold_degrees(functions, env, arguments, "fand", 1.0, f32::min))
        })
        .with("for", |functions, env, arguments| {
            finish(fold_degrees(functions, env, arguments, "for", 0.0, f32::max))
        })
}

fn fnot(functions: &FunctionTable, env: &Environment, arguments: &[Value]) -> ArgResult<Value> {
    exactly(arguments, 1, "Function `fnot' required one param")?;
    let degree = eval_float(
        functions,
        env,
        &arguments[0],
        "Function `fnot' expect float param",
    )?;
    Ok(Value::Float(1.0 - degree))
}

fn fold_degrees(
    functions: &FunctionTable,
    env: &Environment,
    arguments: &[Value],
    name: &str,
    initial: f32,
    combine: fn(f32, f32) -> f32,
) -> ArgResult<Value> {
    at_least_one(
        arguments,
        &format!("Function `{}' required at least one param", name),
    )?;
    let mismatch = format!("Function `{}' expect float param", name);
    let mut degree = initial;
    for argument in arguments {
        degree = combine(degree, eval_float(functions, env, argument, &mismatch)?);
    }
    Ok(Value::Float(degree))
}
