//! Boolean logic with lazy evaluation
//!
//! `and` and `or` stop at the first decisive argument; `if` evaluates only
//! the branch it takes.

use crate::evaluator::args::{at_least_one, eval_bool, exactly, finish, ArgResult};
use crate::evaluator::eval;
use crate::{Environment, FunctionTable, Value};

/// `not`, `and`, `or` and `if`
pub fn standard_logic() -> FunctionTable {
    FunctionTable::new()
        .with("not", |functions, env, arguments| {
            finish(not(functions, env, arguments))
        })
        .with("and", |functions, env, arguments| {
            finish(short_circuit(functions, env, arguments, "and", false))
        })
        .with("or", |functions, env, arguments| {
            finish(short_circuit(functions, env, arguments, "or", true))
        })
        .with("if", |functions, env, arguments| {
            finish(if_then_else(functions, env, arguments))
        })
}

fn not(functions: &FunctionTable, env: &Environment, arguments: &[Value]) -> ArgResult<Value> {
    exactly(arguments, 1, "Function `not' required one param")?;
    let value = eval_bool(
        functions,
        env,
        &arguments[0],
        "Function `not' expect bool param",
    )?;
    Ok(Value::Bool(!value))
}

/// Evaluate left to right until an argument equals `decisive`.
///
/// Returns `decisive` if one is found, its negation if every argument was
/// evaluated without finding one.
fn short_circuit(
    functions: &FunctionTable,
    env: &Environment,
    arguments: &[Value],
    name: &str,
    decisive: bool,
) -> ArgResult<Value> {
    at_least_one(
        arguments,
        &format!("Function `{}' required at least one param", name),
    )?;
    let mismatch = format!("Function `{}' expect bool param", name);
    for argument in arguments {
        if eval_bool(functions, env, argument, &mismatch)? == decisive {
            return Ok(Value::Bool(decisive));
        }
    }
    Ok(Value::Bool(!decisive))
}

fn if_then_else(
    functions: &FunctionTable,
    env: &Environment,
    arguments: &[Value],
) -> ArgResult<Value> {
    exactly(arguments, 3, "Function `if' required 3 param")?;
    let condition = eval_bool(
        functions,
        env,
        &arguments[0],
        "Function `if' expect bool param in condition",
    )?;
    let branch = if condition { &arguments[1] } else { &arguments[2] };
    Ok(eval(functions, env, branch))
}
