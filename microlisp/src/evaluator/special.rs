use super::eval;
use crate::{Environment, FunctionTable, Value};

/// `(env key)`: look `key` up in the environment.
///
/// A sub-expression key is evaluated first and must produce a string.
pub fn env_lookup(functions: &FunctionTable, env: &Environment, arguments: &[Value]) -> Value {
    let [argument] = arguments else {
        return Value::error("Function `env' expect 1 param");
    };

    let key = match argument {
        Value::Expression(_) => eval(functions, env, argument),
        literal => literal.clone(),
    };

    let key = match key {
        Value::String(key) => key,
        error @ Value::Error(_) => return error,
        _ => return Value::error("Function `env' expect 1 param is string"),
    };

    match env.get(&key) {
        Some(value) => value.clone(),
        None => Value::error(format!("Environment key `{}' not found", key)),
    }
}
