//! Tree-walking evaluator
//!
//! Evaluates an AST against a function table and an environment:
//! 1. Scalars evaluate to themselves
//! 2. `(env key)` reads the environment
//! 3. Any other form calls the handler registered for its head
//!
//! Failures are `Value::Error` results, never panics or `Err`s. Evaluation
//! keeps no state between calls, so re-evaluating an AST gives the same
//! result.

pub mod args;
pub mod special;

use crate::{Environment, FunctionTable, Value};
use tracing::{debug, trace};

/// Name of the built-in environment lookup form
pub const ENV_FORM: &str = "env";

/// Evaluate `node` and return its value.
pub fn eval(functions: &FunctionTable, env: &Environment, node: &Value) -> Value {
    let Value::Expression(items) = node else {
        return node.clone();
    };

    let Some((head, arguments)) = items.split_first() else {
        debug!("attempted to call an empty expression");
        return Value::error("expression without function name");
    };

    let name = head.as_str();
    trace!(function = name, arguments = arguments.len(), "dispatch");

    // Resolved before the table so hosts cannot shadow it
    if name == ENV_FORM {
        return special::env_lookup(functions, env, arguments);
    }

    match functions.get(name) {
        Some(handler) => handler(functions, env, arguments),
        None => {
            debug!(function = name, "unknown function");
            Value::error(format!("function {} not found", name))
        }
    }
}
