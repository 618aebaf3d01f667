//! # microlisp
//!
//! **A tiny S-expression language for embedded rules**
//!
//! microlisp parses one expression per program and evaluates it against a
//! host-supplied environment (named values) and function table (built-ins).
//! It ships boolean logic with short-circuiting and fuzzy logic over
//! membership degrees.
//!
//! ## Quick Start
//!
//! ```rust
//! use microlisp::{Engine, Environment, MicrolispResult, Value};
//!
//! fn main() -> MicrolispResult<()> {
//!     let engine = Engine::new();
//!
//!     let env = Environment::new()
//!         .with("door_open", true)
//!         .with("alarm_armed", false);
//!
//!     let result = engine.evaluate("(and (env door_open) (not (env alarm_armed)))", &env)?;
//!     assert_eq!(result, Value::Bool(true));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Values
//! Every AST node and every result is a [`Value`]: strings, 32-bit ints and
//! floats, booleans, fuzzy sets, nested expressions, and errors. Errors are
//! ordinary values; evaluation never panics and never returns `Err`.
//!
//! ### Functions
//! A [`FunctionTable`] maps names to handlers. Handlers get their arguments
//! unevaluated and evaluate them on demand, which is how `and`, `or` and
//! `if` avoid evaluating what they do not need.
//!
//! ### Environment
//! `(env key)` is the one special form: it reads `key` from the
//! [`Environment`]. It cannot be overridden by the function table.

pub mod engine;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod fuzzy;
pub mod lexer;
pub mod library;
pub mod parser;
pub mod resource_limits;
pub mod serializers;
pub mod value;

pub use engine::Engine;
pub use environment::Environment;
pub use error::{MicrolispError, ParseError};
pub use evaluator::eval;
pub use functions::{FunctionTable, Handler};
pub use fuzzy::{fuzzy_equals, fuzzy_equals_many, make_fuzzy_set, FuzzyElement, FuzzySet};
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::parse;
pub use resource_limits::ResourceLimits;
pub use value::{Value, ValueKind};

/// Result type for engine operations
pub type MicrolispResult<T> = Result<T, MicrolispError>;

#[cfg(test)]
mod tests;
