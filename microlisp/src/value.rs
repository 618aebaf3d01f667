//! Runtime values
//!
//! `Value` is both the AST node type and the evaluation result type. Every
//! accessor is total: asking for the wrong variant returns a zero value
//! (`""`, `0`, `0.0`, `false`, empty slice) instead of failing.

use crate::fuzzy::{FuzzyElement, FuzzySet};
use serde::Serialize;
use std::fmt;

/// A tagged runtime value.
///
/// Equality is structural. Fuzzy sets compare element-wise in order, each
/// element by value and exact weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// A parenthesized form; the first element names the function
    Expression(Vec<Value>),
    String(String),
    Int(i32),
    Float(f32),
    Bool(bool),
    Fuzzy(FuzzySet),
    /// Evaluation failure carried as an ordinary value
    Error(String),
}

/// The tag of a `Value`, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Expression,
    String,
    Int,
    Float,
    Bool,
    Fuzzy,
    Error,
}

impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Expression => "expression",
            ValueKind::String => "string",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Bool => "bool",
            ValueKind::Fuzzy => "fuzzy set",
            ValueKind::Error => "error",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `inf` or `infinity` in any case, with an optional sign
fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

impl Value {
    /// Build a value from atom text.
    ///
    /// With `infer` set, `true`/`false` become booleans, then a 32-bit
    /// integer is tried, then a 32-bit float; anything else stays a string.
    /// A finite literal too large for `f32` stays a string, while `inf` and
    /// `infinity` spelled out still give an infinite float. Hex floats such
    /// as `0x1p4` are not recognised and stay strings.
    pub fn from_atom(text: &str, infer: bool) -> Self {
        if !infer {
            return Value::String(text.to_string());
        }
        match text {
            "true" => return Value::Bool(true),
            "false" => return Value::Bool(false),
            _ => {}
        }
        if let Ok(i) = text.parse::<i32>() {
            return Value::Int(i);
        }
        if let Ok(f) = text.parse::<f32>() {
            if f.is_finite() || is_infinity_literal(text) {
                return Value::Float(f);
            }
        }
        Value::String(text.to_string())
    }

    pub fn string(text: impl Into<String>) -> Self {
        Value::String(text.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(message.into())
    }

    pub fn expression(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Expression(items.into_iter().collect())
    }

    pub fn fuzzy(normalize: bool, elements: impl IntoIterator<Item = FuzzyElement>) -> Self {
        Value::Fuzzy(FuzzySet::new(normalize, elements))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Expression(_) => ValueKind::Expression,
            Value::String(_) => ValueKind::String,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Bool(_) => ValueKind::Bool,
            Value::Fuzzy(_) => ValueKind::Fuzzy,
            Value::Error(_) => ValueKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn as_expression(&self) -> &[Value] {
        match self {
            Value::Expression(items) => items,
            _ => &[],
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Value::String(s) => s,
            _ => "",
        }
    }

    pub fn as_int(&self) -> i32 {
        match self {
            Value::Int(i) => *i,
            _ => 0,
        }
    }

    /// Float payload; integers widen to `f32`
    pub fn as_float(&self) -> f32 {
        match self {
            Value::Float(f) => *f,
            Value::Int(i) => *i as f32,
            _ => 0.0,
        }
    }

    pub fn as_bool(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            _ => false,
        }
    }

    pub fn as_fuzzy(&self) -> &[FuzzyElement] {
        match self {
            Value::Fuzzy(set) => set.elements(),
            _ => &[],
        }
    }

    pub fn as_error(&self) -> &str {
        match self {
            Value::Error(message) => message,
            _ => "",
        }
    }

    /// Nesting depth of the tree: scalars are 0, `()` is 1.
    pub fn depth(&self) -> usize {
        match self {
            Value::Expression(items) => 1 + items.iter().map(Value::depth).max().unwrap_or(0),
            _ => 0,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<FuzzySet> for Value {
    fn from(value: FuzzySet) -> Self {
        Value::Fuzzy(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Expression(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
            Value::String(s) => write!(f, "{}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Fuzzy(set) => write!(f, "{}", set),
            Value::Error(message) => write!(f, "error: {}", message),
        }
    }
}
