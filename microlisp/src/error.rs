use thiserror::Error;

/// Structural failure while turning program text into an AST.
///
/// Every variant carries the byte offset it refers to: the offending token,
/// or the input length when the input ended too early.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An opening parenthesis was never closed
    #[error("unexpected end of expression")]
    UnexpectedEndOfExpression { offset: usize },

    /// A multi-token program does not start with `(`
    #[error("expected opening parenthesis")]
    ExpectedOpeningParenthesis { offset: usize },

    /// Tokens remain after one complete form
    #[error("too many tokens: a program is exactly one form")]
    TooManyTokens { offset: usize },
}

impl ParseError {
    /// Byte offset in the source text this error points at
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedEndOfExpression { offset }
            | ParseError::ExpectedOpeningParenthesis { offset }
            | ParseError::TooManyTokens { offset } => *offset,
        }
    }

    /// Short hint shown next to rendered diagnostics
    pub fn suggestion(&self) -> &'static str {
        match self {
            ParseError::UnexpectedEndOfExpression { .. } => "add the missing `)`",
            ParseError::ExpectedOpeningParenthesis { .. } => {
                "wrap the program in parentheses, e.g. `(f a b)`"
            }
            ParseError::TooManyTokens { .. } => "remove everything after the first complete form",
        }
    }
}

/// Error types raised by the engine facade and the host adapters.
///
/// Evaluation failures are not here: they are `Value::Error` results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MicrolispError {
    /// Program text could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// A configured resource limit was exceeded
    #[error("Resource limit exceeded: {limit_name} (limit: {limit_value}, actual: {actual_value}). {suggestion}")]
    ResourceLimitExceeded {
        limit_name: String,
        limit_value: String,
        actual_value: String,
        suggestion: String,
    },

    /// Environment document could not be decoded
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for MicrolispError {
    fn from(err: serde_json::Error) -> Self {
        MicrolispError::Json(err.to_string())
    }
}
