use anyhow::Result;
use microlisp::{Token, Value};

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    /// One token per line, e.g. `OPEN (`
    pub fn format_tokens(&self, tokens: &[Token]) -> String {
        let mut output = String::new();
        for token in tokens {
            output.push_str(&token.to_string());
            output.push('\n');
        }
        output
    }

    /// S-expression text, or pretty JSON of the tagged value
    pub fn format_value(&self, value: &Value, json: bool) -> Result<String> {
        if json {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(value.to_string())
        }
    }

    pub fn format_eval_error(&self, message: &str) -> String {
        format!("Evaluation error: {}", message)
    }
}
