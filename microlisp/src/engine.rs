use crate::evaluator::eval;
use crate::lexer::{nesting_depth, tokenize};
use crate::parser::parse_program;
use crate::{
    library, Environment, FunctionTable, MicrolispError, MicrolispResult, ResourceLimits, Value,
};
use tracing::debug;

/// Parses and evaluates programs against one function table.
///
/// The engine never changes after construction, so a shared `&Engine` can
/// evaluate from several threads at once.
#[derive(Debug, Clone)]
pub struct Engine {
    functions: FunctionTable,
    limits: ResourceLimits,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            functions: library::standard(),
            limits: ResourceLimits::default(),
        }
    }
}

impl Engine {
    /// Engine with the standard and fuzzy logic libraries and default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a host-provided function table
    pub fn with_functions(functions: FunctionTable) -> Self {
        Self {
            functions,
            limits: ResourceLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Add or replace one function
    pub fn register<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&FunctionTable, &Environment, &[Value]) -> Value + Send + Sync + 'static,
    {
        self.functions.register(name, handler);
        self
    }

    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    /// Parse `program`, enforcing the size and nesting limits first.
    pub fn parse(&self, program: &str) -> MicrolispResult<Value> {
        if program.len() > self.limits.max_program_bytes {
            debug!(bytes = program.len(), "program rejected: too large");
            return Err(MicrolispError::ResourceLimitExceeded {
                limit_name: "max_program_bytes".to_string(),
                limit_value: self.limits.max_program_bytes.to_string(),
                actual_value: program.len().to_string(),
                suggestion: "Split the rule into smaller programs".to_string(),
            });
        }

        let tokens = tokenize(program);

        // Checked on the flat token stream so deep input never reaches the
        // recursive parser
        let depth = nesting_depth(&tokens);
        if depth > self.limits.max_expression_depth {
            debug!(depth, "program rejected: nested too deeply");
            return Err(MicrolispError::ResourceLimitExceeded {
                limit_name: "max_expression_depth".to_string(),
                limit_value: self.limits.max_expression_depth.to_string(),
                actual_value: depth.to_string(),
                suggestion: format!(
                    "Reduce expression nesting to {} levels or less",
                    self.limits.max_expression_depth
                ),
            });
        }

        Ok(parse_program(&tokens)?)
    }

    /// Evaluate a parsed program
    pub fn eval(&self, ast: &Value, env: &Environment) -> Value {
        eval(&self.functions, env, ast)
    }

    /// Parse and evaluate `program` in one step.
    ///
    /// `Err` means the program was rejected; evaluation failures come back
    /// as `Ok(Value::Error(..))`.
    pub fn evaluate(&self, program: &str, env: &Environment) -> MicrolispResult<Value> {
        let ast = self.parse(program)?;
        Ok(self.eval(&ast, env))
    }
}
