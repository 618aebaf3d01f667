/// Resource limits applied by [`Engine`](crate::Engine) before parsing
///
/// Evaluation recurses once per nesting level, so the depth limit also
/// bounds evaluator stack use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLimits {
    /// Maximum program size in bytes
    /// Real usage: ~200 bytes per rule, Limit: 1MB
    pub max_program_bytes: usize,

    /// Maximum parenthesis nesting depth
    /// Real usage: ~5 levels, Limit: 100
    pub max_expression_depth: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_program_bytes: 1024 * 1024, // 1 MB
            max_expression_depth: 100,
        }
    }
}

impl ResourceLimits {
    /// Create a new ResourceLimits with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits that accept any input
    pub fn unlimited() -> Self {
        Self {
            max_program_bytes: usize::MAX,
            max_expression_depth: usize::MAX,
        }
    }
}
