use thiserror::Error;

/// Result type alias using GraphError
pub type Result<T> = std::result::Result<T, GraphError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling and test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Path resolution
    MemberNotFound,
    TypeMismatch,

    // Configuration
    InvalidOptions,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::MemberNotFound => "ERR_MEMBER_NOT_FOUND",
            ExErrorKind::TypeMismatch => "ERR_TYPE_MISMATCH",
            ExErrorKind::InvalidOptions => "ERR_INVALID_OPTIONS",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and the graph
/// context (type, path, member) the failure was raised in.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    type_name: Option<String>,
    path: Option<String>,
    member: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            type_name: None,
            path: None,
            member: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the name of the type the failure was raised against
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Add property path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add member name context
    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.member = Some(member.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the type name context, if any
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// Get the property path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the member name context, if any
    pub fn member(&self) -> Option<&str> {
        self.member.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(type_name) = &self.type_name {
            write!(f, " (type: {})", type_name)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(member) = &self.member {
            write!(f, " (member: {})", member)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for graph inspection operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A path segment or member name does not exist on the current value's type,
    /// or the final segment of a write cannot be written
    #[error("Member '{member}' not found on type {type_name}")]
    MemberNotFound { type_name: String, member: String },

    /// A typed read or a write resolved a value whose type is incompatible
    #[error(
        "Type mismatch at {declaring_type}.{path}: expected '{expected}' or derivative, found '{actual}'"
    )]
    TypeMismatch {
        declaring_type: String,
        path: String,
        expected: String,
        actual: String,
    },

    /// Comparison or copy options could not be parsed
    #[error("Invalid options: {reason}")]
    InvalidOptions { reason: String },
}

impl GraphError {
    /// True for the error kind `get_or_default` converts into a fallback value
    pub fn is_member_not_found(&self) -> bool {
        matches!(self, GraphError::MemberNotFound { .. })
    }
}

impl From<GraphError> for ExError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::MemberNotFound { type_name, member } => {
                ExError::new(ExErrorKind::MemberNotFound)
                    .with_type_name(type_name)
                    .with_member(member)
                    .with_message("Member not found")
            }
            GraphError::TypeMismatch {
                declaring_type,
                path,
                expected,
                actual,
            } => ExError::new(ExErrorKind::TypeMismatch)
                .with_type_name(declaring_type)
                .with_path(path)
                .with_message(format!("expected '{}', found '{}'", expected, actual)),
            GraphError::InvalidOptions { reason } => ExError::new(ExErrorKind::InvalidOptions)
                .with_message(format!("Invalid options: {}", reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_context() {
        let err = ExError::new(ExErrorKind::MemberNotFound)
            .with_op("path_get")
            .with_type_name("Person")
            .with_member("nickname")
            .with_message("Member not found");

        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_MEMBER_NOT_FOUND]"));
        assert!(rendered.contains("in operation 'path_get'"));
        assert!(rendered.contains("(type: Person)"));
        assert!(rendered.contains("(member: nickname)"));
    }

    #[test]
    fn test_display_without_context_is_code_only() {
        let err = ExError::new(ExErrorKind::InvalidOptions);
        assert_eq!(err.to_string(), "[ERR_INVALID_OPTIONS]");
    }

    #[test]
    fn test_is_member_not_found() {
        let missing = GraphError::MemberNotFound {
            type_name: "Person".to_string(),
            member: "age".to_string(),
        };
        let mismatch = GraphError::TypeMismatch {
            declaring_type: "Person".to_string(),
            path: "age".to_string(),
            expected: "String".to_string(),
            actual: "u32".to_string(),
        };
        assert!(missing.is_member_not_found());
        assert!(!mismatch.is_member_not_found());
    }
}
