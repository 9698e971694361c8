//! Error types for path compilation and query evaluation.

use crate::document::node::ValueKind;
use std::fmt;

/// What went wrong while compiling a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileErrorKind {
    /// The path string is empty.
    EmptySource,
    /// The path does not start with `$`.
    MissingRoot,
    /// Input ended while more was expected.
    UnexpectedEnd { expected: &'static str },
    /// A character that cannot appear here.
    UnexpectedCharacter { expected: &'static str },
    /// A bare or function name with no characters.
    EmptyName,
    /// A numeric index that is not a valid 64-bit integer.
    BadNumber,
    /// A quoted name with no closing quote.
    UnterminatedQuote { quote: char },
    /// A malformed escape sequence inside a quoted name.
    BadEscape { message: &'static str },
}

impl fmt::Display for CompileErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileErrorKind::EmptySource => write!(f, "path is empty"),
            CompileErrorKind::MissingRoot => write!(f, "path must start with '$'"),
            CompileErrorKind::UnexpectedEnd { expected } => {
                write!(f, "unexpected end of path, expected {}", expected)
            }
            CompileErrorKind::UnexpectedCharacter { expected } => {
                write!(f, "unexpected character, expected {}", expected)
            }
            CompileErrorKind::EmptyName => write!(f, "empty name"),
            CompileErrorKind::BadNumber => write!(f, "index is not a valid integer"),
            CompileErrorKind::UnterminatedQuote { quote } => {
                write!(f, "quoted name is not closed by {}", quote)
            }
            CompileErrorKind::BadEscape { message } => write!(f, "bad escape sequence: {}", message),
        }
    }
}

/// A syntax error in a path expression.
///
/// `position` is a character (not byte) offset into the path; `excerpt` is
/// the remainder of the path starting there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileError {
    pub kind: CompileErrorKind,
    pub position: usize,
    pub excerpt: String,
}

impl CompileError {
    pub(crate) fn at(kind: CompileErrorKind, src: &[char], position: usize) -> Self {
        let excerpt = src.get(position..).unwrap_or_default().iter().collect();
        Self {
            kind,
            position,
            excerpt,
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.excerpt.is_empty() {
            write!(f, "{} at position {}", self.kind, self.position)
        } else {
            write!(
                f,
                "{} at position {}, near '{}'",
                self.kind, self.position, self.excerpt
            )
        }
    }
}

impl std::error::Error for CompileError {}

/// A failure while walking a value with a compiled path.
///
/// Every variant records the 0-based index of the step that failed.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    /// The current value is `null`.
    NullReference { step: usize },
    /// The object has no such key.
    MissingProperty { step: usize, name: String },
    /// The selector cannot be applied to this kind of value.
    TypeMismatch {
        step: usize,
        found: ValueKind,
        selector: String,
    },
    /// The array index (or `first`/`last` on an empty array) is out of bounds.
    IndexOutOfRange {
        step: usize,
        length: usize,
        selector: String,
    },
    /// An array function that does not exist.
    UndefinedFunction { step: usize, name: String },
}

impl QueryError {
    /// Index of the step at which evaluation stopped.
    pub fn step(&self) -> usize {
        match self {
            QueryError::NullReference { step }
            | QueryError::MissingProperty { step, .. }
            | QueryError::TypeMismatch { step, .. }
            | QueryError::IndexOutOfRange { step, .. }
            | QueryError::UndefinedFunction { step, .. } => *step,
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::NullReference { step } => {
                write!(f, "cannot index into null at step {}", step)
            }
            QueryError::MissingProperty { step, name } => write!(
                f,
                "property '{}' does not exist in the object at step {}",
                name, step
            ),
            QueryError::TypeMismatch {
                step,
                found,
                selector,
            } => write!(
                f,
                "{} cannot be accessed by {} at step {}",
                found, selector, step
            ),
            QueryError::IndexOutOfRange {
                step,
                length,
                selector,
            } => write!(
                f,
                "index out of range at step {}: length={}, {}",
                step, length, selector
            ),
            QueryError::UndefinedFunction { step, name } => {
                write!(f, "undefined function '{}' at step {}", name, step)
            }
        }
    }
}

impl std::error::Error for QueryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_error_excerpt_starts_at_position() {
        let src: Vec<char> = "$.a]".chars().collect();
        let err = CompileError::at(
            CompileErrorKind::UnexpectedCharacter {
                expected: "'.' or '['",
            },
            &src,
            3,
        );
        assert_eq!(err.excerpt, "]");
        assert_eq!(
            err.to_string(),
            "unexpected character, expected '.' or '[' at position 3, near ']'"
        );
    }

    #[test]
    fn test_compile_error_past_end_has_empty_excerpt() {
        let src: Vec<char> = "$.".chars().collect();
        let err = CompileError::at(CompileErrorKind::EmptyName, &src, 5);
        assert!(err.excerpt.is_empty());
    }

    #[test]
    fn test_query_error_step() {
        let err = QueryError::MissingProperty {
            step: 2,
            name: "c".to_string(),
        };
        assert_eq!(err.step(), 2);
        assert!(err.to_string().contains("'c'"));
    }
}
