//! Single-result JSONPath dialect: compiler and evaluator.
//!
//! A path is compiled once into a [`CompiledPath`] and can then be evaluated
//! any number of times, from any number of threads, against decoded
//! [`Value`](crate::document::node::Value) trees. Every query yields exactly
//! one value or an error.
//!
//! # Supported Syntax
//!
//! - `$` - Root value
//! - `.name` - Named property access (ASCII letters, digits, non-ASCII)
//! - `['name']` / `["name"]` - Quoted property name, with escapes
//! - `[index]` - Array index (negative indices count from the end)
//! - `.(first)`, `.(last)`, `.(length)` - Array functions
//!
//! Spaces are allowed around `$` and `.`, and inside brackets and
//! parentheses.
//!
//! # Examples
//!
//! ```
//! use jsonpick::document::parser::parse_json;
//! use jsonpick::jsonpath::CompiledPath;
//!
//! let doc = parse_json(r#"{"users":[{"name":"Alice"},{"name":"Bob"}]}"#).unwrap();
//!
//! let last = CompiledPath::compile("$.users.(last).name").unwrap();
//! assert_eq!(last.query_as_string_or_default(&doc), "Bob");
//!
//! let count = CompiledPath::compile("$ . users . (length)").unwrap();
//! assert_eq!(count.query_as_number_or_default(&doc), 2.0);
//! ```

pub mod ast;
pub mod compiler;
pub mod error;
pub mod evaluator;
pub mod scanner;

pub use ast::{CompiledPath, Selector};
pub use compiler::Compiler;
pub use error::{CompileError, CompileErrorKind, QueryError};
pub use evaluator::Evaluator;
