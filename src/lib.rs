//! jsonpick - pick exactly one value out of a JSON document.
//!
//! Paths use a small JSONPath dialect (`$.a[0]['b'].(length)`) and are
//! compiled once into an immutable [`CompiledPath`](jsonpath::CompiledPath)
//! that can be evaluated against any number of documents.
//!
//! - `document`: the decoded JSON value tree
//! - `jsonpath`: path compiler, evaluator and lenient accessors
//! - `file`: loading documents from disk or stdin
//! - `config`: command line tool preferences

pub mod config;
pub mod document;
pub mod file;
pub mod jsonpath;
