//! JSON document model.
//!
//! - `node`: the [`Value`](node::Value) tree queried by compiled paths
//! - `parser`: JSON text to `Value` and back

pub mod node;
pub mod parser;
