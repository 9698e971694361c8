//! File I/O for JSON documents.
//!
//! This module loads JSON documents from disk or stdin, with transparent
//! gzip decompression.

pub mod loader;
