//! Python language support for ctxprobe.
//!
//! This crate provides the Python-specific analysis behind the CLI:
//! - An explicit parser component ([`parser::SourceParser`]) backed by
//!   rustpython-parser
//! - The [`analyzer::Analyzer`] answering the two queries: syntax
//!   validation and enclosing-context lookup

pub mod analyzer;
pub mod parser;
pub mod types;
