//! Core infrastructure for ctxprobe.
//!
//! This crate provides language-agnostic infrastructure:
//! - Error types and stable output codes
//! - JSON response types for CLI output
//! - Text position utilities

pub mod error;
pub mod output;
pub mod text;
