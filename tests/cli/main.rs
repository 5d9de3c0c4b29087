//! CLI integration tests for markymark.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (parse, html)
//! - Stdin/stdout handling
//! - Config discovery and flavor overrides
//! - Error handling

mod common;
mod html;
mod parse;
