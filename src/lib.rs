//! Matchstick - compile path-like patterns into matchers.
//!
//! This library provides the core functionality for matchstick, including:
//! - Six matching modes: strict, static, wildcard, template, symbolic and raw regexp
//! - Token substitution for template (`{name}`) and symbolic (`:name`) patterns
//! - Named pattern configuration files with directory cascade discovery
//!
//! # Example
//!
//! ```
//! use matchstick::{Mode, compile};
//! use std::collections::HashMap;
//!
//! let ms = compile("/project/{pid}/task/{tid}", Mode::Template, None).unwrap();
//! assert!(ms.test("/project/123/task/abc"));
//!
//! let bindings = HashMap::from([("pid", "123"), ("tid", "abc")]);
//! assert_eq!(ms.stick(&bindings).unwrap(), "/project/123/task/abc");
//! ```
//!
//! Set `RUST_LOG=matchstick=debug` when running the `matchstick` binary to see
//! each compiled expression.

pub mod config;
pub mod error;
pub mod pattern;

pub use error::{MatchstickError, Result};
pub use pattern::{Bindings, Matchstick, Mode, Modifiers};

/// Compile `pattern` in `mode` with optional `i`/`g`/`m` modifiers.
///
/// Shorthand for [`Matchstick::compile`].
pub fn compile(pattern: &str, mode: Mode, modifiers: Option<&str>) -> Result<Matchstick> {
	Matchstick::compile(pattern, mode, modifiers)
}
