//! Pattern compilation, matching and token substitution.
//!
//! This module handles:
//! - Parsing modes and modifier flags
//! - Escaping literal text and scanning `*`, `{name}` and `:name` placeholders
//! - Compiling a pattern into an anchored expression and testing input against it
//! - Substituting values for named tokens and scrubbing unbound ones

pub mod matcher;
pub mod mode;
pub mod modifiers;
pub mod stick;
pub mod syntax;

pub use matcher::Matchstick;
pub use mode::Mode;
pub use modifiers::Modifiers;
pub use stick::Bindings;
