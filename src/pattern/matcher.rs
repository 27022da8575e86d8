use super::syntax::{self, Segment};
use super::{Mode, Modifiers};
use crate::error::{MatchstickError, Result};
use regex::{Regex, RegexBuilder};
use tracing::{debug, trace};

/// Expression fragment every placeholder compiles to: any run of characters, non-capturing.
const CATCH_ALL: &str = "(?:.*)";

/// A compiled pattern.
///
/// Built once by [`Matchstick::compile`] and never mutated afterwards, so a
/// single value can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Matchstick {
	pattern: String,
	mode: Mode,
	modifiers: Modifiers,
	tokens: Vec<String>,
	regex: Regex,
}

impl Matchstick {
	/// Compile `pattern` in the given mode.
	///
	/// `modifiers` is a string of `i`, `g`, `m` flags. Strict mode accepts no
	/// modifiers; `None` and `Some("")` are equivalent.
	pub fn compile(pattern: &str, mode: Mode, modifiers: Option<&str>) -> Result<Self> {
		let raw_modifiers = modifiers.unwrap_or_default();
		let modifiers = Modifiers::parse(raw_modifiers)?;

		if mode == Mode::Strict && !modifiers.is_empty() {
			return Err(MatchstickError::ModifiersNotAllowed {
				modifiers: raw_modifiers.to_string(),
			});
		}

		let segments = syntax::segments(pattern, mode);
		let tokens: Vec<String> = segments
			.iter()
			.filter_map(|segment| match segment {
				Segment::Token { name, .. } => Some(name.to_string()),
				_ => None,
			})
			.collect();

		let source = match mode {
			Mode::RawRegex => pattern.to_string(),
			Mode::Strict => format!("^{}$", syntax::escape(pattern)),
			Mode::Static => format!("^{}/?$", syntax::escape(pattern)),
			Mode::Wildcard | Mode::Template | Mode::Symbolic => anchored(&segments),
		};

		let regex = RegexBuilder::new(&source)
			.case_insensitive(modifiers.case_insensitive)
			.multi_line(modifiers.multiline)
			.build()
			.map_err(|source| MatchstickError::InvalidRegex {
				pattern: pattern.to_string(),
				source,
			})?;

		debug!(
			pattern,
			%mode,
			%modifiers,
			tokens = tokens.len(),
			expression = regex.as_str(),
			"compiled pattern"
		);

		Ok(Matchstick {
			pattern: pattern.to_string(),
			mode,
			modifiers,
			tokens,
			regex,
		})
	}

	/// Compile with the mode given by name (`strict`, `static`, `wildcard`,
	/// `template`, `symbolic` or `regexp`).
	pub fn compile_str(pattern: &str, mode: &str, modifiers: Option<&str>) -> Result<Self> {
		Self::compile(pattern, mode.parse()?, modifiers)
	}

	/// Check whether `input` conforms to the pattern.
	pub fn test(&self, input: &str) -> bool {
		let matched = self.regex.is_match(input);
		trace!(pattern = %self.pattern, input, matched, "tested input");
		matched
	}

	/// The pattern exactly as it was given.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// The mode the pattern was compiled in.
	pub fn mode(&self) -> Mode {
		self.mode
	}

	/// The modifier flags applied to the compiled expression.
	pub fn modifiers(&self) -> Modifiers {
		self.modifiers
	}

	/// Token names in order of appearance. Repeated tokens appear once per use.
	/// Empty unless the mode is template or symbolic.
	pub fn tokens(&self) -> &[String] {
		&self.tokens
	}

	/// The expression the pattern compiled to.
	pub fn regex_source(&self) -> &str {
		self.regex.as_str()
	}
}

fn anchored(segments: &[Segment<'_>]) -> String {
	let mut source = String::from("^");
	for segment in segments {
		match segment {
			Segment::Literal(text) => source.push_str(&syntax::escape(text)),
			Segment::Wildcard | Segment::Token { .. } => source.push_str(CATCH_ALL),
		}
	}
	source.push('$');
	source
}
