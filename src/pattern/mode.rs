use crate::error::MatchstickError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// How a pattern string is interpreted when compiled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Mode {
	/// Exact literal match, no modifiers allowed.
	#[default]
	Strict,

	/// Literal match tolerating one trailing `/`.
	Static,

	/// `*` matches any run of characters.
	Wildcard,

	/// `{name}` tokens match any run of characters and can be substituted.
	Template,

	/// `:name` tokens match any run of characters and can be substituted.
	Symbolic,

	/// The pattern is a regular expression used as-is, unanchored.
	RawRegex,
}

impl Mode {
	/// Every mode, in the order they are listed to users.
	pub const ALL: [Mode; 6] = [
		Mode::Strict,
		Mode::Static,
		Mode::Wildcard,
		Mode::Template,
		Mode::Symbolic,
		Mode::RawRegex,
	];

	/// The canonical name accepted by `from_str`.
	pub fn as_str(self) -> &'static str {
		match self {
			Mode::Strict => "strict",
			Mode::Static => "static",
			Mode::Wildcard => "wildcard",
			Mode::Template => "template",
			Mode::Symbolic => "symbolic",
			Mode::RawRegex => "regexp",
		}
	}

	/// Whether patterns in this mode carry named tokens.
	pub fn has_tokens(self) -> bool {
		matches!(self, Mode::Template | Mode::Symbolic)
	}

	fn valid_names() -> String {
		Mode::ALL
			.iter()
			.map(|m| m.as_str())
			.collect::<Vec<_>>()
			.join(", ")
	}
}

impl fmt::Display for Mode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Mode {
	type Err = MatchstickError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Mode::ALL
			.into_iter()
			.find(|m| m.as_str() == s)
			.ok_or_else(|| MatchstickError::InvalidMode {
				mode: s.to_string(),
				valid: Mode::valid_names(),
			})
	}
}

impl TryFrom<String> for Mode {
	type Error = MatchstickError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}
