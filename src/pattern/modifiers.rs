use crate::error::{MatchstickError, Result};
use std::fmt;

/// Modifier flags applied to the compiled expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
	/// `i`: literal text compares without regard to case.
	pub case_insensitive: bool,

	/// `g`: repeated-match iteration. Kept for completeness; a boolean test ignores it.
	pub global: bool,

	/// `m`: `^` and `$` match at line boundaries.
	pub multiline: bool,
}

impl Modifiers {
	/// Parse a modifier string such as `"i"` or `"gim"`.
	///
	/// Order is irrelevant. Any character outside `i`, `g`, `m`, or a flag
	/// given twice, is rejected with the offending character.
	pub fn parse(input: &str) -> Result<Self> {
		let mut modifiers = Modifiers::default();

		for c in input.chars() {
			let flag = match c {
				'i' => &mut modifiers.case_insensitive,
				'g' => &mut modifiers.global,
				'm' => &mut modifiers.multiline,
				_ => return Err(MatchstickError::InvalidModifier { modifier: c }),
			};
			if *flag {
				return Err(MatchstickError::InvalidModifier { modifier: c });
			}
			*flag = true;
		}

		Ok(modifiers)
	}

	/// True when no flag is set.
	pub fn is_empty(&self) -> bool {
		!(self.case_insensitive || self.global || self.multiline)
	}
}

impl fmt::Display for Modifiers {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.case_insensitive {
			f.write_str("i")?;
		}
		if self.global {
			f.write_str("g")?;
		}
		if self.multiline {
			f.write_str("m")?;
		}
		Ok(())
	}
}
