//! Pattern mini-language: literal escaping and placeholder scanning.

use super::Mode;
use regex::Regex;
use std::sync::LazyLock;

/// Characters that carry meaning in the expression engine and must be
/// backslash-escaped when they appear in literal pattern text.
const SPECIAL_CHARS: &[char] = &[
	'-', '[', ']', '/', '{', '}', '(', ')', '*', '+', '?', '.', '\\', '^', '$', '|',
];

/// `{name}` where name is free of `/`, `.` and braces. An empty name is allowed.
/// Also used to scrub leftover placeholders after substitution.
static TEMPLATE_TOKEN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\{([^/.{}]*)\}").expect("template token regex is valid"));

/// `:name` where name is lowercase ASCII letters and digits.
static SYMBOLIC_TOKEN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r":([a-z0-9]+)").expect("symbolic token regex is valid"));

/// Leftover `:...` placeholder text, up to the next `/` or `.`.
static SYMBOLIC_SCRUB: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r":[^/.]*").expect("symbolic scrub regex is valid"));

/// One piece of a tokenized pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
	/// Text that must match literally.
	Literal(&'a str),

	/// A `*` in wildcard mode.
	Wildcard,

	/// A named placeholder. `raw` is the text as written (`{pid}` or `:pid`).
	Token { name: &'a str, raw: &'a str },
}

/// Backslash-escape every special character in `literal`.
pub fn escape(literal: &str) -> String {
	let mut escaped = String::with_capacity(literal.len());
	for c in literal.chars() {
		if SPECIAL_CHARS.contains(&c) {
			escaped.push('\\');
		}
		escaped.push(c);
	}
	escaped
}

/// Split a pattern into literal text and placeholders according to `mode`.
///
/// Modes without placeholders yield the whole pattern as one literal.
/// Empty literals are never emitted.
pub fn segments(pattern: &str, mode: Mode) -> Vec<Segment<'_>> {
	match mode {
		Mode::Wildcard => wildcard_segments(pattern),
		Mode::Template => token_segments(pattern, &TEMPLATE_TOKEN),
		Mode::Symbolic => token_segments(pattern, &SYMBOLIC_TOKEN),
		Mode::Strict | Mode::Static | Mode::RawRegex => {
			if pattern.is_empty() {
				Vec::new()
			} else {
				vec![Segment::Literal(pattern)]
			}
		}
	}
}

fn wildcard_segments(pattern: &str) -> Vec<Segment<'_>> {
	let mut segments = Vec::new();
	for (i, part) in pattern.split('*').enumerate() {
		if i > 0 {
			segments.push(Segment::Wildcard);
		}
		if !part.is_empty() {
			segments.push(Segment::Literal(part));
		}
	}
	segments
}

fn token_segments<'a>(pattern: &'a str, token: &Regex) -> Vec<Segment<'a>> {
	let mut segments = Vec::new();
	let mut last = 0;

	for caps in token.captures_iter(pattern) {
		let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
			continue;
		};
		if whole.start() > last {
			segments.push(Segment::Literal(&pattern[last..whole.start()]));
		}
		segments.push(Segment::Token {
			name: name.as_str(),
			raw: whole.as_str(),
		});
		last = whole.end();
	}

	if last < pattern.len() {
		segments.push(Segment::Literal(&pattern[last..]));
	}
	segments
}

/// Remove placeholder-looking text left over after substitution.
///
/// Template mode removes `{...}`; symbolic mode removes `:` and everything
/// after it up to the next `/` or `.`. Other modes leave the text alone.
pub fn scrub(text: &str, mode: Mode) -> String {
	match mode {
		Mode::Template => TEMPLATE_TOKEN.replace_all(text, "").into_owned(),
		Mode::Symbolic => SYMBOLIC_SCRUB.replace_all(text, "").into_owned(),
		_ => text.to_string(),
	}
}
