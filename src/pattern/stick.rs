use super::Mode;
use super::matcher::Matchstick;
use super::syntax::{self, Segment};
use crate::error::{MatchstickError, Result};
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use tracing::trace;

/// A source of token values for [`Matchstick::stick`].
pub trait Bindings {
	/// The value bound to `name`, if any.
	fn value(&self, name: &str) -> Option<&str>;
}

impl<K, V, S> Bindings for HashMap<K, V, S>
where
	K: Borrow<str> + Hash + Eq,
	V: AsRef<str>,
	S: BuildHasher,
{
	fn value(&self, name: &str) -> Option<&str> {
		self.get(name).map(|v| v.as_ref())
	}
}

impl<K, V> Bindings for BTreeMap<K, V>
where
	K: Borrow<str> + Ord,
	V: AsRef<str>,
{
	fn value(&self, name: &str) -> Option<&str> {
		self.get(name).map(|v| v.as_ref())
	}
}

impl<K, V> Bindings for [(K, V)]
where
	K: AsRef<str>,
	V: AsRef<str>,
{
	fn value(&self, name: &str) -> Option<&str> {
		self.iter()
			.find(|(k, _)| k.as_ref() == name)
			.map(|(_, v)| v.as_ref())
	}
}

impl<K, V> Bindings for Vec<(K, V)>
where
	K: AsRef<str>,
	V: AsRef<str>,
{
	fn value(&self, name: &str) -> Option<&str> {
		self.as_slice().value(name)
	}
}

impl Matchstick {
	/// Substitute bound values for the pattern's tokens.
	///
	/// Works from the pattern as written, not the compiled expression. Tokens
	/// without a binding are scrubbed from the output, and bindings for names
	/// the pattern does not use are ignored. Values are inserted verbatim and
	/// never rescanned, so a value that looks like a placeholder stays as-is.
	/// The result is not checked against [`Matchstick::test`].
	///
	/// Fails with `UnsupportedOperation` unless the mode is template or symbolic.
	pub fn stick<B: Bindings + ?Sized>(&self, bindings: &B) -> Result<String> {
		let mode = self.mode();
		if !mode.has_tokens() {
			return Err(MatchstickError::UnsupportedOperation {
				mode: mode.to_string(),
			});
		}

		let segments = syntax::segments(self.pattern(), mode);
		let mut bound: Vec<Option<&str>> = vec![None; segments.len()];

		for token in self.tokens() {
			let Some(value) = bindings.value(token) else {
				continue;
			};

			let open: Vec<usize> = segments
				.iter()
				.enumerate()
				.filter(|(i, segment)| {
					bound[*i].is_none()
						&& matches!(segment, Segment::Token { name, .. } if *name == token.as_str())
				})
				.map(|(i, _)| i)
				.collect();

			// Known inconsistency kept from the pattern language's history: a
			// template token entry fills only the first open `{name}`, while a
			// symbolic token entry fills every `:name` at once.
			match mode {
				Mode::Template => {
					if let Some(&i) = open.first() {
						bound[i] = Some(value);
					}
				}
				_ => {
					for i in open {
						bound[i] = Some(value);
					}
				}
			}
		}

		let mut output = String::with_capacity(self.pattern().len());
		let mut pattern_text = String::new();

		for (segment, value) in segments.iter().zip(&bound) {
			match (segment, value) {
				(_, Some(value)) => {
					output.push_str(&syntax::scrub(&pattern_text, mode));
					pattern_text.clear();
					output.push_str(value);
				}
				(Segment::Literal(text), None) => pattern_text.push_str(text),
				(Segment::Token { raw, .. }, None) => pattern_text.push_str(raw),
				(Segment::Wildcard, None) => pattern_text.push('*'),
			}
		}
		output.push_str(&syntax::scrub(&pattern_text, mode));

		trace!(pattern = %self.pattern(), output = %output, "substituted tokens");
		Ok(output)
	}

	/// Alias for [`Matchstick::stick`].
	pub fn substitute<B: Bindings + ?Sized>(&self, bindings: &B) -> Result<String> {
		self.stick(bindings)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn template(pattern: &str) -> Matchstick {
		Matchstick::compile(pattern, Mode::Template, None).unwrap()
	}

	fn symbolic(pattern: &str) -> Matchstick {
		Matchstick::compile(pattern, Mode::Symbolic, None).unwrap()
	}

	#[test]
	fn test_template_simple_replacement() {
		let ms = template("/project/{pid}/task/{tid}");
		let bindings = HashMap::from([("pid", "123"), ("tid", "abc")]);
		assert_eq!(ms.stick(&bindings).unwrap(), "/project/123/task/abc");
	}

	#[test]
	fn test_template_unused_tokens_scrubbed() {
		let ms = template("/project/{pid}/task/{tid}/action/{aid}");
		let bindings = HashMap::from([("pid", "123"), ("tid", "abc")]);
		assert_eq!(ms.stick(&bindings).unwrap(), "/project/123/task/abc/action/");
	}

	#[test]
	fn test_symbolic_simple_replacement() {
		let ms = symbolic("/project/:pid/task/:tid");
		let bindings = HashMap::from([("pid", "123"), ("tid", "abc")]);
		assert_eq!(ms.stick(&bindings).unwrap(), "/project/123/task/abc");
	}

	#[test]
	fn test_symbolic_unused_tokens_scrubbed() {
		let ms = symbolic("/project/:pid/task/:tid/action/:aid");
		let bindings = HashMap::from([("pid", "123"), ("tid", "abc")]);
		assert_eq!(ms.stick(&bindings).unwrap(), "/project/123/task/abc/action/");
	}

	#[test]
	fn test_template_repeated_token() {
		let ms = template("/{id}/copy/{id}");
		let bindings = HashMap::from([("id", "7")]);
		assert_eq!(ms.stick(&bindings).unwrap(), "/7/copy/7");
	}

	#[test]
	fn test_symbolic_repeated_token() {
		let ms = symbolic("/:id/copy/:id");
		let bindings = HashMap::from([("id", "7")]);
		assert_eq!(ms.stick(&bindings).unwrap(), "/7/copy/7");
	}

	#[test]
	fn test_symbolic_prefix_names() {
		let ms = symbolic("/:p/:pid");
		let bindings = HashMap::from([("p", "1"), ("pid", "2")]);
		assert_eq!(ms.stick(&bindings).unwrap(), "/1/2");
	}

	#[test]
	fn test_unknown_binding_ignored() {
		let ms = template("/a/{b}");
		let bindings = HashMap::from([("b", "x"), ("zzz", "ignored")]);
		assert_eq!(ms.stick(&bindings).unwrap(), "/a/x");
	}

	#[test]
	fn test_value_is_not_rescanned() {
		let ms = template("/{a}/{b}");
		let bindings = HashMap::from([("a", "{b}")]);
		assert_eq!(ms.stick(&bindings).unwrap(), "/{b}/");

		let ms = symbolic("/:a/:b");
		let bindings = HashMap::from([("a", ":b"), ("b", "x")]);
		assert_eq!(ms.stick(&bindings).unwrap(), "/:b/x");
	}

	#[test]
	fn test_symbolic_scrub_runs_to_separator() {
		let ms = symbolic("/files/:name-Draft.txt");
		let empty: HashMap<String, String> = HashMap::new();
		assert_eq!(ms.stick(&empty).unwrap(), "/files/.txt");
	}

	#[test]
	fn test_no_tokens_in_pattern() {
		let ms = template("/plain/path");
		let empty: BTreeMap<&str, &str> = BTreeMap::new();
		assert_eq!(ms.stick(&empty).unwrap(), "/plain/path");
	}

	#[test]
	fn test_slice_bindings() {
		let ms = symbolic("/user/:uid");
		let bindings = [("uid", "42")];
		assert_eq!(ms.stick(&bindings[..]).unwrap(), "/user/42");
	}

	#[test]
	fn test_owned_string_bindings() {
		let ms = template("/user/{uid}");
		let mut bindings: HashMap<String, String> = HashMap::new();
		bindings.insert("uid".to_string(), "42".to_string());
		assert_eq!(ms.substitute(&bindings).unwrap(), "/user/42");
	}

	#[test]
	fn test_unsupported_modes() {
		let bindings = HashMap::from([("a", "b")]);
		for mode in [Mode::Strict, Mode::Static, Mode::Wildcard, Mode::RawRegex] {
			let ms = Matchstick::compile("/path", mode, None).unwrap();
			match ms.stick(&bindings).unwrap_err() {
				MatchstickError::UnsupportedOperation { mode: name } => {
					assert_eq!(name, mode.to_string());
				}
				_ => panic!("Expected UnsupportedOperation error"),
			}
		}
	}

	#[test]
	fn test_stick_is_repeatable() {
		let ms = template("/project/{pid}");
		let bindings = HashMap::from([("pid", "9")]);
		let first = ms.stick(&bindings).unwrap();
		let second = ms.stick(&bindings).unwrap();
		assert_eq!(first, second);
	}
}
