use matchstick::{MatchstickError, Mode, compile};
use std::collections::HashMap;

// ============================================================================
// Matching
// ============================================================================

#[test]
fn test_strict_matches_itself() {
	for pattern in ["/path", "", "/a.b/c+d", "/x/{y}/:z/*", "^(odd)$|[chars]?\\"] {
		let ms = compile(pattern, Mode::Strict, None).unwrap();
		assert!(ms.test(pattern), "strict pattern {pattern:?} should match itself");
	}
}

#[test]
fn test_strict_rejects_suffix() {
	let ms = compile("/path", Mode::Strict, None).unwrap();
	assert!(!ms.test("/path/"));
	assert!(!ms.test("/path2"));
}

#[test]
fn test_static_trailing_slash() {
	let ms = compile("/path", Mode::Static, None).unwrap();
	assert!(ms.test("/path/"));
	assert!(ms.test("/path"));
}

#[test]
fn test_static_case_insensitive() {
	let ms = compile("/path", Mode::Static, Some("i")).unwrap();
	assert!(ms.test("/PATH"));
}

#[test]
fn test_wildcard() {
	let ms = compile("/path/*/", Mode::Wildcard, None).unwrap();
	assert!(ms.test("/path/something/"));
	assert!(!ms.test("/path/something"));
}

#[test]
fn test_template_match() {
	let ms = compile("/project/{pid}/task/{tid}", Mode::Template, None).unwrap();
	assert!(ms.test("/project/123/task/abc"));
}

#[test]
fn test_raw_regex() {
	let ms = compile("^/path/$", Mode::RawRegex, None).unwrap();
	assert!(ms.test("/path/"));
}

// ============================================================================
// Substitution
// ============================================================================

#[test]
fn test_template_round_trip() {
	let ms = compile("/project/{pid}/task/{tid}", Mode::Template, None).unwrap();
	let bindings = HashMap::from([("pid", "123"), ("tid", "abc")]);
	let output = ms.stick(&bindings).unwrap();

	assert_eq!(output, "/project/123/task/abc");
	assert!(ms.test(&output));
}

#[test]
fn test_template_partial_binding() {
	let ms = compile("/project/{pid}/task/{tid}/action/{aid}", Mode::Template, None).unwrap();
	let bindings = HashMap::from([("pid", "123"), ("tid", "abc")]);
	assert_eq!(ms.stick(&bindings).unwrap(), "/project/123/task/abc/action/");
}

#[test]
fn test_symbolic_round_trip() {
	let ms = compile("/project/:pid/task/:tid", Mode::Symbolic, None).unwrap();
	let bindings = HashMap::from([("pid", "123"), ("tid", "abc")]);
	let output = ms.stick(&bindings).unwrap();

	assert_eq!(output, "/project/123/task/abc");
	assert!(ms.test(&output));
}

#[test]
fn test_symbolic_partial_binding() {
	let ms = compile("/project/:pid/task/:tid/action/:aid", Mode::Symbolic, None).unwrap();
	let bindings = HashMap::from([("pid", "123"), ("tid", "abc")]);
	assert_eq!(ms.stick(&bindings).unwrap(), "/project/123/task/abc/action/");
}

#[test]
fn test_operations_are_repeatable() {
	let ms = compile("/project/:pid", Mode::Symbolic, Some("i")).unwrap();
	let bindings = HashMap::from([("pid", "1")]);

	for _ in 0..3 {
		assert!(ms.test("/PROJECT/1"));
		assert_eq!(ms.stick(&bindings).unwrap(), "/project/1");
	}
}

#[test]
fn test_compiled_matcher_is_shareable() {
	let ms = compile("/shared/*", Mode::Wildcard, None).unwrap();
	std::thread::scope(|s| {
		for i in 0..4 {
			let ms = &ms;
			s.spawn(move || assert!(ms.test(&format!("/shared/{i}"))));
		}
	});
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_strict_modifiers_not_allowed() {
	assert!(matches!(
		compile("/x", Mode::Strict, Some("i")).unwrap_err(),
		MatchstickError::ModifiersNotAllowed { .. }
	));
}

#[test]
fn test_invalid_modifier() {
	assert!(matches!(
		compile("/x", Mode::Static, Some("iz")).unwrap_err(),
		MatchstickError::InvalidModifier { modifier: 'z' }
	));
}

#[test]
fn test_invalid_mode_name() {
	let err = "regex".parse::<Mode>().unwrap_err();
	assert!(matches!(err, MatchstickError::InvalidMode { .. }));
	assert!(err.to_string().contains("strict, static, wildcard, template, symbolic, regexp"));
}

#[test]
fn test_substitute_unsupported_for_static() {
	let ms = compile("/x", Mode::Static, None).unwrap();
	let bindings: HashMap<&str, &str> = HashMap::new();
	assert!(matches!(
		ms.substitute(&bindings).unwrap_err(),
		MatchstickError::UnsupportedOperation { .. }
	));
}
