use std::path::PathBuf;

/// Library-level structured errors for matchstick.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum MatchstickError {
	#[error("Invalid mode '{mode}': must be one of {valid}")]
	InvalidMode { mode: String, valid: String },

	#[error("Invalid modifier character '{modifier}': allowed modifiers are i, g, m (each at most once)")]
	InvalidModifier { modifier: char },

	#[error("Modifiers '{modifiers}' are not allowed in strict mode")]
	ModifiersNotAllowed { modifiers: String },

	#[error("Cannot substitute tokens into a '{mode}' pattern: only template and symbolic patterns carry tokens")]
	UnsupportedOperation { mode: String },

	#[error("Invalid regex pattern: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Pattern name '{name}' is defined more than once in {path}")]
	DuplicatePatternName { name: String, path: PathBuf },

	#[error("Named pattern '{name}' in {path} does not compile")]
	InvalidNamedPattern {
		name: String,
		path: PathBuf,
		#[source]
		source: Box<MatchstickError>,
	},

	#[error("No pattern named '{name}' in any config file")]
	PatternNotFound { name: String },

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using MatchstickError.
pub type Result<T> = std::result::Result<T, MatchstickError>;
