use crate::error::{MatchstickError, Result};
use crate::pattern::{Matchstick, Mode};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Top-level configuration from a `.matchstick.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// If true, stop walking up the directory tree after this file.
	#[serde(default)]
	pub root: bool,

	/// Named patterns declared in this file.
	#[serde(default)]
	pub patterns: Vec<PatternDef>,
}

/// A named pattern declaration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PatternDef {
	/// Name used to refer to the pattern from the command line.
	pub name: String,

	/// The pattern text.
	pub pattern: String,

	/// Compilation mode. Defaults to strict.
	#[serde(default)]
	pub mode: Mode,

	/// Modifier flags (`i`, `g`, `m`).
	pub modifiers: Option<String>,
}

impl PatternDef {
	/// Compile this declaration.
	pub fn compile(&self) -> Result<Matchstick> {
		Matchstick::compile(&self.pattern, self.mode, self.modifiers.as_deref())
	}
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

/// Merged configuration from multiple config files in the cascade.
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
	/// Patterns in cascade order; a name appears once, from its most specific file.
	pub patterns: Vec<PatternWithSource>,
}

/// A pattern with its source config path for debugging/display.
#[derive(Debug, Clone)]
pub struct PatternWithSource {
	/// The pattern declaration itself.
	pub pattern: PatternDef,

	/// The config file this pattern came from.
	pub source: PathBuf,
}

impl MergedConfig {
	/// Look up a pattern declaration by name.
	pub fn find(&self, name: &str) -> Option<&PatternWithSource> {
		self.patterns.iter().find(|p| p.pattern.name == name)
	}

	/// Compile the pattern declared under `name`.
	pub fn compile(&self, name: &str) -> Result<Matchstick> {
		let found = self
			.find(name)
			.ok_or_else(|| MatchstickError::PatternNotFound {
				name: name.to_string(),
			})?;

		found
			.pattern
			.compile()
			.map_err(|source| MatchstickError::InvalidNamedPattern {
				name: name.to_string(),
				path: found.source.clone(),
				source: Box::new(source),
			})
	}
}

impl Config {
	/// Validate that names are unique and every pattern compiles.
	pub fn validate(&self, path: &Path) -> Result<()> {
		let mut seen = HashSet::new();

		for def in &self.patterns {
			if !seen.insert(def.name.as_str()) {
				return Err(MatchstickError::DuplicatePatternName {
					name: def.name.clone(),
					path: path.to_path_buf(),
				});
			}

			def.compile()
				.map_err(|source| MatchstickError::InvalidNamedPattern {
					name: def.name.clone(),
					path: path.to_path_buf(),
					source: Box::new(source),
				})?;
		}

		Ok(())
	}
}
