use crate::config::parser::parse_config_file;
use crate::config::types::{LoadedConfig, MergedConfig, PatternWithSource};
use crate::error::{MatchstickError, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in each directory of the cascade.
pub const CONFIG_FILE_NAME: &str = ".matchstick.toml";

/// Environment variable that, if truthy, skips the user config lookup.
pub const NO_USER_CONFIG_ENV_VAR: &str = "MATCHSTICK_NO_USER_CONFIG";

/// Discover and load all config files in the cascade.
///
/// The cascade order is:
/// 1. Start from `start_dir` and look for `.matchstick.toml`
/// 2. If found and `root = true`, stop walking up
/// 3. Otherwise, continue up the directory tree
/// 4. Finally, check ~/.matchstick.toml (unless disabled or already loaded)
///
/// Returns configs in cascade order (most specific first).
pub fn discover_configs(start_dir: &Path) -> Result<Vec<LoadedConfig>> {
	let mut configs = Vec::new();
	let mut current_dir = Some(start_dir);

	while let Some(dir) = current_dir {
		let config_path = dir.join(CONFIG_FILE_NAME);

		if config_path.exists() {
			let config = parse_config_file(&config_path)?;
			debug!(path = %config_path.display(), patterns = config.patterns.len(), "loaded config");

			let root = config.root;
			configs.push(LoadedConfig {
				config,
				path: config_path,
			});

			if root {
				break;
			}
		}

		current_dir = dir.parent();
	}

	if let Some(user_config) = load_user_config(&configs)? {
		configs.push(user_config);
	}

	Ok(configs)
}

/// Load the user's ~/.matchstick.toml if it exists, isn't disabled and wasn't
/// already found by walking up the tree.
fn load_user_config(existing_configs: &[LoadedConfig]) -> Result<Option<LoadedConfig>> {
	if is_env_truthy(NO_USER_CONFIG_ENV_VAR) {
		return Ok(None);
	}

	let user_config_path = user_config_path()?;

	if !user_config_path.exists() || existing_configs.iter().any(|c| c.path == user_config_path) {
		return Ok(None);
	}

	let config = parse_config_file(&user_config_path)?;
	Ok(Some(LoadedConfig {
		config,
		path: user_config_path,
	}))
}

/// Check if an environment variable is set to a truthy value.
fn is_env_truthy(var_name: &str) -> bool {
	match std::env::var(var_name) {
		Ok(value) => {
			let lower = value.to_lowercase();
			!value.is_empty() && lower != "0" && lower != "false" && lower != "no"
		}
		Err(_) => false,
	}
}

/// Merge multiple configs into a single effective config.
///
/// Patterns are collected in cascade order. When a name is declared in more
/// than one file, the most specific declaration wins.
pub fn merge_configs(configs: &[LoadedConfig]) -> MergedConfig {
	let mut merged = MergedConfig::default();
	let mut seen = HashSet::new();

	for loaded in configs {
		for def in &loaded.config.patterns {
			if !seen.insert(def.name.clone()) {
				debug!(name = %def.name, path = %loaded.path.display(), "pattern shadowed");
				continue;
			}
			merged.patterns.push(PatternWithSource {
				pattern: def.clone(),
				source: loaded.path.clone(),
			});
		}
	}

	merged
}

/// Convenience function to discover, load, and merge configs from a directory.
pub fn load_merged_config(start_dir: &Path) -> Result<MergedConfig> {
	let configs = discover_configs(start_dir)?;
	Ok(merge_configs(&configs))
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(MatchstickError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(CONFIG_FILE_NAME))
}
