use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use matchstick::config::{discover_configs, load_merged_config, user_config_path};
use matchstick::{Matchstick, Mode};

#[derive(Parser)]
#[command(name = "matchstick")]
#[command(
	author,
	version,
	about = "Compile path-like patterns, test input against them and substitute tokens"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	/// Log compilation details to stderr (otherwise controlled by RUST_LOG)
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Args)]
struct PatternArgs {
	/// Pattern to compile (or a configured pattern name with --named)
	pattern: String,

	/// Treat PATTERN as the name of a pattern declared in .matchstick.toml
	#[arg(long, conflicts_with_all = ["mode", "modifiers"])]
	named: bool,

	/// Matching mode: strict, static, wildcard, template, symbolic or regexp [default: strict]
	#[arg(short, long, value_name = "MODE")]
	mode: Option<Mode>,

	/// Modifier flags: any of i (case-insensitive), g (global), m (multiline)
	#[arg(short = 'f', long, value_name = "FLAGS")]
	modifiers: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
	/// Test inputs against a pattern; exits non-zero unless every input matches
	Test {
		#[command(flatten)]
		target: PatternArgs,

		/// Strings to test
		#[arg(required = true, value_name = "INPUT")]
		inputs: Vec<String>,
	},
	/// Substitute NAME=VALUE bindings into a template or symbolic pattern
	Stick {
		#[command(flatten)]
		target: PatternArgs,

		/// Token bindings
		#[arg(value_name = "NAME=VALUE", value_parser = parse_binding)]
		bindings: Vec<(String, String)>,
	},
	/// Show how a pattern compiles
	Inspect {
		#[command(flatten)]
		target: PatternArgs,
	},
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display named patterns from every config file with source annotations
	Show,
	/// Check all config files for errors without running anything
	Validate,
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	match run(cli.command) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn init_tracing(verbose: bool) {
	let filter = if verbose {
		EnvFilter::new("matchstick=debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
	};

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

fn run(command: Commands) -> Result<ExitCode> {
	match command {
		Commands::Test { target, inputs } => handle_test(&target, &inputs),
		Commands::Stick { target, bindings } => handle_stick(&target, &bindings),
		Commands::Inspect { target } => handle_inspect(&target),
		Commands::Config { action } => match action {
			ConfigAction::Show => handle_config_show(),
			ConfigAction::Validate => handle_config_validate(),
		},
	}
}

fn parse_binding(raw: &str) -> std::result::Result<(String, String), String> {
	raw.split_once('=')
		.map(|(name, value)| (name.to_string(), value.to_string()))
		.ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))
}

fn compile_target(target: &PatternArgs) -> Result<Matchstick> {
	if target.named {
		let cwd = std::env::current_dir().context("Failed to get current directory")?;
		let config = load_merged_config(&cwd).context("Failed to load configuration")?;
		return config
			.compile(&target.pattern)
			.with_context(|| format!("Failed to resolve named pattern '{}'", target.pattern));
	}

	Matchstick::compile(
		&target.pattern,
		target.mode.unwrap_or_default(),
		target.modifiers.as_deref(),
	)
	.with_context(|| format!("Failed to compile pattern '{}'", target.pattern))
}

fn handle_test(target: &PatternArgs, inputs: &[String]) -> Result<ExitCode> {
	let matcher = compile_target(target)?;

	let mut all_matched = true;
	for input in inputs {
		let matched = matcher.test(input);
		all_matched &= matched;
		println!("{}\t{}", if matched { "match" } else { "no match" }, input);
	}

	Ok(if all_matched {
		ExitCode::SUCCESS
	} else {
		ExitCode::FAILURE
	})
}

fn handle_stick(target: &PatternArgs, bindings: &[(String, String)]) -> Result<ExitCode> {
	let matcher = compile_target(target)?;
	let output = matcher
		.stick(bindings)
		.with_context(|| format!("Failed to substitute into '{}'", matcher.pattern()))?;

	println!("{}", output);
	Ok(ExitCode::SUCCESS)
}

fn handle_inspect(target: &PatternArgs) -> Result<ExitCode> {
	let matcher = compile_target(target)?;
	let modifiers = matcher.modifiers().to_string();

	println!("pattern:    {}", matcher.pattern());
	println!("mode:       {}", matcher.mode());
	println!(
		"modifiers:  {}",
		if modifiers.is_empty() { "(none)" } else { modifiers.as_str() }
	);
	if matcher.mode().has_tokens() {
		println!("tokens:     {}", matcher.tokens().join(", "));
	}
	println!("expression: {}", matcher.regex_source());

	Ok(ExitCode::SUCCESS)
}

fn handle_config_show() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let configs = discover_configs(&cwd).context("Failed to discover config files")?;

	if configs.is_empty() {
		println!("No configuration files found.");
		return Ok(ExitCode::SUCCESS);
	}

	println!("Configuration files (in cascade order):\n");

	for loaded in &configs {
		println!("# Source: {}", loaded.path.display());
		println!("# root: {}", loaded.config.root);
		println!("# patterns: {}", loaded.config.patterns.len());
		println!();

		for def in &loaded.config.patterns {
			println!("  {}:", def.name);
			println!("    pattern: {}", def.pattern);
			println!("    mode: {}", def.mode);
			if let Some(ref modifiers) = def.modifiers {
				println!("    modifiers: {}", modifiers);
			}
			println!();
		}
	}

	if let Ok(user_path) = user_config_path() {
		println!("User config path: {}", user_path.display());
		if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate() -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	match discover_configs(&cwd) {
		Ok(configs) => {
			if configs.is_empty() {
				println!("No configuration files found.");
			} else {
				println!("All configuration files are valid:");
				for loaded in &configs {
					println!(
						"  {} ({} patterns)",
						loaded.path.display(),
						loaded.config.patterns.len()
					);
				}
			}
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {:?}", anyhow::Error::from(e));
			Ok(ExitCode::FAILURE)
		}
	}
}
