//! Info command implementation

use clap::Args;
use std::fmt::Display;

use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use textkit_core::config::{Config, ConfigSources};
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    strict: bool,
    cipher_key_set: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            strict: config.strict,
            cipher_key_set: config.cipher_key.is_some(),
            max_input_bytes: config.input_limit(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let package = &full_info.package;
    println!(
        "{} {}",
        package.name.if_supports_color(Stream::Stdout, |t| t.bold()),
        package.version.if_supports_color(Stream::Stdout, |t| t.green())
    );
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        print_row("License", package.license);
    }
    if !package.repository.is_empty() {
        print_row(
            "Repository",
            package
                .repository
                .if_supports_color(Stream::Stdout, |t| t.cyan()),
        );
    }

    let config = &full_info.config;
    println!();
    println!(
        "{}",
        "Configuration".if_supports_color(Stream::Stdout, |t| t.bold().underline().to_string())
    );
    match config.config_file {
        Some(ref path) => print_row(
            "Config file",
            path.if_supports_color(Stream::Stdout, |t| t.cyan()),
        ),
        None => print_row(
            "Config file",
            "none loaded".if_supports_color(Stream::Stdout, |t| t.yellow()),
        ),
    }
    print_row("Log level", &config.log_level);
    if let Some(ref dir) = config.log_dir {
        print_row("Log directory", dir);
    }
    print_row("Strict mode", config.strict);
    print_row(
        "Cipher key",
        if config.cipher_key_set { "set" } else { "(not set)" },
    );
    match config.max_input_bytes {
        Some(max) => print_row("Input limit", format!("{max} bytes")),
        None => print_row(
            "Input limit",
            "disabled".if_supports_color(Stream::Stdout, |t| t.yellow()),
        ),
    }

    Ok(())
}

fn print_row(label: &str, value: impl Display) {
    println!(
        "{}: {value}",
        label.if_supports_color(Stream::Stdout, |t| t.dimmed())
    );
}
