//! textkit CLI
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use textkit::commands::codec::CipherMode;
use textkit::{Cli, Commands, commands};
use textkit_core::config::ConfigLoader;
use textkit_core::transform::Transform;
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // arg_required_else_help ensures we have --version-only or a subcommand
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cwd = camino::Utf8PathBuf::try_from(cwd).map_err(|e| {
        anyhow::anyhow!(
            "current directory is not valid UTF-8: {}",
            e.into_path_buf().display()
        )
    })?;
    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(ref config_path) = cli.config {
        let config_path = camino::Utf8PathBuf::try_from(config_path.clone()).map_err(|e| {
            anyhow::anyhow!(
                "config path is not valid UTF-8: {}",
                e.into_path_buf().display()
            )
        })?;
        loader = loader.with_file(&config_path);
    }
    let (config, config_sources) = loader.load().context("failed to load configuration")?;

    let obs_config = observability::ObservabilityConfig::from_env_with_overrides(
        config
            .log_dir
            .as_ref()
            .map(|dir| dir.as_std_path().to_path_buf()),
    );
    let env_filter = observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str());
    let _guard = observability::init_observability(&obs_config, env_filter)
        .context("failed to initialize logging/tracing")?;

    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        color = ?cli.color,
        chdir = ?cli.chdir,
        "CLI initialized"
    );

    let max_input = config.input_limit();
    let json = cli.json;
    let key = config.cipher_key.as_deref();

    let result = match command {
        Commands::Hash(args) => commands::codec::cmd_hash(args, json, max_input),
        Commands::Encrypt(args) => commands::codec::cmd_cipher(
            CipherMode::Encrypt,
            args,
            json,
            key,
            config.strict,
            max_input,
        ),
        Commands::Decrypt(args) => commands::codec::cmd_cipher(
            CipherMode::Decrypt,
            args,
            json,
            key,
            config.strict,
            max_input,
        ),
        Commands::UrlEncode(args) => commands::codec::cmd_url_encode(args, json, max_input),
        Commands::UrlDecode(args) => commands::codec::cmd_url_decode(args, json, max_input),
        Commands::PreprocessUrl(args) => {
            commands::codec::cmd_preprocess_url(args, json, max_input)
        }
        Commands::FormatSize(args) => commands::format::cmd_format_size(args, json),
        Commands::FormatPhone(args) => {
            commands::format::cmd_format_phone(args, json, config.strict, max_input)
        }
        Commands::SortKeys(args) => commands::format::cmd_sort_keys(args, json, max_input),
        Commands::Reverse(args) => {
            commands::transform::cmd_transform(Transform::Reverse, args, json, max_input)
        }
        Commands::UpperFirst(args) => {
            commands::transform::cmd_transform(Transform::UpperFirst, args, json, max_input)
        }
        Commands::LowerFirst(args) => {
            commands::transform::cmd_transform(Transform::LowerFirst, args, json, max_input)
        }
        Commands::ToFullWidth(args) => {
            commands::transform::cmd_transform(Transform::ToFullWidth, args, json, max_input)
        }
        Commands::ToHalfWidth(args) => {
            commands::transform::cmd_transform(Transform::ToHalfWidth, args, json, max_input)
        }
        Commands::Classify(args) => commands::classify::cmd_classify(args, json, max_input),
        Commands::Parse(args) => commands::parse::cmd_parse(args, json, max_input),
        Commands::Info(args) => commands::info::cmd_info(args, json, &config, &config_sources),
        #[cfg(feature = "mcp")]
        Commands::Serve(args) => {
            let rt = tokio::runtime::Runtime::new()
                .context("failed to create async runtime for MCP server")?;
            rt.block_on(commands::serve::cmd_serve(args, config.clone()))
        }
    };
    if let Err(ref err) = result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}
