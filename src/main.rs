// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config (files, env, flags) --> Logging --> Command Dispatch
//!   Env | Which | Expand | Run | Options | Configs
//! ```

use std::process::ExitCode;

use procenv::cli::global::GlobalOptions;
use procenv::cli::{self, Command};
use procenv::cmd::config::{run_configs_command, run_options_command};
use procenv::cmd::env::{run_env_command, run_expand_command, run_which_command};
use procenv::cmd::run::run_run_command;
use procenv::config::loader::ConfigLoader;
use procenv::config::{Config, ENV_PREFIX, LOCAL_CONFIG_FILE};
use procenv::core::env::store::EnvStore;
use procenv::logging::{LogConfig, init_logging};
use tracing::debug;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let loader = build_config_loader(&cli.global);
    let loaded_files = loader.format_loaded_files();
    let config = match load_config(loader, &cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    for line in &loaded_files {
        debug!(source = %line, "loaded config");
    }

    dispatch_command(&cli, &config, &loaded_files).await
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: &Config, loaded_files: &[String]) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Options) => {
            run_options_command(config);
            Ok(0)
        }
        Some(Command::Configs) => {
            run_configs_command(loaded_files);
            Ok(0)
        }
        Some(Command::Env { json }) => {
            derive_store(config).and_then(|store| run_env_command(&store, *json).map(|()| 0))
        }
        Some(Command::Which { name }) => {
            derive_store(config).and_then(|store| run_which_command(&store, name).map(|()| 0))
        }
        Some(Command::Expand { template }) => derive_store(config).map(|store| {
            run_expand_command(&store, template);
            0
        }),
        Some(Command::Run { name, args }) => match derive_store(config) {
            Ok(store) => run_run_command(&store, name, args).await,
            Err(e) => Err(e),
        },
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader
        .add_toml_file_optional(LOCAL_CONFIG_FILE)
        .with_env_prefix(ENV_PREFIX)
}

fn load_config(loader: ConfigLoader, global: &GlobalOptions) -> procenv::error::Result<Config> {
    let mut config = loader.build()?;
    global.apply_to(&mut config);
    Ok(config)
}

fn derive_store(config: &Config) -> procenv::error::Result<EnvStore> {
    Ok(config.env.derive()?)
}
