mod generate;

pub use generate::cmd_generate;

use crate::api::GenerateOptions;
use crate::cli::Cli;
use crate::config::Config;
use crate::fs::FileSystem;
use crate::style;
use std::path::Path;

/// Shared context for command execution: options from config merged with CLI overrides.
pub struct CommandContext {
    pub options: GenerateOptions,
}

impl CommandContext {
    /// Load `.ifacemap.toml` from `dir` and apply the command-line overrides.
    /// A broken config file is reported and replaced by defaults.
    pub fn new(cli: &Cli, dir: &Path, fs: &dyn FileSystem) -> Self {
        let config = Config::load(dir, fs).unwrap_or_else(|e| {
            style::warning(&format!("Failed to load config: {}. Using defaults.", e));
            Config::default()
        });

        let mut options = GenerateOptions::from_config(&config);
        if let Some(input) = &cli.input {
            options.input = input.clone();
        }
        if let Some(output_dir) = &cli.output_dir {
            options.output_dir = output_dir.clone();
        }
        options.focus = cli.focus.clone();
        options.render = !cli.no_render;

        Self { options }
    }
}
