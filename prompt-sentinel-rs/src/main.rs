// prompt-sentinel-rs/src/main.rs
// Main Entry Point for the promptsentinel CLI
// Loads configuration, runs the validation engine and renders the verdict

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use prompt_validation::{validate_prompt, validate_prompt_comprehensive};
use std::io;
use std::path::PathBuf;

mod config_store;
mod input;
mod render;

/// PromptSentinel - Validate and secure your AI prompts
///
/// Checks prompts for safety and security before they reach a model, and
/// manages the configuration that drives those checks.
#[derive(Parser, Debug)]
#[command(name = "promptsentinel")]
#[command(author, version, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check if a prompt is safe for your use case
    ///
    /// The prompt is read from stdin when not given as an argument.
    Check {
        /// Prompt to check
        prompt: Option<String>,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the use case for validation
        #[arg(short, long)]
        use_case: Option<String>,
    },

    /// Perform comprehensive prompt validation
    ///
    /// Adds security analysis, compliance checks and performance estimates.
    Validate {
        /// Prompt to validate
        prompt: Option<String>,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Manage PromptSentinel configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Initialize a new configuration file with default settings
    Init,
    /// Show current configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Set a configuration value
    Set {
        /// One of use_case, safety_level, max_length, min_length, require_approval
        key: String,
        value: String,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    run(cli.command)
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Check {
            prompt,
            config,
            use_case,
        } => {
            let prompt = input::resolve_prompt(prompt, io::stdin().lock())?;
            let mut config =
                config_store::load_config(&config_store::config_path(config.as_deref()))
                    .context("failed to load config")?;
            if let Some(use_case) = use_case.filter(|u| !u.is_empty()) {
                config.use_case = use_case;
            }

            let result = validate_prompt(&prompt, &config).context("validation failed")?;
            print!("{}", render::render_result(&result));
        }
        Commands::Validate {
            prompt,
            config,
            format,
        } => {
            let prompt = input::resolve_prompt(prompt, io::stdin().lock())?;
            let config = config_store::load_config(&config_store::config_path(config.as_deref()))
                .context("failed to load config")?;

            let result =
                validate_prompt_comprehensive(&prompt, &config).context("validation failed")?;
            match format {
                OutputFormat::Json => println!("{}", render::render_json(&result)?),
                OutputFormat::Text => print!("{}", render::render_detailed(&result)),
            }
        }
        Commands::Config { command } => run_config(command)?,
    }
    Ok(())
}

fn run_config(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Init => {
            let path = config_store::default_config_path();
            config_store::init_config(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
        ConfigCommands::Show { config } => {
            let config = config_store::load_config(&config_store::config_path(config.as_deref()))
                .context("failed to load config")?;
            print!("{}", render::render_config(&config));
        }
        ConfigCommands::Set { key, value, config } => {
            let path = config_store::config_path(config.as_deref());
            let mut loaded = config_store::load_config(&path).context("failed to load config")?;
            loaded
                .set_value(&key, &value)
                .context("failed to set config value")?;
            config_store::save_config(&loaded, &path).context("failed to save config")?;
            println!("Set {} = {}", key, value);
        }
    }
    Ok(())
}
