use anyhow::Result;
use clap::{Parser, Subcommand};
use todoapi_core::TodoConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show default config file path
    Path,
    /// Print the loaded configuration as TOML (file values over defaults)
    Show,
}

pub fn run_config(args: ConfigArgs, config: &TodoConfig) -> Result<()> {
    match args.command {
        ConfigCommands::Path => {
            println!("{}", TodoConfig::config_path().display());
        }
        ConfigCommands::Show => {
            print!("{}", config.to_toml_string()?);
        }
    }
    Ok(())
}
