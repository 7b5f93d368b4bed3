//! rowdrag - Entry Point

use clap::Parser;
use rowdrag::config::CliOverrides;
use std::path::PathBuf;
use tracing::info;

/// rowdrag - reorder a list by dragging rows with the mouse
#[derive(Parser, Debug)]
#[command(name = "rowdrag")]
#[command(version)]
#[command(about = "Terminal list you reorder by dragging each row's @ handle")]
pub struct Args {
    /// Number of rows to generate
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub rows: Option<u32>,

    /// Height of each row in lines
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub row_height: Option<u16>,

    /// Seed for row colors
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            rows: self.rows,
            row_height: self.row_height,
            seed: self.seed,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = rowdrag::config::load_config_with_precedence(args.config.clone())?;
        let merged = rowdrag::config::merge_config(config_file);
        let with_env = rowdrag::config::apply_env_overrides(merged);
        rowdrag::config::apply_cli_overrides(with_env, args.overrides())
    };
    config.validate()?;

    rowdrag::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    rowdrag::view::run(&config)?;

    Ok(())
}
