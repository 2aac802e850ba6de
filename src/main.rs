use clap::Parser;
use anyhow::Result;
use log::LevelFilter;

use oops::{driver, output};

/// oops-demo - Builds an animal and a few circles, then prints them
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Extra arguments, accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,

    /// Output in JSON format
    #[arg(short = 'j', long, conflicts_with = "color")]
    json: bool,

    /// Colorize the text output
    #[arg(short = 'c', long, conflicts_with = "json")]
    color: bool,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if !cli.args.is_empty() {
        log::debug!("ignoring arguments: {:?}", cli.args);
    }

    let report = driver::build_report();

    if cli.json {
        output::output_json(&report)?;
    } else {
        colored::control::set_override(cli.color);
        output::output_text(&report, cli.color)?;
    }

    Ok(())
}
