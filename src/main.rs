use std::env;
use std::process::ExitCode;

use anyhow::Context;
use ccsv2sql::{Ccsv2SqlError, DumpConfig, convert, signature};
use clap::{ArgAction, Parser};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const INFO: &str = "
ccsv2sql
Utility to convert a CSV file to a SQL dump.

Copyright 2015 Sam Saint-Pettersen.
Licensed under the MIT/X11 License.

Use -h switch for usage information.
";

#[derive(Parser, Debug)]
#[command(
    name = "ccsv2sql",
    about = "Utility to convert a CSV file to a SQL dump.",
    disable_version_flag = true
)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    file: Option<String>,

    #[arg(short, long, value_name = "OUT")]
    out: Option<String>,

    /// Single ASCII field delimiter
    #[arg(short, long, value_name = "SEPARATOR", value_parser = parse_separator)]
    separator: Option<u8>,

    #[arg(short, long, value_name = "DB")]
    db: Option<String>,

    #[arg(short = 'n', long = "no-comments", action = ArgAction::SetFalse)]
    comments: bool,

    #[arg(short = 'l', long)]
    verbose: bool,

    #[arg(short = 'v', long)]
    version: bool,

    #[arg(short, long)]
    info: bool,
}

fn parse_separator(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("separator must be a single ASCII character, got {:?}", s)),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "ccsv2sql=debug" } else { "ccsv2sql=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(config: &DumpConfig) -> anyhow::Result<()> {
    let summary = convert(config).with_context(|| format!("failed to convert '{}'", config.file))?;
    tracing::debug!(
        table = %summary.table,
        columns = summary.columns,
        rows = summary.rows,
        "conversion finished"
    );
    Ok(())
}

fn main() -> ExitCode {
    if env::args_os().len() == 1 {
        println!("{}", INFO);
        return ExitCode::SUCCESS;
    }

    let cli = Cli::parse();

    if cli.file.is_none() && cli.out.is_none() {
        if !cli.verbose && cli.version && !cli.info {
            println!("\n{}", signature());
        } else if !cli.verbose && !cli.version && cli.info {
            println!("{}", INFO);
        }
        return ExitCode::SUCCESS;
    }

    let Some(file) = cli.file else {
        println!("{}", Ccsv2SqlError::InputExtension(String::new()));
        return ExitCode::FAILURE;
    };

    let config = match DumpConfig::new(file, cli.out) {
        Ok(config) => config
            .with_separator(cli.separator.unwrap_or(b','))
            .with_db(cli.db)
            .with_comments(cli.comments)
            .with_verbose(cli.verbose),
        Err(e) if e.is_usage_error() => {
            println!("{}", e);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(config.verbose);

    if config.verbose {
        println!(
            "\nGenerating SQL dump file: '{}' from\nCSV file: '{}'\n",
            config.out, config.file
        );
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
