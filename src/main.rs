//! PhoneSmith: generate formatted phone-number wordlists.
//!
//! Usage: phonesmith [AREA_CODE] [OPTIONS]

use clap::{ArgAction, Parser};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use phonesmith::config::{SizeSpec, DEFAULT_FLUSH_THRESHOLD};
use phonesmith::{resolve_output_path, AreaCode, GenerateCommand, GenerateConfig, WordlistError};

#[derive(Parser)]
#[command(name = "phonesmith")]
#[command(version)]
#[command(about = "PhoneSmith: Generate formatted phone number wordlists.", long_about = None)]
#[command(after_help = "If no area code is provided, you will be prompted to enter it.")]
struct Cli {
    /// The 3-digit area code for the phone numbers (e.g., 721)
    area_code: Option<String>,

    /// The output file to save the wordlist. Defaults to '<area_code>-wordlist.txt'
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Limit how many 7-digit numbers to generate (accepts K/M suffixes, e.g. 50K)
    #[arg(short, long, default_value = "10000000")]
    limit: String,

    /// Numbers to buffer in memory between writes
    #[arg(long, default_value_t = DEFAULT_FLUSH_THRESHOLD)]
    flush_every: usize,

    /// Print generation statistics to stderr
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress progress messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();
}

fn run(cli: Cli) -> Result<(), WordlistError> {
    let area_code = match cli.area_code {
        Some(s) => AreaCode::parse(&s)?,
        None => AreaCode::parse(&prompt_area_code()?)?,
    };

    let config = GenerateConfig {
        limit: parse_limit(&cli.limit)?,
        flush_every: cli.flush_every,
    };
    config.validate()?;

    let output_path = resolve_output_path(&area_code, cli.output.as_deref())?;

    let cmd = GenerateCommand::new(area_code, config);
    if !cli.quiet {
        println!(
            "PhoneSmith is crafting phone numbers for area code {}...",
            cmd.area_code()
        );
    }

    let stats = cmd.run_to_path(&output_path)?;

    if cli.stats {
        eprintln!("Generate stats: {}", stats);
    }
    if !cli.quiet {
        println!("Wordlist saved to {}", output_path.display());
    }

    Ok(())
}

/// Ask for an area code on stdin when none was given on the command line.
fn prompt_area_code() -> Result<String, WordlistError> {
    let mut stdout = io::stdout();
    write!(stdout, "Please enter a 3-digit area code: ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn parse_limit(s: &str) -> Result<u32, WordlistError> {
    let spec = SizeSpec::from_str(s).ok_or_else(|| {
        WordlistError::InvalidLimit(format!(
            "Invalid limit '{}'. Use a positive integer like 5000, 50K or 10M.",
            s
        ))
    })?;
    u32::try_from(spec.count).map_err(|_| {
        WordlistError::InvalidLimit(format!(
            "Limit must not exceed 10000000 (all 7-digit numbers), got {}.",
            spec.count
        ))
    })
}
