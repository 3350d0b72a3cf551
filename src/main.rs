use bad_horse::{input, logger, report, Format};
use clap::Parser;
use log::{debug, error};
use std::path::PathBuf;

/// Decides, for each test case of enemy pairings, whether the enemies can be
/// split into two factions with no enemies sharing a faction. Prints one line
/// per case, 'Case #k: Yes' or 'Case #k: No'. For example:
///  ./bad-horse A-small-practice-1.in -vv
///
/// Note: when no input file is given, the test cases are read from stdin.
///
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Test-case file (defaults to stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Write the verdicts to this file, instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log level, or log-spec (default: 'info')
    #[arg(short, long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Write (rotated) log files to this directory, instead of stderr
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Show the factions (-v), and duplicate all log lines to stderr (-vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Reads the test cases, solves each, and writes out the verdicts.
fn run(args: Args) -> Result<(), bad_horse::Error> {
    debug!("{:?}", args.input);
    let cases = input::read_cases(args.input.as_deref())?;
    let verdicts = report::solve_cases(&cases)?;
    let rendered = report::render(&verdicts, args.format, args.verbose > 0)?;

    match args.output {
        Some(path) => {
            debug!("writing verdicts to: {}", path.display());
            std::fs::write(path, rendered + "\n")?;
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

/**
 * Main entry-point: configures logging, and then reports any failure by its
 * message, with a non-zero exit status.
 */
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();
    let level: String = args.log_level.clone().unwrap_or("info".to_string());
    let logger = logger::configure(
        level.as_str(),
        args.verbose > 1,
        args.log_dir.as_deref(),
    )?;

    if let Err(e) = run(args) {
        error!("{}", e);
        logger.flush();
        drop(logger);
        std::process::exit(1);
    }
    Ok(())
}
