//! CLI interface for the rover simulator.
//!
//! - `rover run [INPUT]` — simulate the rovers described in `INPUT` (or stdin).
//! - `rover table` — validate a motion table and print it as JSON.
//!
//! `--table <PATH>` swaps the built-in compass for a JSON motion table on
//! either command.

mod format;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};

use rover::{InstructionPolicy, Mission, MotionTable};

use format::format_summary;

/// Rover — drive rovers across a plateau.
#[derive(Debug, Parser)]
#[command(name = "rover", version, after_long_help = PROTOCOL_HELP)]
pub struct Cli {
    /// JSON motion table to use instead of the built-in compass.
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    /// More log output: `-v` for info, `-vv` for debug. `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

const PROTOCOL_HELP: &str = r"Input:
  5 5            plateau upper-right corner; lower-left is 0 0
  1 2 N          rover start: x y heading (N, E, S, W)
  LMLMLMLMM      rover instructions: L/R turn, M moves one cell
  ...            more rovers, two lines each

Output:
  1 3 N          one line per rover: final x y heading

A rover stops at the first instruction that would take it off the plateau
or onto a rover that has already finished. A rover that starts off the
plateau, or on a finished rover, does not move.";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Simulate rovers and write their final positions.
    ///
    /// Output goes to `--out` if given, to `<INPUT>.out` when reading a file,
    /// and to stdout when reading stdin.
    Run {
        /// Input file; stdin when omitted or `-`.
        input: Option<PathBuf>,

        /// Write results to this file.
        #[arg(long, conflicts_with = "stdout")]
        out: Option<PathBuf>,

        /// Write results to stdout even when reading a file.
        #[arg(long)]
        stdout: bool,

        /// Skip unknown instruction letters instead of failing.
        #[arg(long)]
        lenient: bool,
    },

    /// Validate a motion table and print it as JSON.
    Table,
}

/// Where rover results are written.
#[derive(Debug, PartialEq, Eq)]
enum Destination {
    Stdout,
    File(PathBuf),
}

/// Run the CLI, returning an error message on failure.
pub fn run() -> Result<(), String> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let table = load_table(cli.table.as_deref())?;

    match cli.command {
        Command::Run {
            input,
            out,
            stdout,
            lenient,
        } => {
            let input = input.filter(|path| path != Path::new("-"));
            let destination = destination(input.as_deref(), out, stdout);
            let policy = if lenient {
                InstructionPolicy::Ignore
            } else {
                InstructionPolicy::Strict
            };
            cmd_run(&table, policy, input.as_deref(), &destination)
        }
        Command::Table => cmd_table(&table),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_table(path: Option<&Path>) -> Result<MotionTable, String> {
    match path {
        Some(path) => MotionTable::load(path)
            .map_err(|e| format!("invalid motion table {}: {e}", path.display())),
        None => Ok(MotionTable::compass()),
    }
}

/// Resolve the output destination: explicit `--out`, then `--stdout`, then
/// `<INPUT>.out` beside a file input, else stdout.
fn destination(input: Option<&Path>, out: Option<PathBuf>, stdout: bool) -> Destination {
    if let Some(out) = out {
        return Destination::File(out);
    }
    match input {
        Some(input) if !stdout => {
            let mut name = input.as_os_str().to_owned();
            name.push(".out");
            Destination::File(PathBuf::from(name))
        }
        _ => Destination::Stdout,
    }
}

fn cmd_run(
    table: &MotionTable,
    policy: InstructionPolicy,
    input: Option<&Path>,
    destination: &Destination,
) -> Result<(), String> {
    let reader: Box<dyn BufRead> = match input {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| format!("failed to open {}: {e}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let writer: Box<dyn Write> = match destination {
        Destination::Stdout => Box::new(io::stdout().lock()),
        Destination::File(path) => {
            let file = File::create(path)
                .map_err(|e| format!("failed to create {}: {e}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
    };

    let summary = Mission::new(table, policy)
        .run(reader, writer)
        .map_err(|e| match input {
            Some(path) => format!("{}: {e}", path.display()),
            None => format!("stdin: {e}"),
        })?;

    log::info!("{}", format_summary(&summary));
    if let Destination::File(path) = destination {
        eprintln!("{} → {}", format_summary(&summary), path.display());
    }

    Ok(())
}

fn cmd_table(table: &MotionTable) -> Result<(), String> {
    let json = table
        .to_json()
        .map_err(|e| format!("failed to serialize motion table: {e}"))?;
    println!("{json}");
    Ok(())
}
