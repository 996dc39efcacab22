use clap::{Parser, Subcommand};
use drugai_core::*;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "drugai")]
#[command(about = "BMI and drug half-life clearance calculators", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate body-mass index
    Bmi {
        /// Height in centimeters
        #[arg(long, allow_hyphen_values = true)]
        height: String,

        /// Weight in kilograms
        #[arg(long, allow_hyphen_values = true)]
        weight: String,

        /// Output format (text, json, csv)
        #[arg(long)]
        format: Option<Format>,
    },

    /// Estimate how much of a drug remains after each half-life
    Clearance {
        /// Half-life duration
        #[arg(long, allow_hyphen_values = true)]
        half_life: String,

        /// Time unit of the half-life (hrs or days)
        #[arg(long, default_value = "")]
        unit: String,

        /// Output format (text, json, csv)
        #[arg(long)]
        format: Option<Format>,

        /// Fail with an error on invalid input instead of printing nothing
        #[arg(long)]
        strict: bool,

        /// Do not print the estimate disclaimer
        #[arg(long)]
        no_disclaimer: bool,
    },

    /// Interactive calculator session
    Session,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Initialize logging
    let level = drugai_core::logging::level_for(cli.verbose, &config.logging.level);
    drugai_core::logging::init_with_level(level);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Bmi {
            height,
            weight,
            format,
        } => {
            let format = format.unwrap_or(config.output.format);
            cmd_bmi(&mut out, &height, &weight, format)
        }
        Commands::Clearance {
            half_life,
            unit,
            format,
            strict,
            no_disclaimer,
        } => {
            let format = format.unwrap_or(config.output.format);
            let show_disclaimer = config.output.show_disclaimer && !no_disclaimer;
            cmd_clearance(&mut out, &half_life, &unit, format, strict, show_disclaimer)
        }
        Commands::Session => {
            let stdin = io::stdin();
            run_session(stdin.lock(), &mut out, config.output.show_disclaimer)
        }
    }
}

fn cmd_bmi<W: Write>(out: &mut W, height: &str, weight: &str, format: Format) -> Result<()> {
    let bmi = compute_bmi(height, weight);
    write_bmi(out, &bmi, format)
}

fn cmd_clearance<W: Write>(
    out: &mut W,
    half_life: &str,
    unit: &str,
    format: Format,
    strict: bool,
    show_disclaimer: bool,
) -> Result<()> {
    match compute_clearance_table(half_life, unit) {
        ClearanceOutcome::Computed(table) => write_clearance(out, &table, format, show_disclaimer),
        ClearanceOutcome::Invalid(reason) if strict => Err(Error::InvalidInput(reason)),
        ClearanceOutcome::Invalid(reason) => {
            tracing::debug!("Nothing to show: {}", reason);
            Ok(())
        }
    }
}

const SESSION_HELP: &str = "\
Commands:
  bmi <height_cm> <weight_kg>      Calculate BMI
  clearance <half_life> <hrs|days> Calculate clearance table
  show                             Show the current clearance table
  clear                            Forget the current clearance table
  help                             Show this help
  quit                             Leave the session";

/// Line-oriented calculator loop
///
/// Keeps one clearance table for the whole session. An invalid
/// `clearance` request leaves the previous table on display.
fn run_session<R: BufRead, W: Write>(input: R, out: &mut W, show_disclaimer: bool) -> Result<()> {
    let mut estimator = ClearanceEstimator::new();

    writeln!(out, "DrugAI calculators. Type 'help' for commands.")?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or("").to_lowercase();
        let first = words.next().unwrap_or("");
        let second = words.next().unwrap_or("");

        match command.as_str() {
            "" => {}
            "bmi" => write_bmi(out, &compute_bmi(first, second), Format::Text)?,
            "clearance" => {
                estimator.calculate(first, second);
                if let Some(table) = estimator.table() {
                    write_clearance(out, table, Format::Text, show_disclaimer)?;
                }
            }
            "show" => match estimator.table() {
                Some(table) => write_clearance(out, table, Format::Text, show_disclaimer)?,
                None => writeln!(out, "No clearance table yet.")?,
            },
            "clear" => {
                estimator.clear();
                writeln!(out, "Clearance table cleared.")?;
            }
            "help" => writeln!(out, "{}", SESSION_HELP)?,
            "quit" | "exit" => return Ok(()),
            other => writeln!(out, "Unknown command: {}. Type 'help' for commands.", other)?,
        }

        prompt(out)?;
    }

    writeln!(out)?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}
