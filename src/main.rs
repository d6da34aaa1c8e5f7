use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_config_command, handle_init_command, handle_run_command, parse_today,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::logging::{self, LogTarget};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Record expenses, filter them by date and see the total",
    long_about = "A terminal expense form. Enter a name, a positive amount and a date \
                  that is not in the future; narrow the list with an optional date \
                  range and watch the total follow. Runs interactively or from a \
                  script of commands."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Run a script of commands against a fresh session
    Run {
        /// Script file; reads stdin when omitted or `-`
        file: Option<PathBuf>,

        /// Date treated as today (YYYY-MM-DD)
        #[arg(long, env = "EXPENSE_TRACKER_TODAY")]
        today: Option<String>,

        /// Exit with a failure status if any input was rejected
        #[arg(long)]
        strict: bool,
    },

    /// Show current configuration and paths
    Config,

    /// Write the default settings file
    Init,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new();
    let settings = Settings::load_or_create(&paths)?;

    let command = cli.command.unwrap_or(Commands::Tui);
    let target = match command {
        Commands::Tui => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    logging::init(&settings, &paths, target)?;

    let mut stdout = io::stdout().lock();
    match command {
        Commands::Tui => {
            expense_tracker::tui::run_tui(&settings, &paths)?;
        }
        Commands::Run {
            file,
            today,
            strict,
        } => {
            let today = today.as_deref().map(parse_today).transpose()?;
            let report = handle_run_command(&settings, &paths, file.as_deref(), today, &mut stdout)
                .context("script failed")?;
            if strict && report.had_input_errors() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Config => {
            handle_config_command(&settings, &paths, &mut stdout)?;
        }
        Commands::Init => {
            let settings_file = handle_init_command(&settings, &paths, &mut stdout)?;
            writeln!(stdout, "Settings written to {}", settings_file.display())?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
