use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for confgen.
///
/// Parameter values are kept as strings here and validated against their
/// enumerated domains when the run starts.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration template to rewrite in place.
    #[arg(short, long, value_name = "PATH")]
    pub config: PathBuf,

    /// Target architecture: x86 or arm.
    #[arg(long, value_name = "ARCH")]
    pub arch: String,

    /// Detector accelerator: coral, intel, rockchip or none.
    #[arg(long, value_name = "ACCELERATOR")]
    pub accelerator: Option<String>,

    /// Board for arm targets: rpi4 or generic.
    #[arg(long, value_name = "BOARD")]
    pub board: Option<String>,

    /// Settings file (defaults to confgen.{json,yaml,yml} next to the template).
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print the generated document instead of writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Also keep a copy of the template as first seen, never overwritten.
    #[arg(long = "keep-pristine")]
    pub keep_pristine: bool,
}

/// Parse command line arguments.
///
/// Every usage error exits with status 1; `--help` and `--version` exit 0.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if !e.use_stderr() {
            e.exit();
        }
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
        }
        if let Err(print_err) = e.print() {
            eprintln!("Failed to display usage error: {print_err}");
        }
        std::process::exit(exit_codes::FAILURE);
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
