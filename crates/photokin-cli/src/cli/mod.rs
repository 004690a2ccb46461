mod bounds;
mod commands;
mod menu;
mod prompt;
mod report;

use clap::Parser;
use photokin_core::domain::PhotokinError;
use tracing_subscriber::EnvFilter;

pub(crate) const LOG_FILTER_ENV: &str = "PHOTOKIN_LOG";

pub fn run_from_env() -> i32 {
    init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            let photokin_error = error.as_photokin_error();
            eprintln!("{}", photokin_error.diagnostic_line());
            if let Some(summary_line) = photokin_error.fatal_exit_line() {
                eprintln!("{}", summary_line);
            }
            photokin_error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("photokin".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "photokin",
    version,
    about = "Compton scattering and photoelectric effect calculator"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Run the interactive menu (default when no command is given)
    Menu,
    /// Scatter a photon on an electron at rest
    Compton(commands::ComptonArgs),
    /// Illuminate a photocathode material
    Photoelectric(commands::PhotoelectricArgs),
    /// Estimate the photon energy back-scattered by an ultra-relativistic electron
    InverseCompton(commands::InverseComptonArgs),
    /// List the photocathode materials and their work functions
    Materials(commands::MaterialsArgs),
}

fn dispatch_parsed(command: Option<CliCommand>) -> Result<i32, CliError> {
    match command {
        None | Some(CliCommand::Menu) => commands::run_menu_command(),
        Some(CliCommand::Compton(args)) => commands::run_compton_command(args),
        Some(CliCommand::Photoelectric(args)) => commands::run_photoelectric_command(args),
        Some(CliCommand::InverseCompton(args)) => commands::run_inverse_compton_command(args),
        Some(CliCommand::Materials(args)) => commands::run_materials_command(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(PhotokinError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_photokin_error(&self) -> PhotokinError {
        match self {
            Self::Usage(message) => {
                PhotokinError::input_validation("INPUT.CLI_USAGE", message.clone())
            }
            Self::Compute(error) => error.clone(),
            Self::Internal(error)
                if error
                    .chain()
                    .any(|cause| cause.is::<std::io::Error>()) =>
            {
                PhotokinError::io_system("IO.CLI", format!("{error:#}"))
            }
            Self::Internal(error) => PhotokinError::internal("SYS.CLI", format!("{error:#}")),
        }
    }
}
