//! Command implementations

use std::io;
use std::path::PathBuf;

use super::interactive::Session;
use super::Args;
use crate::config::{create_default_config, load_config, CliArgs, DEFAULT_CONFIG_FILE};
use crate::core::Inspector;
use crate::error::{InspectError, Result, ResultExt};
use crate::models::config::Settings;
use crate::output::{create_formatter, create_writer, ProgressReporter};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Inspect the repository and print one view of the report
    Inspect(CliArgs),
    /// Start the interactive inspector
    Interactive(CliArgs),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }

        let cli_args = CliArgs::from_args(&args);
        if args.interactive {
            Command::Interactive(cli_args)
        } else {
            Command::Inspect(cli_args)
        }
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Inspect(cli_args) => {
                let settings = load_config(cli_args.clone())?;
                inspect(settings)
            }
            Command::Interactive(cli_args) => {
                let settings = load_config(cli_args.clone())?;
                let inspector = Inspector::new(settings)?;
                let mut session = Session::new(&inspector)?;
                session.run(io::stdin().lock(), io::stdout().lock())
            }
            Command::Init => init(PathBuf::from(DEFAULT_CONFIG_FILE)),
        }
    }

    /// Run the command and map failures to an exit code
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("{}: {}", err.severity(), err.user_message());
                if let Some(suggestion) = err.suggestion() {
                    eprintln!("Suggestion: {}", suggestion);
                }
                err.severity().exit_code()
            }
        }
    }
}

/// One inspection pass rendered to stdout or the output file
fn inspect(settings: Settings) -> Result<()> {
    let inspector = Inspector::new(settings)?;
    let settings = inspector.settings();

    let report = {
        let progress = ProgressReporter::new(settings.show_progress && !settings.quiet, settings.verbose);
        let report = inspector.inspect_with_progress(|current, total, message| {
            progress.update(current, total, message);
        })?;
        progress.finish();
        report
    };

    // Colour codes only make sense on a terminal
    let use_colors = settings.use_colors && settings.output_file.is_none();
    let formatter = create_formatter(settings.output_format, use_colors, settings.verbose, settings.quiet);
    let output = formatter
        .format(&report, settings.view)
        .with_context(|| format!("Failed to format the {} view as {}", settings.view, settings.output_format))?;

    create_writer(settings.output_file.as_ref()).write(&output)?;

    if let Some(path) = &settings.output_file {
        if !settings.quiet {
            eprintln!("Report written to: {}", path.display());
        }
    }
    Ok(())
}

/// Write the default configuration file unless one already exists
fn init(config_path: PathBuf) -> Result<()> {
    if config_path.exists() {
        println!("Configuration file already exists at: {}", config_path.display());
        println!("To overwrite it, delete the file first and run this command again.");
        return Ok(());
    }

    create_default_config(&config_path).map_err(|err| match err {
        InspectError::Io { source } => InspectError::OutputWrite {
            path: config_path.clone(),
            source,
        },
        other => other,
    })?;

    println!("Created default configuration file at: {}", config_path.display());
    println!("Every key is commented out; uncomment the ones you want to change.");
    Ok(())
}
