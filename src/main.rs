//! gibo CLI entry point.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::CompleteEnv;
use gibo::cli::{Cli, CommandDispatcher};
use gibo::config::MirrorConfig;
use gibo::ui::{create_ui, OutputMode, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout carries boilerplates only.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("gibo=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gibo=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli, ui: &mut dyn UserInterface) -> gibo::Result<ExitCode> {
    let config = MirrorConfig::from_env()?;
    tracing::debug!("Mirror directory: {}", config.root.display());

    let dispatcher = CommandDispatcher::new(config);
    let result = dispatcher.dispatch(cli, ui)?;
    Ok(ExitCode::from(result.exit_code as u8))
}

fn main() -> ExitCode {
    CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("gibo starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let mut ui = create_ui(output_mode);

    match run(&cli, ui.as_mut()) {
        Ok(code) => code,
        Err(e) if e.is_fatal() => {
            tracing::error!("Cannot continue: {}", e);
            ui.error(&e.to_string());
            ExitCode::FAILURE
        }
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::FAILURE
        }
    }
}
