//! dxver CLI entry point.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use dxver::cli::Cli;
use dxver::descriptor::{self, ResolvedApplet};
use dxver::report::{self, CollectOptions};
use dxver::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, keeping stderr clean for the version lines
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("dxver=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dxver=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("dxver starting with args: {:?}", cli);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    // Matches the original dx-script contract: too few arguments prints
    // usage and exits clean rather than failing the calling job.
    if std::env::args_os().count() < 3 {
        println!("{}", Cli::command().render_usage());
        return Ok(ExitCode::SUCCESS);
    }

    let resolved = match (&cli.dxjson, &cli.applet, &cli.appver) {
        (Some(path), _, _) => descriptor::resolve_file(path)?,
        (None, Some(applet), Some(appver)) => ResolvedApplet {
            applet: applet.clone(),
            version: appver.clone(),
        },
        _ => {
            Cli::command().print_help()?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    let options = CollectOptions {
        quiet: cli.quiet,
        verbose: cli.verbose,
    };
    let report = report::collect(&resolved, &options)?;
    println!("{}", serde_json::to_string(&report)?);

    Ok(ExitCode::SUCCESS)
}
