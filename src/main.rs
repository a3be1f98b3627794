//! automata-convert - Mealy/Moore automaton converter
//!
//! Usage: `automata-convert <mealy-to-moore|moore-to-mealy> <input> <output>`

use automata_convert::command::{self, Command};
use automata_convert::config::{ConvertConfig, LogFormat};
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(version, about = "Convert finite-state machines between Mealy and Moore form")]
struct Arguments {
    /// Conversion direction
    command: Command,
    /// Automaton file to read (`.json` or delimited table)
    input: PathBuf,
    /// Automaton file to write (`.json` or delimited table)
    output: PathBuf,
}

fn init_logging(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "automata_convert=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_span_list(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn main() -> ExitCode {
    let (config, warnings) = ConvertConfig::from_env();
    init_logging(config.log_format);
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    run(std::env::args_os(), &config, &mut std::io::stderr())
}

/// Parse `args`, run the conversion and pick the exit code.
///
/// Conversion failures are written to `errors` and still exit 0; only
/// argument errors exit 1.
fn run<I, T>(args: I, config: &ConvertConfig, errors: &mut impl Write) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Arguments::try_parse_from(args) {
        Ok(args) => args,
        Err(err) => {
            // --help and --version land here too and are not failures
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match command::run(args.command, &args.input, &args.output, config) {
        Ok(summary) => {
            tracing::info!(
                command = %args.command,
                input_states = summary.input_states,
                output_states = summary.output_states,
                input_symbols = summary.input_symbols,
                "Conversion finished"
            );
        }
        Err(err) => {
            tracing::error!(command = %args.command, error = %err, "Conversion failed");
            let _ = writeln!(
                errors,
                "Error during {} conversion: {err}",
                args.command.description()
            );
        }
    }

    ExitCode::SUCCESS
}
