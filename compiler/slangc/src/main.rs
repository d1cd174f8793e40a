//! The `slang` binary.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use slangc::cli::{Cli, Command};
use slangc::commands::{build, init, lex_file, report_error, run};
use slangc::config::{Settings, DEFAULT_CONFIG_PATH};
use slangc::{logging, Error};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: Cli) -> Result<(), Error> {
    if let Command::Init = cli.command {
        let path = cli
            .conf
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_CONFIG_PATH));
        return init(path);
    }

    let settings = Settings::load(&cli)?;
    logging::init(settings.verbosity);

    match cli.command {
        Command::Run { .. } => run(settings),
        Command::Build { output, inputs } => {
            let summary = build(
                &settings.build,
                &output,
                &inputs,
                settings.verbosity.is_quiet(),
                &mut io::stdout().lock(),
            )?;
            tracing::debug!(
                compiled = summary.compiled,
                copied = summary.copied,
                skipped = summary.skipped,
                "build finished"
            );
            Ok(())
        }
        Command::Lex { file } => lex_file(&file, &mut io::stdout().lock()),
        Command::Init => Ok(()),
    }
}
