use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use vaidya_clinic::cli::Cli;
use vaidya_clinic::{logging, Settings};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = Settings::from_cli(cli).context("invalid arguments")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    vaidya_clinic::run(&settings, &mut out)
        .with_context(|| format!("cannot list {}", settings.screen))?;
    out.flush().context("failed to flush output")?;
    Ok(())
}
