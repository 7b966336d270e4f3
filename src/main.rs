use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;
use xls_to_ofx::ConverterBuilder;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Bank export to convert (.xls, .xlsx, .ods or .csv)
    input: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let status = run(Cli::parse(), &mut io::stdout(), &mut io::stderr())?;
    Ok(ExitCode::from(status))
}

/// Runs one conversion and returns the process exit status.
fn run<W, E>(cli: Cli, out_w: &mut W, error_w: &mut E) -> Result<u8>
where
    W: Write,
    E: Write,
{
    let Some(input) = cli.input else {
        writeln!(
            error_w,
            "No input file specified. Please provide a valid .xls file path."
        )?;
        return Ok(1);
    };

    let written = ConverterBuilder::new()
        .input(&input)
        .convert()
        .wrap_err_with(|| format!("failed to convert {}", input.display()))?;

    writeln!(out_w, "OFX file created successfully at {}", written.display())?;
    Ok(0)
}
