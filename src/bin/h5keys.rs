//! List the top-level keys of a HDF5 file to stdout.
//!
//! Failures to open or read the file are reported on stdout as well, the exit status is 0 either way.
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

use h5keys::prelude::*;
use h5keys::report;

/// File inspected when no path is given.
const DEFAULT_PATH: &str =
    r"C:\Users\LEE\Desktop\UNIV\4-2\BigdataAI\data_set\data_set\N-CMAPSS_DS08a-009.h5";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// HDF5 file to inspect.
    #[arg(env = "H5KEYS_FILE", default_value = DEFAULT_PATH)]
    path: PathBuf,

    /// Print the structure as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let result = Structure::inspect(&args.path);
    if let Err(e) = &result {
        log::debug!("inspection of {} failed: {e:?}", args.path.display());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.json {
        report::write_json(&mut out, &result)?;
    } else {
        report::write_text(&mut out, &args.path, &result)?;
    }

    out.flush()?;

    Ok(())
}
