/// Command module for the `dsreg` CLI.
///
/// Each submodule implements one subcommand. Its `run` function takes the
/// parsed arguments and returns `Ok(())` on success or a
/// [`crate::error::CliError`] on failure. Report construction is kept apart
/// from printing so it can be tested without spawning the binary.
pub mod components;
pub mod demo;
pub mod mst;

use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Prints `report` to stdout as pretty JSON or through `human`.
fn emit<R, F>(format: OutputFormat, report: &R, human: F) -> Result<(), CliError>
where
    R: Serialize,
    F: FnOnce(&R) -> String,
{
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, format, report, human)
}

fn write_report<W, R, F>(
    out: &mut W,
    format: OutputFormat,
    report: &R,
    human: F,
) -> Result<(), CliError>
where
    W: Write,
    R: Serialize,
    F: FnOnce(&R) -> String,
{
    let text = match format {
        OutputFormat::Human => human(report),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).map_err(|e| CliError::InternalError {
                detail: format!("JSON serialization failed: {e}"),
            })?
        }
    };
    if text.is_empty() {
        return Ok(());
    }
    writeln!(out, "{text}")
        .and_then(|()| out.flush())
        .map_err(|e| CliError::IoError {
            source: "stdout".to_owned(),
            detail: e.to_string(),
        })
}
