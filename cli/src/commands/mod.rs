pub mod call;
pub mod inspect;
pub mod run;

use anyhow::{Context, Result};
use bridge::CallArgs;
use std::io::Write;

use crate::report::{report, Outcome};

/// Import the package, make one call and report it.
///
/// Only a load fault or a failing writer is an `Err`; call faults become an
/// [`Outcome`].
pub fn invoke_and_report(args: &CallArgs, out: &mut dyn Write) -> Result<Outcome> {
    let package = bridge::import().context("Failed to import counterkit")?;
    let export = package.counter();

    tracing::info!(target: "cli", symbol = export.name(), args = ?args, "calling");
    let result = export.invoke(out, args);
    let outcome = report(result, out).context("Failed to write report")?;
    tracing::info!(target: "cli", symbol = export.name(), outcome = ?outcome, "call finished");

    Ok(outcome)
}
