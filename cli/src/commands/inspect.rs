use anyhow::{Context, Result};
use std::io::Write;

/// Print the package surface: the equivalent of `help()` and `dir()`.
pub fn inspect(out: &mut dyn Write) -> Result<()> {
    let package = bridge::import().context("Failed to import counterkit")?;

    writeln!(out, "package   {} {}", package.name(), package.version())?;
    writeln!(out, "artifact  {}", package.artifact().name())?;
    writeln!(out, "doc       {}", package.doc())?;
    writeln!(out, "__all__   {}", package.dir().join(", "))?;
    for name in package.dir() {
        if let Some(export) = package.get(name) {
            writeln!(out)?;
            writeln!(out, "{}", export.signature())?;
            writeln!(out, "    {}", export.doc())?;
        }
    }
    Ok(())
}
