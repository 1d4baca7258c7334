use crate::config::Settings;
use crate::lessons::standard_catalog;
use crate::runner::ExampleRunner;
use anyhow::{Context, Result};
use std::io::Write;

/// Install the stderr tracing subscriber described by `settings`.
///
/// Fails on an invalid `--log` directive, before anything is printed.
pub fn init_logging(settings: &Settings) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(settings.env_filter()?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Build the standard catalog, narrow it by `--only`, then list or run it
/// into `out`.
///
/// An error here makes the binary exit non-zero with the error chain on stderr.
pub fn run(settings: &Settings, out: &mut dyn Write) -> Result<()> {
    let mut catalog = standard_catalog(settings).context("building example catalog")?;
    if let Some(pattern) = &settings.only {
        catalog = catalog.select(pattern)?;
    }

    if settings.list {
        for name in catalog.names() {
            writeln!(out, "{}", name)?;
        }
        out.flush()?;
        return Ok(());
    }

    ExampleRunner::new(catalog).run(out)?;
    Ok(())
}
