use crate::catalog::Catalog;
use crate::example::{Example, Lines};
use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info, warn};

/// Output of one executed example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Name of the example that produced `lines`.
    pub name: String,
    /// Output lines, including fallback and finally lines of a guarded example.
    pub lines: Lines,
}

/// Full ordered output of one pass over a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    sections: Vec<Section>,
}

impl Transcript {
    /// One section per executed example, in catalog order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All lines in catalog order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .flat_map(|s| s.lines.iter().map(String::as_str))
    }

    /// Total number of lines over all sections.
    pub fn line_count(&self) -> usize {
        self.sections.iter().map(|s| s.lines.len()).sum()
    }

    /// Lines produced by the named example, if it ran.
    pub fn section(&self, name: &str) -> Option<&[String]> {
        self.sections
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.lines.as_slice())
    }
}

/// Executes a [`Catalog`] front to back.
///
/// Each example's lines are written to the sink as one block after the example
/// finishes, so output of different examples never interleaves.
///
/// Example
/// ```
/// use lang_tour::{Catalog, Example, ExampleRunner};
/// let catalog = Catalog::from_examples([
///     Example::new("hello", || Ok(vec!["Hello!".to_string()])),
/// ]).unwrap();
/// let mut out = Vec::new();
/// let transcript = ExampleRunner::new(catalog).run(&mut out).unwrap();
/// assert_eq!(transcript.line_count(), 1);
/// assert_eq!(out, b"Hello!\n");
/// ```
pub struct ExampleRunner {
    catalog: Catalog,
}

impl ExampleRunner {
    /// Create a runner that owns `catalog`; the catalog is not changed afterwards.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog this runner executes.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run every example once, in order, writing lines to `out`.
    ///
    /// A guarded example failing with the fault its recovery catches gets the
    /// fallback line instead of its output; every other failure stops the pass.
    pub fn run(&self, out: &mut dyn Write) -> Result<Transcript> {
        let mut transcript = Transcript::default();
        for example in &self.catalog {
            debug!(example = example.name(), "running example");
            let lines = execute_one(example)?;
            for line in &lines {
                writeln!(out, "{}", line)?;
            }
            transcript.sections.push(Section {
                name: example.name().to_string(),
                lines,
            });
        }
        out.flush()?;
        info!(
            examples = transcript.sections.len(),
            lines = transcript.line_count(),
            "catalog finished"
        );
        Ok(transcript)
    }

    /// Run the catalog into memory only.
    pub fn transcript(&self) -> Result<Transcript> {
        self.run(&mut std::io::sink())
    }
}

fn execute_one(example: &Example) -> Result<Lines> {
    let outcome = example.execute();
    let Some(recovery) = example.recovery() else {
        return outcome.with_context(|| format!("example '{}' failed", example.name()));
    };

    let mut lines = match outcome {
        Ok(lines) => lines,
        Err(err) => match err.as_arithmetic() {
            Some(fault) if recovery.catches(fault) => {
                warn!(example = example.name(), %fault, "recovered arithmetic fault");
                vec![recovery.fallback.to_string()]
            }
            _ => {
                return Err(err)
                    .with_context(|| format!("example '{}' failed", example.name()));
            }
        },
    };
    lines.push(recovery.finally.to_string());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ArithmeticFault, ExampleError};
    use crate::example::Recovery;

    fn lines(items: &[&str]) -> Lines {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_run_concatenates_in_catalog_order() {
        let catalog = Catalog::from_examples([
            Example::new("first", || Ok(lines(&["a", "b"]))),
            Example::new("second", || Ok(lines(&["c"]))),
        ])
        .unwrap();

        let mut out: Vec<u8> = Vec::new();
        let transcript = ExampleRunner::new(catalog).run(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "a\nb\nc\n");
        assert_eq!(transcript.line_count(), 3);
        assert_eq!(transcript.lines().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(transcript.section("second"), Some(&["c".to_string()][..]));
    }

    #[test]
    fn test_guarded_fault_recovers_and_continues() {
        let catalog = Catalog::from_examples([
            Example::guarded(
                "divide",
                || {
                    let result = 10i32
                        .checked_div(0)
                        .ok_or(ArithmeticFault::DivisionByZero)?;
                    Ok(vec![format!("Result: {result}")])
                },
                Recovery::division(),
            ),
            Example::new("after", || Ok(lines(&["still running"]))),
        ])
        .unwrap();

        let mut out: Vec<u8> = Vec::new();
        ExampleRunner::new(catalog).run(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Division by zero!\nFinally block executed\nstill running\n"
        );
    }

    #[test]
    fn test_guarded_success_still_runs_finally() {
        let catalog = Catalog::from_examples([Example::guarded(
            "divide",
            || Ok(lines(&["Result: 5"])),
            Recovery::division(),
        )])
        .unwrap();

        let transcript = ExampleRunner::new(catalog).transcript().unwrap();
        assert_eq!(
            transcript.lines().collect::<Vec<_>>(),
            vec!["Result: 5", "Finally block executed"]
        );
    }

    #[test]
    fn test_unguarded_failure_stops_the_pass() {
        let catalog = Catalog::from_examples([
            Example::new("broken", || Err(ArithmeticFault::Overflow.into())),
            Example::new("never", || Ok(lines(&["unreachable"]))),
        ])
        .unwrap();

        let mut out: Vec<u8> = Vec::new();
        let err = ExampleRunner::new(catalog).run(&mut out).unwrap_err();

        assert!(format!("{err:#}").contains("example 'broken' failed"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_guard_does_not_catch_other_arithmetic_faults() {
        let catalog = Catalog::from_examples([
            Example::guarded(
                "overflow",
                || {
                    let result = i32::MIN.checked_div(-1).ok_or(ArithmeticFault::Overflow)?;
                    Ok(vec![format!("Result: {result}")])
                },
                Recovery::division(),
            ),
            Example::new("after", || Ok(lines(&["never printed"]))),
        ])
        .unwrap();

        let mut out: Vec<u8> = Vec::new();
        let err = ExampleRunner::new(catalog).run(&mut out).unwrap_err();

        let message = format!("{err:#}");
        assert!(message.contains("example 'overflow' failed"));
        assert!(message.contains("arithmetic overflow"));
        assert!(!String::from_utf8(out).unwrap().contains("Division by zero!"));
    }

    #[test]
    fn test_guard_does_not_swallow_io_errors() {
        let catalog = Catalog::from_examples([Example::guarded(
            "io",
            || Err(ExampleError::Io(std::io::Error::other("disk gone"))),
            Recovery::division(),
        )])
        .unwrap();

        assert!(ExampleRunner::new(catalog).transcript().is_err());
    }
}
