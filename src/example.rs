use crate::error::{ArithmeticFault, ExampleError};
use std::fmt;

/// Ordered output of one example, one entry per printed line.
pub type Lines = Vec<String>;

/// Object-safe action behind an [`Example`].
///
/// Actions take no arguments; everything they print is derived from values
/// they define locally (or captured when the catalog was built). They are `Fn`
/// rather than `FnOnce` so the same catalog can be executed more than once.
pub type Action = Box<dyn Fn() -> Result<Lines, ExampleError>>;

/// Fixed lines emitted by the runner around a guarded example.
///
/// This is the scoped try/catch/finally: when the action fails with the
/// caught `fault`, `fallback` replaces its output; `finally` is appended
/// afterwards, whether the action faulted or not. Any other fault is not
/// caught and stops the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recovery {
    /// The only fault this recovery catches.
    pub fault: ArithmeticFault,
    /// Line printed in place of the action's output when `fault` is caught.
    pub fallback: &'static str,
    /// Line printed after the action, caught or not.
    pub finally: &'static str,
}

impl Recovery {
    /// Recovery used for integer division: catches division by zero only.
    pub const fn division() -> Self {
        Self {
            fault: ArithmeticFault::DivisionByZero,
            fallback: "Division by zero!",
            finally: "Finally block executed",
        }
    }

    /// Whether `fault` is the one this recovery catches.
    pub fn catches(&self, fault: ArithmeticFault) -> bool {
        self.fault == fault
    }
}

/// A named language-feature demonstration.
pub struct Example {
    name: String,
    action: Action,
    recovery: Option<Recovery>,
}

impl Example {
    /// Create an unguarded example. Any failure of `action` aborts the run.
    pub fn new<F>(name: impl Into<String>, action: F) -> Self
    where
        F: Fn() -> Result<Lines, ExampleError> + 'static,
    {
        Self {
            name: name.into(),
            action: Box::new(action),
            recovery: None,
        }
    }

    /// Create an example whose arithmetic faults are recovered by the runner.
    pub fn guarded<F>(name: impl Into<String>, action: F, recovery: Recovery) -> Self
    where
        F: Fn() -> Result<Lines, ExampleError> + 'static,
    {
        Self {
            name: name.into(),
            action: Box::new(action),
            recovery: Some(recovery),
        }
    }

    /// Unique name of the example, as shown by `--list`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recovery applied by the runner, `None` for unguarded examples.
    pub fn recovery(&self) -> Option<Recovery> {
        self.recovery
    }

    /// Invoke the action once.
    pub fn execute(&self) -> Result<Lines, ExampleError> {
        (self.action)()
    }
}

impl fmt::Debug for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Example")
            .field("name", &self.name)
            .field("recovery", &self.recovery)
            .finish_non_exhaustive()
    }
}
