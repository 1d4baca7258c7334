use thiserror::Error;

/// Faults raised by checked integer arithmetic inside an example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticFault {
    #[error("division by zero")]
    DivisionByZero,

    #[error("arithmetic overflow")]
    Overflow,
}

/// Failure of a single example action.
#[derive(Debug, Error)]
pub enum ExampleError {
    #[error("arithmetic fault: {0}")]
    Arithmetic(#[from] ArithmeticFault),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExampleError {
    /// The arithmetic fault behind this error, if that is what it is.
    pub fn as_arithmetic(&self) -> Option<ArithmeticFault> {
        match self {
            ExampleError::Arithmetic(fault) => Some(*fault),
            ExampleError::Io(_) => None,
        }
    }
}

/// Errors raised while assembling or narrowing a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate example name: {0}")]
    DuplicateName(String),

    #[error("example name must not be empty")]
    EmptyName,

    #[error("invalid example pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_fault_is_recognised() {
        let err = ExampleError::from(ArithmeticFault::DivisionByZero);
        assert_eq!(err.as_arithmetic(), Some(ArithmeticFault::DivisionByZero));
        assert_eq!(err.to_string(), "arithmetic fault: division by zero");
    }

    #[test]
    fn test_io_error_is_not_arithmetic() {
        let err = ExampleError::from(std::io::Error::other("boom"));
        assert_eq!(err.as_arithmetic(), None);
    }
}
