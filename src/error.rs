use std::error;
use std::fmt;

/// Errors produced by the evaluation pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Evaluation reached a variable with no entry in the assignment.
    VariableNotFound(String),
    /// A precondition violation on a public entry point (caller error).
    InvalidArgument(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VariableNotFound(var) => {
                write!(f, "variable {var} has no value in the assignment")
            }
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl error::Error for Error {}
