//! Shell error types
//!
//! Every error renders to the exact line the user sees. Nothing here is
//! fatal: the dispatcher turns each one into output text.

use std::fmt;

/// Shell result type
pub type ShellResult<T> = Result<T, ShellError>;

/// Errors raised by command handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// `cd` target missing or not a directory (argument as typed)
    NoSuchDirectory(String),
    /// `ls` target missing or not a directory
    CannotAccess(String),
    /// `cat` name not in the file table
    NoSuchFile(String),
    /// Required operand absent
    MissingOperand { command: &'static str, what: &'static str },
    /// `resume` with no link configured
    ResumeUnavailable,
    /// Any other handler failure
    Handler(String),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::NoSuchDirectory(path) => {
                write!(f, "cd: no such file or directory: {}", path)
            }
            ShellError::CannotAccess(path) => {
                write!(f, "ls: cannot access '{}': No such file or directory", path)
            }
            ShellError::NoSuchFile(name) => {
                write!(f, "cat: {}: No such file or directory", name)
            }
            ShellError::MissingOperand { command, what } => {
                write!(f, "{}: missing {} operand", command, what)
            }
            ShellError::ResumeUnavailable => {
                write!(f, "Error executing command: resume link is not configured")
            }
            ShellError::Handler(msg) => write!(f, "Error executing command: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}
