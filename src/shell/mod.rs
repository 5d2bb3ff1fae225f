//! Shell - the portfolio's command interpreter
//!
//! A small, closed command set over a read-only tree. Features:
//! - Case-insensitive command lookup and Tab completion
//! - Filesystem commands (ls, cd, pwd, cat) over the toy tree
//! - History with duplicate suppression and arrow-key navigation
//! - Terminal model with typed output and bounded scrollback
//!
//! Built incrementally with comprehensive tests at each step.

pub mod builtins;
pub mod content;
pub mod error;
pub mod executor;
pub mod history;
pub mod registry;
pub mod terminal;

pub use builtins::{BuiltinResult, Session};
pub use error::{ShellError, ShellResult};
pub use executor::{ExecResult, Executor};
pub use history::History;
pub use registry::Command;
pub use terminal::{InputState, LineId, LineKind, RenderOp, Terminal, TerminalLine};
