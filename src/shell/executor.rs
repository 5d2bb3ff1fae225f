//! Line dispatcher
//!
//! Takes a raw input line and:
//! 1. Records it in history
//! 2. Splits it into a command word and arguments
//! 3. Runs the handler and applies any state change it requests
//!
//! Every failure comes back as error text; the session always survives.

use super::builtins::{self, BuiltinResult, Session};
use super::registry::Command;
use crate::config::TerminalConfig;

/// Result of executing a line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecResult {
    /// Text to display
    pub output: String,
    /// Error text to display
    pub error: String,
    /// Wipe prior output instead of displaying anything
    pub clear: bool,
    /// Link the host should open
    pub open_url: Option<String>,
}

impl ExecResult {
    pub fn success() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = error.into();
        self
    }

    pub fn clear() -> Self {
        Self {
            clear: true,
            ..Self::default()
        }
    }

    pub fn open(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            output: message.into(),
            open_url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// Everything to display, output first
    pub fn text(&self) -> String {
        match (self.output.is_empty(), self.error.is_empty()) {
            (_, true) => self.output.clone(),
            (true, false) => self.error.clone(),
            (false, false) => format!("{}\n{}", self.output, self.error),
        }
    }
}

/// The dispatcher, owning its session
pub struct Executor {
    pub state: Session,
}

impl Executor {
    pub fn new(config: &TerminalConfig) -> Self {
        Self {
            state: Session::new(config),
        }
    }

    /// Execute a line of input
    pub fn execute_line(&mut self, line: &str) -> ExecResult {
        let line = line.trim();
        if line.is_empty() {
            return ExecResult::success();
        }

        self.state.history.push(line);

        #[cfg(all(target_arch = "wasm32", not(test)))]
        crate::console_log!("[exec] Running: {}", line);

        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return ExecResult::success();
        };
        let args: Vec<String> = words.map(str::to_string).collect();

        let Some(cmd) = Command::lookup(name) else {
            return ExecResult::success().with_error(format!(
                "Command not found: {}. Type 'help' for available commands.",
                name
            ));
        };

        match builtins::execute(cmd, &args, &self.state) {
            Ok(result) => self.apply(result),
            Err(e) => {
                #[cfg(all(target_arch = "wasm32", not(test)))]
                crate::console_log!("[exec] Error: {}", e);
                ExecResult::success().with_error(e.to_string())
            }
        }
    }

    /// Apply a handler's request to the session
    fn apply(&mut self, result: BuiltinResult) -> ExecResult {
        match result {
            BuiltinResult::Success(text) => ExecResult::success().with_output(text),
            BuiltinResult::Clear => ExecResult::clear(),
            BuiltinResult::Cd(path) => {
                self.state.cwd = path;
                ExecResult::success()
            }
            BuiltinResult::Open { url, message } => ExecResult::open(url, message),
        }
    }

    /// Current working directory
    pub fn cwd(&self) -> &str {
        &self.state.cwd
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(&TerminalConfig::default())
    }
}
