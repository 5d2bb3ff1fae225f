//! Command handlers
//!
//! Handlers read the session and return a request; the executor applies
//! state changes (directory moves) and turns errors into output text.

use super::content;
use super::error::{ShellError, ShellResult};
use super::history::History;
use super::registry::{self, Command};
use crate::config::TerminalConfig;
use crate::vfs::{self, ToyFs};

/// Result of running a handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuiltinResult {
    /// Command succeeded, output to display
    Success(String),
    /// Request to wipe the output log
    Clear,
    /// Request to change directory (resolved absolute path)
    Cd(String),
    /// Request to open a link, with a message to display
    Open { url: String, message: String },
}

/// Session state visible to handlers
pub struct Session {
    /// Current working directory; always a directory in `fs`
    pub cwd: String,
    /// Where `cd` with no argument goes
    pub home: String,
    /// Reported by `whoami`
    pub user: String,
    /// Target of `resume`
    pub resume_url: String,
    /// Submitted lines
    pub history: History,
    /// The tree `ls` and `cd` browse
    pub fs: ToyFs,
}

impl Session {
    pub fn new(config: &TerminalConfig) -> Self {
        let fs = config.filesystem.clone().unwrap_or_default();
        let start = vfs::normalize_path(&config.start_dir);
        let cwd = if fs.is_dir(&start) {
            start
        } else {
            "/".to_string()
        };

        Self {
            cwd,
            home: vfs::normalize_path(&config.home),
            user: config.user.clone(),
            resume_url: config.resume_url.clone(),
            history: History::seeded(config.seed_history.iter().cloned()),
            fs,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&TerminalConfig::default())
    }
}

/// Run a command's handler
pub fn execute(cmd: Command, args: &[String], state: &Session) -> ShellResult<BuiltinResult> {
    match cmd {
        Command::Help => Ok(builtin_help(args)),
        Command::Ls => builtin_ls(args, state),
        Command::Pwd => Ok(BuiltinResult::Success(state.cwd.clone())),
        Command::Cd => builtin_cd(args, state),
        Command::Cat => builtin_cat(args),
        Command::Whoami => Ok(BuiltinResult::Success(state.user.clone())),
        Command::Date => Ok(builtin_date()),
        Command::Echo => Ok(BuiltinResult::Success(args.join(" "))),
        Command::Clear => Ok(BuiltinResult::Clear),
        Command::History => Ok(BuiltinResult::Success(state.history.listing())),
        Command::About => Ok(BuiltinResult::Success(content::ABOUT.into())),
        Command::Projects => Ok(BuiltinResult::Success(content::PROJECTS.into())),
        Command::Skills => Ok(BuiltinResult::Success(content::SKILLS.into())),
        Command::Contact => Ok(BuiltinResult::Success(content::CONTACT.into())),
        Command::Resume => builtin_resume(state),
    }
}

/// help - list commands or describe one
fn builtin_help(args: &[String]) -> BuiltinResult {
    match args.first() {
        Some(name) => BuiltinResult::Success(registry::help_for(name)),
        None => BuiltinResult::Success(registry::help_listing()),
    }
}

/// ls - list a directory
fn builtin_ls(args: &[String], state: &Session) -> ShellResult<BuiltinResult> {
    let mut long = false;
    let mut target = None;

    for arg in args {
        match arg.strip_prefix('-') {
            Some(flags) if !flags.is_empty() => {
                // -a is accepted; the tree has no hidden entries
                if flags.contains('l') {
                    long = true;
                }
            }
            _ => {
                if target.is_none() {
                    target = Some(arg.as_str());
                }
            }
        }
    }

    let shown = target.unwrap_or(state.cwd.as_str());
    let path = vfs::resolve_path(&state.cwd, shown);
    let entries = state
        .fs
        .list(&path)
        .ok_or_else(|| ShellError::CannotAccess(shown.to_string()))?;

    if entries.is_empty() {
        return Ok(BuiltinResult::Success("Directory is empty".into()));
    }

    if long {
        let mut out = format!("total {}", entries.len());
        for entry in &entries {
            out.push_str(&format!(
                "\n{}  1 {user} {user}  {:>8} {} {}",
                entry.node.permissions(),
                entry.node.size_label(),
                entry.node.modified_label(),
                entry.display_name(),
                user = state.user,
            ));
        }
        Ok(BuiltinResult::Success(out))
    } else {
        let names: Vec<String> = entries.iter().map(|e| e.display_name()).collect();
        Ok(BuiltinResult::Success(names.join("  ")))
    }
}

/// cd - change directory
fn builtin_cd(args: &[String], state: &Session) -> ShellResult<BuiltinResult> {
    let (shown, target) = match args.first() {
        Some(arg) => (arg.as_str(), vfs::resolve_path(&state.cwd, arg)),
        None => (state.home.as_str(), state.home.clone()),
    };

    if state.fs.is_dir(&target) {
        Ok(BuiltinResult::Cd(target))
    } else {
        Err(ShellError::NoSuchDirectory(shown.to_string()))
    }
}

/// cat - print a canned file
fn builtin_cat(args: &[String]) -> ShellResult<BuiltinResult> {
    let name = args.first().ok_or(ShellError::MissingOperand {
        command: "cat",
        what: "file",
    })?;

    content::file(name)
        .map(|body| BuiltinResult::Success(body.to_string()))
        .ok_or_else(|| ShellError::NoSuchFile(name.clone()))
}

/// date - current local time
fn builtin_date() -> BuiltinResult {
    let now = chrono::Local::now();
    BuiltinResult::Success(now.format("%a %b %d %Y %H:%M:%S GMT%z").to_string())
}

/// resume - open the resume link
fn builtin_resume(state: &Session) -> ShellResult<BuiltinResult> {
    if state.resume_url.is_empty() {
        return Err(ShellError::ResumeUnavailable);
    }
    Ok(BuiltinResult::Open {
        url: state.resume_url.clone(),
        message: content::RESUME_OPENING.to_string(),
    })
}
