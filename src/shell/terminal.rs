//! Terminal - the interactive widget, minus the pixels
//!
//! Provides:
//! - Output log with bounded scrollback
//! - Input line with editing, history navigation and Tab completion
//! - Typed output, one character per timer period
//! - At most one command in flight
//!
//! The model never touches the host. Every visible change is queued as a
//! `RenderOp`; the view drains them with `take_ops` and applies them.

use super::executor::Executor;
use super::registry::Command;
use crate::config::TerminalConfig;
use crate::timer::{TimerId, TimerQueue};
use std::collections::VecDeque;

/// Shown when the terminal mounts
pub const WELCOME: &str = "Welcome to the interactive terminal! Type commands to explore.";

/// Left behind by `clear`
pub const CLEARED: &str = "Terminal cleared.";

/// What a log entry holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Echoed prompt and command
    Input,
    /// Command output
    Output,
    /// Error text from a command
    Error,
    /// Tab completion candidates
    Hint,
    /// Terminal status messages
    Notice,
}

/// Identifies a log entry for the lifetime of the terminal. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(pub u64);

/// An entry in the output log. Output entries may span several lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalLine {
    pub text: String,
    pub kind: LineKind,
}

impl TerminalLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// A change the view must apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOp {
    /// Add an entry at the bottom
    Append(LineId, TerminalLine),
    /// Add text to an existing entry
    Extend(LineId, String),
    /// Remove the top entry
    DropOldest,
    /// Remove every entry
    Clear,
    /// Replace the input field's text
    SetInput(String),
    /// Open a link in a new tab
    OpenUrl(String),
}

/// Input gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    Idle,
    /// A command's output is still being typed; submits are dropped
    Processing,
}

/// Output being revealed
#[derive(Debug)]
struct TypingJob {
    /// Entry the text is revealed into
    line: LineId,
    remaining: VecDeque<char>,
    timer: TimerId,
}

/// Terminal state
pub struct Terminal {
    config: TerminalConfig,

    /// Output log
    lines: VecDeque<(LineId, TerminalLine)>,
    next_line: u64,

    /// Current input line
    input: String,

    /// Cursor position in input (byte offset, on a char boundary)
    cursor: usize,

    /// Shell executor
    executor: Executor,

    state: InputState,
    typing: Option<TypingJob>,
    timers: TimerQueue,

    /// Last host time seen by `tick`
    now: f64,

    /// Changes not yet applied by the view
    ops: Vec<RenderOp>,
}

impl Terminal {
    pub fn new(config: TerminalConfig) -> Self {
        let mut term = Self {
            executor: Executor::new(&config),
            config,
            lines: VecDeque::new(),
            next_line: 0,
            input: String::new(),
            cursor: 0,
            state: InputState::Idle,
            typing: None,
            timers: TimerQueue::new(),
            now: 0.0,
            ops: Vec::new(),
        };
        term.push_line(TerminalLine::new(LineKind::Notice, WELCOME));
        term
    }

    /// Append an entry to the log, trimming the oldest past the bound
    fn push_line(&mut self, line: TerminalLine) -> LineId {
        let id = LineId(self.next_line);
        self.next_line += 1;

        self.lines.push_back((id, line.clone()));
        self.ops.push(RenderOp::Append(id, line));

        while self.lines.len() > self.config.max_lines.max(1) {
            self.lines.pop_front();
            self.ops.push(RenderOp::DropOldest);
        }
        id
    }

    fn line_mut(&mut self, id: LineId) -> Option<&mut TerminalLine> {
        self.lines
            .iter_mut()
            .rev()
            .find(|(line_id, _)| *line_id == id)
            .map(|(_, line)| line)
    }

    /// Print an entry without going through the shell
    pub fn print(&mut self, kind: LineKind, text: &str) {
        self.push_line(TerminalLine::new(kind, text));
    }

    fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.cursor = self.input.len();
        self.ops.push(RenderOp::SetInput(self.input.clone()));
    }

    /// Replace the input text (host input fields edit text natively)
    pub fn sync_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.cursor = self.input.len();
    }

    /// Handle a key press. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: &str, ctrl: bool) -> bool {
        if ctrl {
            return false;
        }

        match key {
            "Enter" => self.submit(),
            "ArrowUp" => self.history_prev(),
            "ArrowDown" => self.history_next(),
            "Tab" => self.complete(),
            "Backspace" => {
                if let Some(c) = self.input[..self.cursor].chars().next_back() {
                    self.cursor -= c.len_utf8();
                    self.input.remove(self.cursor);
                }
            }
            "Delete" => {
                if self.cursor < self.input.len() {
                    self.input.remove(self.cursor);
                }
            }
            "ArrowLeft" => {
                if let Some(c) = self.input[..self.cursor].chars().next_back() {
                    self.cursor -= c.len_utf8();
                }
            }
            "ArrowRight" => {
                if let Some(c) = self.input[self.cursor..].chars().next() {
                    self.cursor += c.len_utf8();
                }
            }
            "Home" => self.cursor = 0,
            "End" => self.cursor = self.input.len(),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if !c.is_control() => {
                        self.input.insert(self.cursor, c);
                        self.cursor += c.len_utf8();
                    }
                    _ => return false,
                }
            }
        }
        true
    }

    /// Run the current input line
    fn submit(&mut self) {
        if self.state == InputState::Processing {
            return;
        }

        let line = std::mem::take(&mut self.input);
        self.cursor = 0;
        self.ops.push(RenderOp::SetInput(String::new()));

        let echoed = format!("{}{}", self.config.prompt, line.trim());
        self.push_line(TerminalLine::new(LineKind::Input, echoed));

        let result = self.executor.execute_line(&line);

        if result.clear {
            self.lines.clear();
            self.ops.push(RenderOp::Clear);
            self.push_line(TerminalLine::new(LineKind::Notice, CLEARED));
            return;
        }

        if let Some(url) = &result.open_url {
            self.ops.push(RenderOp::OpenUrl(url.clone()));
        }

        let text = result.text();
        if text.is_empty() {
            return;
        }

        let kind = if result.is_error() && result.output.is_empty() {
            LineKind::Error
        } else {
            LineKind::Output
        };
        self.type_out(kind, &text);
    }

    /// Start revealing `text` as a new entry
    fn type_out(&mut self, kind: LineKind, text: &str) {
        if self.config.typing_delay_ms <= 0.0 {
            self.push_line(TerminalLine::new(kind, text));
            return;
        }

        let line = self.push_line(TerminalLine::new(kind, ""));
        let timer = self
            .timers
            .schedule_interval(self.config.typing_delay_ms, self.now);
        self.typing = Some(TypingJob {
            line,
            remaining: text.chars().collect(),
            timer,
        });
        self.state = InputState::Processing;
    }

    /// Advance timers to host time `now` (monotonic milliseconds)
    pub fn tick(&mut self, now: f64) {
        self.now = self.now.max(now);

        let fired = self.timers.tick(self.now);
        let Some(mut job) = self.typing.take() else {
            return;
        };

        let mut revealed = String::new();
        for id in fired {
            if id != job.timer {
                continue;
            }
            match job.remaining.pop_front() {
                Some(c) => revealed.push(c),
                None => break,
            }
        }

        // Entries printed meanwhile (hints) stay below; the text goes to its
        // own entry. If that entry was trimmed away, the rest is dropped.
        let target = job.line;
        let attached = match self.line_mut(target) {
            Some(line) => {
                line.text.push_str(&revealed);
                true
            }
            None => false,
        };
        if attached && !revealed.is_empty() {
            self.ops.push(RenderOp::Extend(target, revealed));
        }

        if attached && !job.remaining.is_empty() {
            self.typing = Some(job);
        } else {
            self.timers.cancel(job.timer);
            self.state = InputState::Idle;
        }
    }

    /// Navigate to the previous history entry
    fn history_prev(&mut self) {
        if let Some(entry) = self.executor.state.history.older().map(str::to_string) {
            self.set_input(&entry);
        }
    }

    /// Navigate to the next history entry; past the newest, clear the input
    fn history_next(&mut self) {
        let entry = self
            .executor
            .state
            .history
            .newer()
            .map(str::to_string)
            .unwrap_or_default();
        self.set_input(&entry);
    }

    /// Complete the input as a command name
    fn complete(&mut self) {
        let matches = Command::completions(&self.input);
        match matches.as_slice() {
            [] => {}
            [only] => self.set_input(only),
            many => {
                let hint = many.join("  ");
                self.push_line(TerminalLine::new(LineKind::Hint, hint));
            }
        }
    }

    /// Start over with a fresh session. Pending output is cancelled, not
    /// left to finish against a stale log.
    pub fn reset(&mut self) {
        self.timers.cancel_all();
        self.typing = None;
        self.state = InputState::Idle;
        self.executor = Executor::new(&self.config);
        self.lines.clear();
        self.input.clear();
        self.cursor = 0;
        self.ops.push(RenderOp::Clear);
        self.ops.push(RenderOp::SetInput(String::new()));
        self.push_line(TerminalLine::new(LineKind::Notice, WELCOME));
    }

    /// Drain pending render operations
    pub fn take_ops(&mut self) -> Vec<RenderOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn lines(&self) -> impl Iterator<Item = &TerminalLine> {
        self.lines.iter().map(|(_, line)| line)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn prompt(&self) -> &str {
        &self.config.prompt
    }

    pub fn state(&self) -> InputState {
        self.state
    }

    pub fn is_processing(&self) -> bool {
        self.state == InputState::Processing
    }

    /// Timers still scheduled (typing in progress)
    pub fn pending_timers(&self) -> usize {
        self.timers.pending_count()
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new(TerminalConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant() -> Terminal {
        Terminal::new(TerminalConfig {
            typing_delay_ms: 0.0,
            ..TerminalConfig::default().without_seed_history()
        })
    }

    fn typed() -> Terminal {
        Terminal::new(TerminalConfig::default().without_seed_history())
    }

    fn enter(term: &mut Terminal, line: &str) {
        term.sync_input(line);
        term.handle_key("Enter", false);
    }

    fn last_text(term: &Terminal) -> &str {
        &term.lines.back().unwrap().1.text
    }

    #[test]
    fn test_terminal_new() {
        let term = instant();
        assert_eq!(term.line_count(), 1);
        assert_eq!(last_text(&term), WELCOME);
        assert!(term.input().is_empty());
    }

    #[test]
    fn test_terminal_input() {
        let mut term = instant();
        term.handle_key("h", false);
        term.handle_key("é", false);
        assert_eq!(term.input(), "hé");
        assert_eq!(term.cursor(), 3);
    }

    #[test]
    fn test_terminal_backspace() {
        let mut term = instant();
        term.sync_input("héllo");
        term.handle_key("Backspace", false);
        assert_eq!(term.input(), "héll");
        term.handle_key("Home", false);
        term.handle_key("ArrowRight", false);
        term.handle_key("ArrowRight", false);
        term.handle_key("Backspace", false);
        assert_eq!(term.input(), "hll");
        assert_eq!(term.cursor(), 1);
    }

    #[test]
    fn test_terminal_ignores_ctrl_and_named_keys() {
        let mut term = instant();
        assert!(!term.handle_key("c", true));
        assert!(!term.handle_key("Shift", false));
        assert!(term.input().is_empty());
    }

    #[test]
    fn test_terminal_echoes_command() {
        let mut term = instant();
        enter(&mut term, "pwd");
        let lines: Vec<_> = term.lines().cloned().collect();
        assert_eq!(lines[1], TerminalLine::new(LineKind::Input, "$ pwd"));
        assert_eq!(
            lines[2],
            TerminalLine::new(LineKind::Output, "/home/developer/portfolio")
        );
    }

    #[test]
    fn test_terminal_error_kind() {
        let mut term = instant();
        enter(&mut term, "cat missing.txt");
        let last = &term.lines.back().unwrap().1;
        assert_eq!(last.kind, LineKind::Error);
        assert!(last.text.contains("No such file"));
    }

    #[test]
    fn test_terminal_empty_line_echoes_prompt() {
        let mut term = instant();
        enter(&mut term, "");
        assert_eq!(last_text(&term), "$ ");
        assert!(!term.is_processing());
    }

    #[test]
    fn test_terminal_clear() {
        let mut term = instant();
        enter(&mut term, "about");
        enter(&mut term, "clear");
        assert_eq!(term.line_count(), 1);
        assert_eq!(last_text(&term), CLEARED);
        let ops = term.take_ops();
        assert!(ops.contains(&RenderOp::Clear));
    }

    #[test]
    fn test_terminal_history() {
        let mut term = instant();
        enter(&mut term, "echo one");
        enter(&mut term, "echo two");

        term.handle_key("ArrowUp", false);
        assert_eq!(term.input(), "echo two");
        term.handle_key("ArrowUp", false);
        assert_eq!(term.input(), "echo one");
        term.handle_key("ArrowDown", false);
        assert_eq!(term.input(), "echo two");
        term.handle_key("ArrowDown", false);
        assert_eq!(term.input(), "");
    }

    #[test]
    fn test_terminal_history_no_duplicates() {
        let mut term = instant();
        enter(&mut term, "echo test");
        enter(&mut term, "pwd");
        enter(&mut term, "echo test");
        assert_eq!(term.executor().state.history.len(), 2);
    }

    #[test]
    fn test_tab_single_match() {
        let mut term = instant();
        term.sync_input("WHO");
        term.handle_key("Tab", false);
        assert_eq!(term.input(), "whoami");
        assert_eq!(term.cursor(), 6);
    }

    #[test]
    fn test_tab_multiple_matches() {
        let mut term = instant();
        term.sync_input("c");
        let before = term.line_count();
        term.handle_key("Tab", false);
        assert_eq!(term.input(), "c");
        assert_eq!(term.line_count(), before + 1);
        let hint = &term.lines.back().unwrap().1;
        assert_eq!(hint.kind, LineKind::Hint);
        assert_eq!(hint.text, "cd  cat  clear  contact");
    }

    #[test]
    fn test_tab_no_match() {
        let mut term = instant();
        term.sync_input("xyz");
        let before = term.line_count();
        term.handle_key("Tab", false);
        assert_eq!(term.input(), "xyz");
        assert_eq!(term.line_count(), before);
    }

    #[test]
    fn test_max_lines_trimming() {
        let mut term = Terminal::new(TerminalConfig {
            typing_delay_ms: 0.0,
            max_lines: 5,
            ..TerminalConfig::default()
        });
        for i in 0..10 {
            term.print(LineKind::Output, &format!("line {}", i));
        }
        assert_eq!(term.line_count(), 5);
        assert_eq!(term.lines().next().unwrap().text, "line 5");
        let drops = term
            .take_ops()
            .iter()
            .filter(|op| **op == RenderOp::DropOldest)
            .count();
        assert_eq!(drops, 6);
    }

    // ============ typing ============

    #[test]
    fn test_typing_reveals_per_period() {
        let mut term = typed();
        enter(&mut term, "echo abc");
        assert!(term.is_processing());
        assert_eq!(last_text(&term), "");

        term.tick(20.0);
        assert_eq!(last_text(&term), "a");
        term.tick(40.0);
        assert_eq!(last_text(&term), "ab");
        term.tick(60.0);
        assert_eq!(last_text(&term), "abc");
        assert!(!term.is_processing());
        assert_eq!(term.pending_timers(), 0);
    }

    #[test]
    fn test_typing_catches_up_after_gap() {
        let mut term = typed();
        enter(&mut term, "echo hello");
        term.tick(1000.0);
        assert_eq!(last_text(&term), "hello");
        assert!(!term.is_processing());
    }

    #[test]
    fn test_typing_emits_extend_ops() {
        let mut term = typed();
        enter(&mut term, "echo hi");
        term.take_ops();
        term.tick(40.0);
        assert_eq!(term.take_ops(), vec![RenderOp::Extend(LineId(2), "hi".into())]);
    }

    #[test]
    fn test_tab_hint_while_typing() {
        let mut term = typed();
        enter(&mut term, "echo abcdef");
        term.tick(20.0);

        term.sync_input("c");
        term.handle_key("Tab", false);
        term.tick(10_000.0);

        let lines: Vec<_> = term.lines().cloned().collect();
        assert_eq!(lines[2], TerminalLine::new(LineKind::Output, "abcdef"));
        assert_eq!(
            lines[3],
            TerminalLine::new(LineKind::Hint, "cd  cat  clear  contact")
        );
        assert!(!term.is_processing());
    }

    #[test]
    fn test_extend_targets_typing_entry() {
        let mut term = typed();
        enter(&mut term, "echo xyz");
        term.print(LineKind::Notice, "meanwhile");
        term.take_ops();

        term.tick(60.0);
        assert_eq!(term.take_ops(), vec![RenderOp::Extend(LineId(2), "xyz".into())]);
        assert_eq!(last_text(&term), "meanwhile");
    }

    #[test]
    fn test_typing_entry_trimmed_away() {
        let mut term = Terminal::new(TerminalConfig {
            max_lines: 3,
            ..TerminalConfig::default().without_seed_history()
        });
        enter(&mut term, "echo hello");
        term.print(LineKind::Notice, "one");
        term.print(LineKind::Notice, "two");
        term.print(LineKind::Notice, "three");

        term.tick(20.0);
        assert!(!term.is_processing());
        assert_eq!(term.pending_timers(), 0);
        assert!(term.lines().all(|line| line.kind == LineKind::Notice));
    }

    #[test]
    fn test_submit_while_processing_is_dropped() {
        let mut term = typed();
        enter(&mut term, "echo first");
        enter(&mut term, "echo second");

        // Second line was not run, and stays in the input field
        assert_eq!(term.executor().state.history.len(), 1);
        assert_eq!(term.input(), "echo second");

        term.tick(10_000.0);
        assert_eq!(last_text(&term), "first");
    }

    #[test]
    fn test_clear_does_not_enter_processing() {
        let mut term = typed();
        enter(&mut term, "clear");
        assert!(!term.is_processing());
        assert_eq!(term.pending_timers(), 0);
    }

    #[test]
    fn test_reset_cancels_typing() {
        let mut term = typed();
        enter(&mut term, "about");
        term.tick(20.0);
        assert!(term.is_processing());

        term.reset();
        assert!(!term.is_processing());
        assert_eq!(term.pending_timers(), 0);
        term.take_ops();

        // No stale reveal after the reset
        term.tick(100_000.0);
        assert!(term.take_ops().is_empty());
        assert_eq!(last_text(&term), WELCOME);
    }

    #[test]
    fn test_reset_restores_session() {
        let mut term = instant();
        enter(&mut term, "cd projects");
        term.reset();
        assert_eq!(term.executor().cwd(), "/home/developer/portfolio");
        assert!(term.executor().state.history.is_empty());
    }

    #[test]
    fn test_resume_emits_open_url() {
        let mut term = instant();
        enter(&mut term, "resume");
        let ops = term.take_ops();
        assert!(ops.contains(&RenderOp::OpenUrl("#".into())));
    }
}
