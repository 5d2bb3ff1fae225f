//! Terminal configuration
//!
//! Every field has a default, so an empty `{}` (or no file at all) gives
//! the stock portfolio terminal. A site can ship a `terminal.json` next to
//! the page to change the prompt, the starting directory, or the tree.

use crate::vfs::ToyFs;
use serde::Deserialize;
use std::fmt;

/// Result type for config loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Config loading errors
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Could not read the config source
    Io(String),
    /// The config is not valid JSON for this schema
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(s) => write!(f, "config I/O error: {}", s),
            ConfigError::Parse(s) => write!(f, "config parse error: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Terminal configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Prompt printed before echoed commands
    pub prompt: String,
    /// Reported by `whoami` and used as owner in `ls -l`
    pub user: String,
    /// Where `cd` with no argument goes
    pub home: String,
    /// Working directory at session start
    pub start_dir: String,
    /// Delay between typed output characters
    pub typing_delay_ms: f64,
    /// Output log bound; oldest lines are dropped past this
    pub max_lines: usize,
    /// History entries present before the first command
    pub seed_history: Vec<String>,
    /// Target of the `resume` command. Empty disables it.
    pub resume_url: String,
    /// Tree override. None uses the built-in portfolio tree.
    pub filesystem: Option<ToyFs>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: "$ ".to_string(),
            user: "developer".to_string(),
            home: "/home/developer".to_string(),
            start_dir: "/home/developer/portfolio".to_string(),
            typing_delay_ms: 20.0,
            max_lines: 1000,
            seed_history: ["help", "about", "skills", "projects", "ls", "pwd"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            resume_url: "#".to_string(),
            filesystem: None,
        }
    }
}

impl TerminalConfig {
    /// Parse from a JSON string
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and parse a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &str) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path, e)))?;
        Self::from_json(&json)
    }

    /// Same config with no seeded history
    pub fn without_seed_history(mut self) -> Self {
        self.seed_history.clear();
        self
    }
}

/// Fetch `terminal.json` relative to the page, falling back to defaults
#[cfg(target_arch = "wasm32")]
pub async fn fetch_or_default(url: &str) -> TerminalConfig {
    match fetch_json(url).await {
        Ok(json) => TerminalConfig::from_json(&json).unwrap_or_else(|e| {
            crate::console_log!("[config] {}, using defaults", e);
            TerminalConfig::default()
        }),
        Err(e) => {
            crate::console_log!("[config] {} not loaded ({}), using defaults", url, e);
            TerminalConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_json(url: &str) -> ConfigResult<String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or_else(|| ConfigError::Io("no window".into()))?;
    let response: web_sys::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| ConfigError::Io(format!("fetch failed: {:?}", e)))?
        .dyn_into()
        .map_err(|_| ConfigError::Io("Failed to cast to Response".into()))?;

    if !response.ok() {
        return Err(ConfigError::Io(format!("HTTP {}", response.status())));
    }

    let text = response
        .text()
        .map_err(|e| ConfigError::Io(format!("Failed to read body: {:?}", e)))?;
    JsFuture::from(text)
        .await
        .map_err(|e| ConfigError::Io(format!("Failed to read body: {:?}", e)))?
        .as_string()
        .ok_or_else(|| ConfigError::Parse("body is not text".into()))
}
