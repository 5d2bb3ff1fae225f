//! termfolio - the interactive terminal of a portfolio site, in Rust
//!
//! A simulated shell over a small read-only tree: `help`, `ls`, `cd`, `cat`,
//! `projects`, `skills`, `resume` and friends, with history, Tab completion
//! and typed-out responses.
//!
//! Design principles:
//! - The shell and terminal model are plain Rust with no host access; they
//!   are tested natively
//! - The browser layer only renders `RenderOp`s and forwards keys
//! - No module-level state: the widget owns its session and timers
//!
//! Platform support:
//! - Browser (wasm32-unknown-unknown): DOM widget, localStorage settings
//! - Native: `termfolio-cli` REPL, JSON settings file

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod config;
pub mod platform;
pub mod settings;
pub mod shell;
pub mod timer;
pub mod vfs;

#[cfg(target_arch = "wasm32")]
pub mod terminal;

#[cfg(target_arch = "wasm32")]
pub mod runtime;

#[cfg(target_arch = "wasm32")]
mod boot;

/// Initialize panic hook for better error messages in browser console
#[cfg(target_arch = "wasm32")]
fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Boot the page. This is the WASM entry point.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    init_panic_hook();
    boot::boot();
}

/// Console logging helper
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);
}

/// Log to browser console (WASM)
#[cfg(target_arch = "wasm32")]
#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => {
        $crate::log(&format!($($t)*))
    };
}

/// Log to stderr (native)
#[cfg(not(target_arch = "wasm32"))]
#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => {
        eprintln!($($t)*)
    };
}
