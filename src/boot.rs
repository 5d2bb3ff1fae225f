//! Boot sequence
//!
//! Theme first so the page never flashes the wrong colours, then the
//! terminal once its config has arrived.

use crate::config;
use crate::console_log;
use crate::platform::web::LocalStorage;
use crate::platform::{KeyValueStore, MemoryStore};
use crate::runtime::{self, Runtime};
use crate::settings::Theme;
use crate::terminal::WebTerminal;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Config file fetched relative to the page
const CONFIG_URL: &str = "terminal.json";

/// Boot the page
pub fn boot() {
    match LocalStorage::open() {
        Ok(store) => init_theme(store),
        Err(e) => {
            console_log!("[boot] {}, theme will not persist", e);
            init_theme(MemoryStore::new());
        }
    }

    wasm_bindgen_futures::spawn_local(async {
        let config = config::fetch_or_default(CONFIG_URL).await;
        if let Err(e) = init_terminal(config) {
            web_sys::console::error_1(&format!("[boot] Terminal init failed: {:?}", e).into());
        }
    });
}

/// Apply the stored theme and wire the toggle button
fn init_theme<S: KeyValueStore + 'static>(mut store: S) {
    let mut current = Theme::load(&store);
    apply_theme(current);

    let Some(button) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("theme-toggle"))
    else {
        return;
    };

    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        current = current.toggle();
        apply_theme(current);
        if let Err(e) = current.save(&mut store) {
            console_log!("[boot] Theme not saved: {}", e);
        }
    }) as Box<dyn FnMut(_)>);

    let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// Mount the terminal and start its frame loop
fn init_terminal(config: config::TerminalConfig) -> Result<(), JsValue> {
    let term = WebTerminal::mount(config)?;
    let runtime = Runtime::start(Rc::clone(&term));
    runtime::watch_page_lifecycle(&runtime, &term)?;

    console_log!("[boot] Terminal ready");
    Ok(())
}
