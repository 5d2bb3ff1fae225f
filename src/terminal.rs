//! DOM terminal view
//!
//! Renders a `shell::Terminal` into plain elements:
//!
//! ```text
//! <div class="terminal">
//!   <div class="terminal-output">   one div per log entry
//!   <div class="terminal-input-line">
//!     <span class="terminal-prompt">$ </span><input class="terminal-input">
//! ```
//!
//! The input element does its own text editing. Only Enter, ArrowUp,
//! ArrowDown and Tab are routed to the model.

use crate::config::TerminalConfig;
use crate::console_log;
use crate::shell::{LineKind, RenderOp, Terminal};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement, KeyboardEvent, Window};

/// Where the widget goes, tried in order
const MOUNT_SELECTORS: [&str; 2] = [".contact-terminal .terminal-body", "body"];

/// Attribute holding each entry's `LineId`
const LINE_ATTR: &str = "data-line";

/// Keys the model handles; everything else stays with the input element
const ROUTED_KEYS: [&str; 4] = ["Enter", "ArrowUp", "ArrowDown", "Tab"];

/// Terminal model bound to DOM elements
pub struct WebTerminal {
    model: Terminal,
    window: Window,
    output: Element,
    input: HtmlInputElement,
}

impl WebTerminal {
    /// Build the widget and attach it to the page
    pub fn mount(config: TerminalConfig) -> Result<Rc<RefCell<Self>>, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let host = find_host(&document)?;

        let root = document.create_element("div")?;
        root.set_class_name("terminal");

        let output = document.create_element("div")?;
        output.set_class_name("terminal-output");

        let input_line = document.create_element("div")?;
        input_line.set_class_name("terminal-input-line");

        let prompt = document.create_element("span")?;
        prompt.set_class_name("terminal-prompt");
        prompt.set_text_content(Some(&config.prompt));

        let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
        input.set_class_name("terminal-input");
        input.set_attribute("type", "text")?;
        input.set_attribute("autocomplete", "off")?;
        input.set_attribute("spellcheck", "false")?;
        input.set_attribute("aria-label", "Terminal input")?;

        input_line.append_child(&prompt)?;
        input_line.append_child(&input)?;
        root.append_child(&output)?;
        root.append_child(&input_line)?;
        host.append_child(&root)?;

        let term = Rc::new(RefCell::new(Self {
            model: Terminal::new(config),
            window,
            output,
            input,
        }));

        install_listeners(&term, &root)?;
        term.borrow_mut().flush();

        console_log!("[terminal] Mounted");
        Ok(term)
    }

    /// Advance typing to host time `now` and render
    pub fn tick(&mut self, now: f64) {
        self.model.tick(now);
        self.flush();
    }

    /// Route a key to the model. Returns true if it was consumed.
    fn key_down(&mut self, key: &str, ctrl: bool) -> bool {
        if !ROUTED_KEYS.contains(&key) {
            return false;
        }
        self.model.sync_input(&self.input.value());
        let consumed = self.model.handle_key(key, ctrl);
        self.flush();
        consumed
    }

    /// Abandon the session and any output still being typed
    pub fn reset(&mut self) {
        self.model.reset();
        self.flush();
    }

    pub fn focus(&self) {
        let _ = self.input.focus();
    }

    /// Apply pending render ops
    fn flush(&mut self) {
        let ops = self.model.take_ops();
        if ops.is_empty() {
            return;
        }
        for op in ops {
            if let Err(e) = self.apply(op) {
                console_log!("[terminal] Render failed: {:?}", e);
            }
        }
        self.output.set_scroll_top(self.output.scroll_height());
    }

    fn apply(&mut self, op: RenderOp) -> Result<(), JsValue> {
        match op {
            RenderOp::Append(id, line) => {
                let document = self
                    .window
                    .document()
                    .ok_or_else(|| JsValue::from_str("no document"))?;
                let div = document.create_element("div")?;
                div.set_class_name(line_class(line.kind));
                div.set_attribute(LINE_ATTR, &id.0.to_string())?;
                div.set_text_content(Some(&line.text));
                self.output.append_child(&div)?;
            }
            RenderOp::Extend(id, text) => {
                let selector = format!("[{}=\"{}\"]", LINE_ATTR, id.0);
                if let Some(entry) = self.output.query_selector(&selector)? {
                    let mut current = entry.text_content().unwrap_or_default();
                    current.push_str(&text);
                    entry.set_text_content(Some(&current));
                }
            }
            RenderOp::DropOldest => {
                if let Some(first) = self.output.first_element_child() {
                    first.remove();
                }
            }
            RenderOp::Clear => self.output.set_inner_html(""),
            RenderOp::SetInput(text) => self.input.set_value(&text),
            RenderOp::OpenUrl(url) => {
                self.window.open_with_url_and_target(&url, "_blank")?;
            }
        }
        Ok(())
    }
}

fn line_class(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Input => "terminal-line command-line",
        LineKind::Output => "terminal-line output",
        LineKind::Error => "terminal-line output error",
        LineKind::Hint => "terminal-line hint",
        LineKind::Notice => "terminal-line output notice",
    }
}

fn find_host(document: &Document) -> Result<Element, JsValue> {
    for selector in MOUNT_SELECTORS {
        if let Some(el) = document.query_selector(selector)? {
            return Ok(el);
        }
    }
    Err(JsValue::from_str("no element to mount the terminal into"))
}

/// Keyboard and focus listeners. They live for the page lifetime.
fn install_listeners(term: &Rc<RefCell<WebTerminal>>, root: &Element) -> Result<(), JsValue> {
    // Key down on the input
    {
        let handle = Rc::clone(term);
        let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            let Ok(mut term) = handle.try_borrow_mut() else {
                return;
            };
            if term.key_down(&event.key(), event.ctrl_key() || event.meta_key()) {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);

        term.borrow()
            .input
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Click anywhere in the widget focuses the input
    {
        let handle = Rc::clone(term);
        let closure = Closure::wrap(Box::new(move |_event: web_sys::MouseEvent| {
            if let Ok(term) = handle.try_borrow() {
                term.focus();
            }
        }) as Box<dyn FnMut(_)>);

        root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}
