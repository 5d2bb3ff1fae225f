//! Browser runtime integration
//!
//! requestAnimationFrame drives the terminal: each frame ticks its timers
//! with the frame timestamp and renders whatever changed.
//!
//! Page lifecycle:
//! - `pagehide` pauses the loop. A page that is really going away also
//!   resets the terminal, cancelling pending output.
//! - `pageshow` from the back/forward cache resumes it.

use crate::console_log;
use crate::terminal::WebTerminal;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::PageTransitionEvent;

/// State for the animation frame loop
struct RuntimeState {
    /// Callback for requestAnimationFrame (stored to prevent GC)
    frame_closure: Option<Closure<dyn FnMut(f64)>>,
    /// Is the runtime running?
    running: bool,
    /// A frame is requested and has not fired yet
    frame_pending: bool,
}

/// Handle to a frame loop
#[derive(Clone)]
pub struct Runtime {
    state: Rc<RefCell<RuntimeState>>,
}

impl Runtime {
    /// Start ticking `term` every frame
    pub fn start(term: Rc<RefCell<WebTerminal>>) -> Self {
        let state = Rc::new(RefCell::new(RuntimeState {
            frame_closure: None,
            running: true,
            frame_pending: false,
        }));

        console_log!("[runtime] Starting frame loop...");

        let frame_state = Rc::clone(&state);
        let closure = Closure::wrap(Box::new(move |timestamp: f64| {
            frame_tick(&frame_state, &term, timestamp);
        }) as Box<dyn FnMut(f64)>);

        // The closure holds the state that holds the closure; the loop lives
        // as long as the page does
        state.borrow_mut().frame_closure = Some(closure);
        request_animation_frame(&state);

        Self { state }
    }

    /// Stop after the current frame
    pub fn stop(&self) {
        self.state.borrow_mut().running = false;
        console_log!("[runtime] Stopped");
    }

    /// Restart a stopped loop
    pub fn resume(&self) {
        if self.is_running() {
            return;
        }
        self.state.borrow_mut().running = true;
        request_animation_frame(&self.state);
        console_log!("[runtime] Resumed");
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().running
    }
}

/// Request the next animation frame, unless one is already on its way
fn request_animation_frame(state: &Rc<RefCell<RuntimeState>>) {
    let Some(window) = web_sys::window() else {
        console_log!("[runtime] No window object");
        return;
    };

    let mut state = state.borrow_mut();
    if state.frame_pending {
        return;
    }
    if let Some(ref closure) = state.frame_closure
        && window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .is_ok()
    {
        state.frame_pending = true;
    }
}

/// Called every frame by requestAnimationFrame
fn frame_tick(state: &Rc<RefCell<RuntimeState>>, term: &Rc<RefCell<WebTerminal>>, timestamp: f64) {
    {
        let mut state = state.borrow_mut();
        state.frame_pending = false;
        if !state.running {
            return;
        }
    }

    // A key handler may hold the terminal; skip the frame and catch up next time
    if let Ok(mut term) = term.try_borrow_mut() {
        term.tick(timestamp);
    }

    request_animation_frame(state);
}

/// Pause on `pagehide`, resume on `pageshow` from the back/forward cache.
/// The listeners live for the page lifetime.
pub fn watch_page_lifecycle(
    runtime: &Runtime,
    term: &Rc<RefCell<WebTerminal>>,
) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    // Page hide
    {
        let runtime = runtime.clone();
        let term = Rc::clone(term);
        let closure = Closure::wrap(Box::new(move |event: PageTransitionEvent| {
            runtime.stop();
            if event.persisted() {
                return;
            }
            if let Ok(mut term) = term.try_borrow_mut() {
                term.reset();
            }
        }) as Box<dyn FnMut(_)>);

        window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Page show
    {
        let runtime = runtime.clone();
        let closure = Closure::wrap(Box::new(move |event: PageTransitionEvent| {
            if event.persisted() {
                runtime.resume();
            }
        }) as Box<dyn FnMut(_)>);

        window.add_event_listener_with_callback("pageshow", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}
