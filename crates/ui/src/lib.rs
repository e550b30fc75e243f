//! lissajous-web browser frontend
//!
//! WASM entry point wiring the two independent page components: the
//! plot parameter control panel and the light/dark theme toggle. Module
//! scripts run once parsing is done, so both components can initialize
//! straight from the start function.

mod browser;
mod dom;
mod fetch;
mod panel;
mod theme;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    // The components are unrelated; each degrades to a no-op when its
    // DOM dependencies are missing from the page.
    theme::init()?;
    panel::init()?;

    Ok(())
}
