//! Light/dark theme toggle wiring.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use lissajous_web_panel::ThemeToggle;

use crate::browser::{DocumentTheme, StoragePrefs, THEME_TOGGLE_ID};
use crate::dom::get_document;

/// Apply the persisted theme and wire the toggle control.
pub fn init() -> Result<(), JsValue> {
    let Some(doc) = get_document() else {
        return Ok(());
    };

    let toggle = ThemeToggle::new(DocumentTheme::new(doc.clone()), StoragePrefs::from_window());
    toggle.initialize();

    // The toggle control is optional; display-only pages still get the
    // persisted theme applied above.
    if let Some(control) = doc.get_element_by_id(THEME_TOGGLE_ID) {
        let cb = Closure::wrap(Box::new(move || {
            toggle.toggle();
        }) as Box<dyn FnMut()>);
        control.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    Ok(())
}
