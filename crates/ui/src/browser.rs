//! web-sys implementations of the panel's collaborator ports.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlIFrameElement, Storage};

use lissajous_web_panel::{FrameSource, PreferenceStore, SubmitIndicator, Theme, ThemeScreen};

/// DOM id of the loading indicator
pub const LOADING_ID: &str = "loading";
/// DOM id of the submission trigger button
pub const GENERATE_BUTTON_ID: &str = "generate-btn";
/// DOM id of the theme toggle control
pub const THEME_TOGGLE_ID: &str = "themeToggle";
/// DOM id of the theme icon glyph
pub const THEME_ICON_ID: &str = "themeIcon";
/// Attribute carrying the applied theme on `<body>`
const THEME_ATTR: &str = "data-theme";

/// The embedded plot frame.
pub struct IframeFrame {
    frame: HtmlIFrameElement,
}

impl IframeFrame {
    pub fn new(frame: HtmlIFrameElement) -> Self {
        Self { frame }
    }
}

impl FrameSource for IframeFrame {
    fn src(&self) -> Option<String> {
        self.frame.get_attribute("src")
    }

    fn set_src(&self, url: &str) {
        self.frame.set_src(url);
    }
}

/// localStorage-backed preference store. Storage can be absent or
/// blocked; reads degrade to "no value" and writes are dropped.
pub struct StoragePrefs {
    storage: Option<Storage>,
}

impl StoragePrefs {
    pub fn from_window() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }
}

impl PreferenceStore for StoragePrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.storage
            .as_ref()
            .and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Theme marker on `<body>` plus the toggle icon glyph.
pub struct DocumentTheme {
    doc: Document,
}

impl DocumentTheme {
    pub fn new(doc: Document) -> Self {
        Self { doc }
    }
}

impl ThemeScreen for DocumentTheme {
    fn applied(&self) -> Option<Theme> {
        self.doc
            .body()
            .and_then(|body| body.get_attribute(THEME_ATTR))
            .map(|name| Theme::from_name(&name))
    }

    fn apply(&self, theme: Theme) {
        if let Some(body) = self.doc.body() {
            let _ = body.set_attribute(THEME_ATTR, theme.name());
        }
    }

    fn set_icon(&self, class: &str) {
        if let Some(el) = self.doc.get_element_by_id(THEME_ICON_ID) {
            el.set_class_name(class);
        }
    }
}

/// Loading indicator and trigger button pair.
pub struct PanelIndicator {
    doc: Document,
}

impl PanelIndicator {
    pub fn new(doc: Document) -> Self {
        Self { doc }
    }
}

impl SubmitIndicator for PanelIndicator {
    fn set_submitting(&self, submitting: bool) {
        if let Some(el) = self.doc.get_element_by_id(LOADING_ID) {
            if let Ok(html_el) = el.dyn_into::<HtmlElement>() {
                let display = if submitting { "block" } else { "none" };
                let _ = html_el.style().set_property("display", display);
            }
        }
        if let Some(el) = self.doc.get_element_by_id(GENERATE_BUTTON_ID) {
            if let Ok(button) = el.dyn_into::<HtmlButtonElement>() {
                button.set_disabled(submitting);
            }
        }
    }
}
