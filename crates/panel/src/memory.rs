//! In-memory collaborators for testing
//!
//! Every port has a browser-free implementation here, so the panel and
//! theme flows can be unit tested deterministically. The doubles share
//! their state through `Rc`, letting a test keep a handle while the
//! flow under test owns a clone.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use anyhow::Result;
use async_trait::async_trait;

use crate::backend::{BackendError, PlotBackend, PlotResponse};
use crate::params::PlotParams;
use crate::ports::{FrameSource, PreferenceStore, SubmitIndicator};
use crate::theme::{Theme, ThemeScreen};

/// In-memory frame: records the current src.
#[derive(Clone, Default)]
pub struct MemoryFrame {
    src: Rc<RefCell<Option<String>>>,
}

impl MemoryFrame {
    /// Create a frame already pointing at a document
    pub fn with_src(url: &str) -> Self {
        let frame = Self::default();
        frame.set_src(url);
        frame
    }
}

impl FrameSource for MemoryFrame {
    fn src(&self) -> Option<String> {
        self.src.borrow().clone()
    }

    fn set_src(&self, url: &str) {
        *self.src.borrow_mut() = Some(url.to_string());
    }
}

/// In-memory preference store.
#[derive(Clone, Default)]
pub struct MemoryPrefs {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl PreferenceStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Indicator recording every busy-state transition.
#[derive(Clone, Default)]
pub struct MemoryIndicator {
    transitions: Rc<RefCell<Vec<bool>>>,
}

impl MemoryIndicator {
    /// All transitions seen so far, in order
    pub fn transitions(&self) -> Vec<bool> {
        self.transitions.borrow().clone()
    }

    /// Current busy state (false before any transition)
    pub fn is_submitting(&self) -> bool {
        self.transitions.borrow().last().copied().unwrap_or(false)
    }
}

impl SubmitIndicator for MemoryIndicator {
    fn set_submitting(&self, submitting: bool) {
        self.transitions.borrow_mut().push(submitting);
    }
}

/// In-memory theme screen: applied marker plus icon class.
#[derive(Clone, Default)]
pub struct MemoryScreen {
    applied: Rc<RefCell<Option<Theme>>>,
    icon: Rc<RefCell<Option<String>>>,
}

impl MemoryScreen {
    /// Current icon class, if one was set
    pub fn icon(&self) -> Option<String> {
        self.icon.borrow().clone()
    }
}

impl ThemeScreen for MemoryScreen {
    fn applied(&self) -> Option<Theme> {
        *self.applied.borrow()
    }

    fn apply(&self, theme: Theme) {
        *self.applied.borrow_mut() = Some(theme);
    }

    fn set_icon(&self, class: &str) {
        *self.icon.borrow_mut() = Some(class.to_string());
    }
}

/// Backend resolving every request with a fixed document path,
/// recording the parameters it saw.
#[derive(Clone)]
pub struct FixedBackend {
    path: String,
    seen: Rc<RefCell<Vec<PlotParams>>>,
}

impl FixedBackend {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            seen: Rc::default(),
        }
    }

    /// Parameter mappings received so far, in order
    pub fn seen(&self) -> Vec<PlotParams> {
        self.seen.borrow().clone()
    }
}

#[async_trait(?Send)]
impl PlotBackend for FixedBackend {
    async fn generate(&self, params: &PlotParams) -> Result<PlotResponse> {
        self.seen.borrow_mut().push(params.clone());
        Ok(PlotResponse {
            html_path: self.path.clone(),
        })
    }
}

/// Backend failing every request.
#[derive(Clone, Copy)]
pub struct FailingBackend {
    status: Option<u16>,
}

impl FailingBackend {
    /// Fail with a non-2xx HTTP status
    pub const fn http(status: u16) -> Self {
        Self {
            status: Some(status),
        }
    }

    /// Fail before any response arrives
    pub const fn transport() -> Self {
        Self { status: None }
    }
}

#[async_trait(?Send)]
impl PlotBackend for FailingBackend {
    async fn generate(&self, _params: &PlotParams) -> Result<PlotResponse> {
        match self.status {
            Some(code) => Err(BackendError::Status(code).into()),
            None => Err(BackendError::Transport("connection refused".to_string()).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefs_round_trip() {
        let prefs = MemoryPrefs::default();
        assert_eq!(prefs.get("theme"), None);
        prefs.set("theme", "dark");
        assert_eq!(prefs.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn frame_clones_share_state() {
        let frame = MemoryFrame::with_src("/plots/a.html");
        let observer = frame.clone();
        frame.set_src("/plots/b.html");
        assert_eq!(observer.src().as_deref(), Some("/plots/b.html"));
    }

    #[tokio::test]
    async fn failing_backend_reports_the_status() {
        let err = FailingBackend::http(503)
            .generate(&PlotParams::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BackendError>(),
            Some(BackendError::Status(503))
        ));
    }
}
