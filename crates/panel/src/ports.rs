//! Collaborator ports for the browser environment.
//!
//! Production implementations live in the ui crate; [`crate::memory`]
//! provides in-memory versions for tests. All access happens on the
//! single UI thread, so the ports take `&self` and implementations use
//! interior mutability where they mutate.

/// Read/write access to the embedded plot frame's source URL.
pub trait FrameSource {
    /// Current src, if the frame has one
    fn src(&self) -> Option<String>;

    /// Repoint the frame at a new document
    fn set_src(&self, url: &str);
}

/// Durable string key-value store (browser localStorage in production).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);
}

/// Busy state surfaced to the user while a submission is in flight:
/// loading indicator shown, trigger button disabled.
pub trait SubmitIndicator {
    fn set_submitting(&self, submitting: bool);
}
