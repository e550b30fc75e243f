//! Plot submission flow.
//!
//! One submission runs Idle → Submitting → Idle: the busy state is
//! acquired up front and released on every exit path, so the trigger
//! button and loading indicator never stick.

use anyhow::Result;

use crate::backend::{cache_busted, PlotBackend};
use crate::params::PlotParams;
use crate::ports::{FrameSource, SubmitIndicator};

/// Submits plot parameters to the backend and repoints the frame at the
/// regenerated document.
pub struct SubmitFlow<B, F, I> {
    backend: B,
    frame: F,
    indicator: I,
}

impl<B, F, I> SubmitFlow<B, F, I>
where
    B: PlotBackend,
    F: FrameSource,
    I: SubmitIndicator,
{
    pub fn new(backend: B, frame: F, indicator: I) -> Self {
        Self {
            backend,
            frame,
            indicator,
        }
    }

    /// Submit `params`, cache-busting the resulting frame URL with
    /// `now_ms` (current milliseconds timestamp, supplied by the caller).
    ///
    /// Errors are returned for the caller to report; the frame is only
    /// touched on success.
    pub async fn submit(&self, params: &PlotParams, now_ms: u64) -> Result<()> {
        let _busy = Submitting::acquire(&self.indicator);
        let response = self.backend.generate(params).await?;
        self.frame.set_src(&cache_busted(&response.html_path, now_ms));
        Ok(())
    }
}

/// Guard holding the busy state; released on drop regardless of how the
/// submission settled.
struct Submitting<'a, I: SubmitIndicator> {
    indicator: &'a I,
}

impl<'a, I: SubmitIndicator> Submitting<'a, I> {
    fn acquire(indicator: &'a I) -> Self {
        indicator.set_submitting(true);
        Self { indicator }
    }
}

impl<I: SubmitIndicator> Drop for Submitting<'_, I> {
    fn drop(&mut self) {
        self.indicator.set_submitting(false);
    }
}
