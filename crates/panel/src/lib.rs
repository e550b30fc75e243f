//! Plot parameter and theme state for lissajous-web
//!
//! The logic behind the browser control panel and the theme toggle,
//! written against injected collaborator ports so it can be tested
//! without a browser. The `ui` crate provides the web-sys
//! implementations of every port.

pub mod backend;
pub mod memory;
pub mod params;
pub mod ports;
pub mod submit;
pub mod theme;

pub use backend::{cache_busted, BackendError, PlotBackend, PlotResponse, GENERATE_ENDPOINT};
pub use params::{Param, PlotParams};
pub use ports::{FrameSource, PreferenceStore, SubmitIndicator};
pub use submit::SubmitFlow;
pub use theme::{Theme, ThemeScreen, ThemeToggle, THEME_KEY};
