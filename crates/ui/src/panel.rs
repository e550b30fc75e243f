#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
//! The plot parameter control panel.
//!
//! Injected immediately before the embedded plot frame; a page without
//! the frame gets no panel at all.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlIFrameElement, HtmlInputElement};

use lissajous_web_panel::{Param, PlotParams, SubmitFlow};

use crate::browser::{IframeFrame, PanelIndicator, GENERATE_BUTTON_ID};
use crate::dom::get_document;
use crate::fetch::HttpPlotBackend;

/// Selector matching the embedded plot frame
pub const FRAME_SELECTOR: &str = r#"iframe[src*="lissajous"]"#;

/// Control markup inserted before the frame. Ids follow the
/// `<param>-slider` / `<param>-value` convention the wiring relies on;
/// colors come from the page's CSS variables so the panel follows the
/// active theme.
const CONTROLS_HTML: &str = r##"
    <div class="lissajous-controls" style="
        background: var(--card-bg, #f8f9fa);
        border: 1px solid var(--border-color, #ddd);
        border-radius: 8px;
        padding: 20px;
        margin: 20px 0;
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    ">
        <h3 style="margin-top: 0; color: var(--text-color, #333);">🎛️ Interactive Controls</h3>

        <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 20px;">
            <div>
                <h4 style="color: var(--text-color, #333);">Frequency Ratios</h4>
                <label>L (X-axis): <input type="range" id="l-slider" min="1" max="10" value="8" step="1"></label>
                <span id="l-value">8</span><br>

                <label>M (Z-axis): <input type="range" id="m-slider" min="1" max="10" value="9" step="1"></label>
                <span id="m-value">9</span><br>

                <label>N (Y-axis): <input type="range" id="n-slider" min="1" max="10" value="10" step="1"></label>
                <span id="n-value">10</span>
            </div>

            <div>
                <h4 style="color: var(--text-color, #333);">Phase Shifts (degrees)</h4>
                <label>φ (Phi): <input type="range" id="phi-slider" min="0" max="360" value="45" step="15"></label>
                <span id="phi-value">45°</span><br>

                <label>ψ (Psi): <input type="range" id="psi-slider" min="0" max="360" value="45" step="15"></label>
                <span id="psi-value">45°</span>
            </div>
        </div>

        <button id="generate-btn" style="
            background: var(--primary-color, #007bff);
            color: white;
            border: none;
            padding: 10px 20px;
            border-radius: 5px;
            cursor: pointer;
            margin-top: 15px;
            font-size: 16px;
        ">Generate New Lissajous Figure</button>

        <div id="loading" style="display: none; color: var(--text-color, #333);">
            🔄 Generating plot...
        </div>
    </div>
"##;

type PanelFlow = SubmitFlow<HttpPlotBackend, IframeFrame, PanelIndicator>;

/// Build the panel next to the embedded frame and wire its listeners.
/// Not idempotent (a second call would duplicate the controls); the
/// start function calls it exactly once per page load.
pub fn init() -> Result<(), JsValue> {
    let Some(doc) = get_document() else {
        return Ok(());
    };
    let Some(frame_el) = doc.query_selector(FRAME_SELECTOR)? else {
        return Ok(());
    };
    let frame: HtmlIFrameElement = frame_el.dyn_into()?;

    frame.insert_adjacent_html("beforebegin", CONTROLS_HTML)?;

    for param in Param::ALL {
        bind_slider(&doc, param)?;
    }

    let flow = Rc::new(SubmitFlow::new(
        HttpPlotBackend,
        IframeFrame::new(frame),
        PanelIndicator::new(doc.clone()),
    ));

    if let Some(button) = doc.get_element_by_id(GENERATE_BUTTON_ID) {
        let flow = flow.clone();
        let doc = doc.clone();
        let cb = Closure::wrap(Box::new(move || {
            submit(&flow, &doc);
        }) as Box<dyn FnMut()>);
        button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // First render so the frame shows the default parameters
    submit(&flow, &doc);

    Ok(())
}

/// Mirror a slider's value into its label on every input event
fn bind_slider(doc: &Document, param: Param) -> Result<(), JsValue> {
    let Some(slider) = doc.get_element_by_id(&param.slider_id()) else {
        return Ok(());
    };
    let slider: HtmlInputElement = slider.dyn_into()?;
    let Some(label) = doc.get_element_by_id(&param.label_id()) else {
        return Ok(());
    };

    let value_source = slider.clone();
    let cb = Closure::wrap(Box::new(move || {
        label.set_text_content(Some(&param.display_value(&value_source.value())));
    }) as Box<dyn FnMut()>);
    slider.add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Read the current control values, falling back to the defaults for
/// any control missing from the page
fn read_params(doc: &Document) -> PlotParams {
    let mut params = PlotParams::default();
    for param in Param::ALL {
        if let Some(el) = doc.get_element_by_id(&param.slider_id()) {
            if let Ok(slider) = el.dyn_into::<HtmlInputElement>() {
                params.set(param, slider.value());
            }
        }
    }
    params
}

/// Kick off one submission; failures are logged, never surfaced
fn submit(flow: &Rc<PanelFlow>, doc: &Document) {
    let params = read_params(doc);
    let flow = flow.clone();
    spawn_local(async move {
        let now_ms = js_sys::Date::now() as u64;
        if let Err(err) = flow.submit(&params, now_ms).await {
            web_sys::console::error_1(&format!("Failed to generate plot: {err:#}").into());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_carries_every_control_and_label() {
        for param in Param::ALL {
            assert!(CONTROLS_HTML.contains(&format!(r#"id="{}""#, param.slider_id())));
            assert!(CONTROLS_HTML.contains(&format!(r#"id="{}""#, param.label_id())));
        }
        assert!(CONTROLS_HTML.contains(r#"id="generate-btn""#));
        assert!(CONTROLS_HTML.contains(r#"id="loading""#));
    }

    #[test]
    fn markup_labels_start_at_the_formatted_defaults() {
        for param in Param::ALL {
            let initial = format!(
                r#"id="{}">{}</span>"#,
                param.label_id(),
                param.display_value(param.default_value())
            );
            assert!(CONTROLS_HTML.contains(&initial), "missing {initial}");
        }
    }

    #[test]
    fn markup_sliders_start_at_the_default_values() {
        for param in Param::ALL {
            assert!(CONTROLS_HTML.contains(&format!(r#"value="{}""#, param.default_value())));
        }
    }

    #[test]
    fn frame_selector_matches_by_source_substring() {
        assert!(FRAME_SELECTOR.contains("lissajous"));
        assert!(FRAME_SELECTOR.starts_with("iframe"));
    }
}
