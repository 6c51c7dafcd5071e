// scrollspy_core: Rust/WASM engine behind the portfolio page.
// All page state and decisions live here; JS forwards scroll events, frames, and geometry.

mod error;
mod indicator;
mod nav;
mod profile;
mod spy;
mod subscription;
mod throttle;
mod tracker;
mod types;

use tracing::warn;
use wasm_bindgen::prelude::*;

pub use error::EngineError;
pub use indicator::{scroll_top_visible, ScrollTopIndicator};
pub use nav::{nav_entries, scroll_target, NavEntry, NavItem};
pub use profile::{initials, profile_url, resolve_avatar, Avatar, ProfileFetch};
pub use spy::{ScrollSpy, Viewport};
pub use subscription::{
    subscribe, FrameScheduler, ListenerId, ScrollSource, ScrollSubscription,
};
pub use throttle::{FrameRequest, FrameThrottle};
pub use tracker::{evaluate, RegionLookup, SectionTracker};
pub use types::*;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_regions(regions_json: &str) -> Result<Vec<Region>, EngineError> {
    serde_json::from_str(regions_json).map_err(|e| EngineError::InvalidRegions(e.to_string()))
}

fn to_js_error(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Scroll-spy interface exposed to JavaScript.
///
/// JS owns the listener and `requestAnimationFrame` plumbing:
/// call `notify_scroll()` on every scroll event, request a frame when it
/// returns `true`, and call `run_frame()` from that frame with fresh geometry.
#[wasm_bindgen]
pub struct WasmScrollSpy {
    inner: ScrollSpy,
    on_change: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl WasmScrollSpy {
    /// Create from JSON configuration. Missing fields take page defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<WasmScrollSpy, JsValue> {
        let config = ScrollSpyConfig::from_json(config_json).map_err(to_js_error)?;
        let inner = ScrollSpy::new(config).map_err(to_js_error)?;
        Ok(WasmScrollSpy {
            inner,
            on_change: None,
        })
    }

    /// Forward a scroll event. Returns `true` when JS should request an animation frame.
    pub fn notify_scroll(&mut self) -> bool {
        self.inner.notify_scroll().should_schedule()
    }

    /// Animation-frame callback.
    ///
    /// # Arguments
    /// * `scroll_y` - Current `window.scrollY`
    /// * `regions_json` - `[{ "id", "top_offset", "height" }, ...]` measured this frame
    ///
    /// # Returns
    /// JSON `FrameOutcome`
    pub fn run_frame(&mut self, scroll_y: f64, regions_json: &str) -> Result<String, JsValue> {
        let outcome = self.frame(scroll_y, regions_json).map_err(to_js_error)?;
        self.emit(&outcome);
        serde_json::to_string(&outcome)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Register a callback invoked with the new section id whenever it changes.
    pub fn set_on_change(&mut self, callback: js_sys::Function) {
        self.on_change = Some(callback);
    }

    pub fn active_section(&self) -> Option<String> {
        self.inner.active_section().map(|id| id.as_str().to_string())
    }

    pub fn scroll_to_top_visible(&self) -> bool {
        self.inner.scroll_to_top_visible()
    }

    pub fn is_menu_open(&self) -> bool {
        self.inner.is_menu_open()
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.inner.toggle_menu()
    }

    pub fn close_menu(&mut self) {
        self.inner.close_menu();
    }

    /// Navigation rows as JSON `[{ "label", "href", "active" }, ...]`.
    pub fn nav_items_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.nav_entries())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Follow a nav link. Closes the menu; returns the offset to scroll to, if rendered.
    pub fn scroll_target(&mut self, anchor: &str, regions_json: &str) -> Result<Option<f64>, JsValue> {
        let regions = parse_regions(regions_json).map_err(to_js_error)?;
        Ok(self.inner.navigate_to(&SectionId::new(anchor), &regions))
    }

    /// Portfolio content (skills, contact links) as JSON.
    pub fn content_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.inner.content())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

impl WasmScrollSpy {
    /// Consume the scheduled frame, then evaluate. A bad region list still
    /// clears the pending flag so the next scroll schedules a new frame.
    fn frame(&mut self, scroll_y: f64, regions_json: &str) -> Result<FrameOutcome, EngineError> {
        match parse_regions(regions_json) {
            Ok(regions) => Ok(self.inner.on_frame(&scroll_y, &regions)),
            Err(err) => {
                self.inner.discard_frame();
                Err(err)
            }
        }
    }

    /// A throwing callback is logged; the outcome still reaches the caller.
    fn emit(&self, outcome: &FrameOutcome) {
        if let (Some(callback), Some(section)) = (&self.on_change, &outcome.active_changed) {
            if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(section.as_str())) {
                warn!(error = ?err, section = section.as_str(), "on_change callback threw");
            }
        }
    }
}

/// Resolve the hero avatar from the host's profile fetch.
///
/// # Arguments
/// * `fetch_json` - `{"outcome":"response","status":200,"body":"..."}` or `{"outcome":"failed","reason":"..."}`
/// * `display_name` - Used for the initials fallback
///
/// # Returns
/// JSON `{"kind":"image"|"initials","value":"..."}`. Never fails on a bad fetch.
#[wasm_bindgen]
pub fn resolve_profile_avatar(fetch_json: &str, display_name: &str) -> Result<String, JsValue> {
    let fetch: ProfileFetch = serde_json::from_str(fetch_json).unwrap_or_else(|e| {
        ProfileFetch::Failed {
            reason: format!("unreadable fetch outcome: {}", e),
        }
    });
    serde_json::to_string(&resolve_avatar(&fetch, display_name))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
