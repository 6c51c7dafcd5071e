// Page UI state in one owner: active section, scroll-to-top flag, menu flag.
// Scroll notifications only arm the throttle; evaluation happens on the animation frame.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::indicator::ScrollTopIndicator;
use crate::nav::{self, NavEntry, NavItem};
use crate::subscription::{self, FrameScheduler, ScrollSource, ScrollSubscription};
use crate::throttle::{FrameRequest, FrameThrottle};
use crate::tracker::{RegionLookup, SectionTracker};
use crate::types::*;

/// Source of the current vertical scroll offset (e.g. `window.scrollY`).
pub trait Viewport {
    fn scroll_y(&self) -> f64;
}

impl Viewport for f64 {
    fn scroll_y(&self) -> f64 {
        *self
    }
}

/// Scroll-spy controller for one mounted page.
#[derive(Debug)]
pub struct ScrollSpy {
    tracker: SectionTracker,
    indicator: ScrollTopIndicator,
    throttle: FrameThrottle,
    nav_items: Vec<NavItem>,
    content: PortfolioContent,
    menu_open: bool,
    evaluations: u64,
}

impl ScrollSpy {
    pub fn new(config: ScrollSpyConfig) -> Result<Self, crate::EngineError> {
        config.validate()?;
        Ok(ScrollSpy {
            tracker: SectionTracker::new(config.sections, config.header_offset),
            indicator: ScrollTopIndicator::new(config.scroll_top_threshold),
            throttle: FrameThrottle::new(),
            nav_items: config
                .nav_labels
                .into_iter()
                .map(NavItem::from_label)
                .collect(),
            content: config.content,
            menu_open: false,
            evaluations: 0,
        })
    }

    /// Forward a raw scroll notification. The caller requests a frame on `Schedule`.
    pub fn notify_scroll(&mut self) -> FrameRequest {
        self.throttle.request()
    }

    /// Animation-frame callback. Evaluates only when a notification is pending.
    pub fn on_frame<V, L>(&mut self, viewport: &V, layout: &L) -> FrameOutcome
    where
        V: Viewport + ?Sized,
        L: RegionLookup + ?Sized,
    {
        if !self.throttle.begin_frame() {
            return FrameOutcome::default();
        }
        self.evaluate(viewport.scroll_y(), layout)
    }

    /// Consume a scheduled frame without evaluating (the host could not measure
    /// the page). Returns whether a frame was pending.
    pub fn discard_frame(&mut self) -> bool {
        let was_pending = self.throttle.begin_frame();
        if was_pending {
            warn!("scheduled frame discarded without evaluation");
        }
        was_pending
    }

    /// Unthrottled evaluation, e.g. once at mount before any scrolling.
    pub fn evaluate<L>(&mut self, scroll_y: f64, layout: &L) -> FrameOutcome
    where
        L: RegionLookup + ?Sized,
    {
        self.evaluations += 1;
        FrameOutcome {
            evaluated: true,
            active_changed: self.tracker.update_from_layout(scroll_y, layout),
            scroll_top_changed: self.indicator.update(scroll_y),
        }
    }

    pub fn active_section(&self) -> Option<&SectionId> {
        self.tracker.active()
    }

    pub fn scroll_to_top_visible(&self) -> bool {
        self.indicator.is_visible()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        debug!(open = self.menu_open, "menu toggled");
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn nav_entries(&self) -> Vec<NavEntry> {
        nav::nav_entries(&self.nav_items, self.tracker.active())
    }

    /// Follow a nav link: closes the menu and returns the offset to scroll to.
    pub fn navigate_to<L>(&mut self, anchor: &SectionId, layout: &L) -> Option<f64>
    where
        L: RegionLookup + ?Sized,
    {
        self.close_menu();
        nav::scroll_target(anchor, layout)
    }

    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }

    /// Evaluations actually run (throttled frames plus explicit calls).
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Wire a shared controller to a scroll source. Each notification arms the
    /// throttle and requests at most one frame from `scheduler`. The listener is
    /// removed when the returned guard goes out of scope.
    ///
    /// This covers the notification half only. The host's frame callback must
    /// call [`ScrollSpy::on_frame`] on the same `spy`, otherwise the throttle
    /// stays pending and no further frames are requested. A notification that
    /// arrives while the host holds a borrow of `spy` is dropped, as if a frame
    /// were already pending.
    ///
    /// The JS build does not use this: `WasmScrollSpy` leaves the listener and
    /// `requestAnimationFrame` wiring to JS.
    pub fn attach<'a, S, F>(
        spy: &Rc<RefCell<ScrollSpy>>,
        source: &'a S,
        scheduler: F,
    ) -> ScrollSubscription<'a, S>
    where
        S: ScrollSource + ?Sized,
        F: FrameScheduler + 'static,
    {
        let spy = Rc::clone(spy);
        subscription::subscribe(source, move || {
            let request = match spy.try_borrow_mut() {
                Ok(mut spy) => spy.notify_scroll(),
                Err(_) => {
                    trace!("scroll notification during borrow; dropped");
                    FrameRequest::AlreadyPending
                }
            };
            if request.should_schedule() {
                scheduler.request_frame();
            }
        })
    }
}
