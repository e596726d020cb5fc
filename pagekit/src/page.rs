//! The page: a surface, its widgets and the timers they scheduled.

use std::time::Duration;

use log::{debug, trace};
use pagedom::{Document, Event, Surface, SurfaceError};

use crate::config::PageConfig;
use crate::context::{PageContext, PageTimer};
use crate::effects::Effects;
use crate::error::PageResult;
use crate::form::{FormReport, FormSnapshot};
use crate::markup::demo_document;
use crate::timer::{Scheduler, TimerId};
use crate::widgets::{self, EventResult, Widget};

pub struct Page<S: Surface> {
    surface: S,
    timers: Scheduler<PageTimer>,
    config: PageConfig,
    widgets: Vec<Box<dyn Widget>>,
    effects: Effects,
}

impl Page<Document> {
    /// The stock demo page with default settings.
    pub fn demo() -> Self {
        Self::new(demo_document(), PageConfig::default())
    }
}

impl<S: Surface> Page<S> {
    /// Wire every widget to `surface`.
    pub fn new(surface: S, config: PageConfig) -> Self {
        let widgets = widgets::all();
        debug!(
            "Page initialized with {} widgets: {}",
            widgets.len(),
            widgets
                .iter()
                .map(|w| w.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Self {
            surface,
            timers: Scheduler::new(),
            config,
            widgets,
            effects: Effects::new(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Current page time.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Page time at which the next timer fires.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// Offer `event` to every widget.
    ///
    /// Delivery does not stop at the first widget that reacts; the dropdown
    /// closes on any click, including ones other widgets handle.
    pub fn dispatch(&mut self, event: &Event) -> PageResult<EventResult> {
        if !self.surface.contains(event.target()) {
            return Err(SurfaceError::NotFound(event.target().to_string()).into());
        }
        trace!("Dispatching {} on '{}'", event.kind(), event.target());

        let mut cx = PageContext::new(&mut self.surface, &mut self.timers, &self.config);
        let mut result = EventResult::Ignored;
        for widget in &mut self.widgets {
            let handled = widget.on_event(event, &mut cx)?;
            if handled.is_handled() {
                trace!("{} handled {}", widget.name(), event.kind());
            }
            result = result.or(handled);
        }
        Ok(result)
    }

    /// Move page time forward by `by`, firing every timer that comes due.
    pub fn advance(&mut self, by: Duration) -> PageResult<usize> {
        let until = self.timers.now() + by;
        self.advance_to(until)
    }

    /// Move page time forward to `time`, firing every timer due by then.
    /// Timers scheduled by a firing timer run too if they fall in range.
    pub fn advance_to(&mut self, time: Duration) -> PageResult<usize> {
        let mut fired = 0;
        while let Some((id, timer)) = self.timers.pop_due(time) {
            fired += 1;
            self.fire(id, &timer)?;
        }
        self.timers.set_now(time);
        Ok(fired)
    }

    fn fire(&mut self, id: TimerId, timer: &PageTimer) -> PageResult<()> {
        let mut cx = PageContext::new(&mut self.surface, &mut self.timers, &self.config);
        for widget in &mut self.widgets {
            if widget.on_timer(timer, &mut cx)?.is_handled() {
                trace!("{} fired for {}", id, widget.name());
                return Ok(());
            }
        }
        if self.effects.on_timer(timer, &mut cx)? {
            return Ok(());
        }
        debug!("{} ({:?}) had no receiver", id, timer);
        Ok(())
    }

    /// Flash `message` on `element` for `duration` (configured default if
    /// `None`).
    pub fn flash(
        &mut self,
        element: &str,
        message: &str,
        duration: Option<Duration>,
    ) -> PageResult<TimerId> {
        let mut cx = PageContext::new(&mut self.surface, &mut self.timers, &self.config);
        self.effects.flash(&mut cx, element, message, duration)
    }

    /// Play animation `name` on `element` once.
    pub fn animate(&mut self, element: &str, name: &str) -> PageResult<TimerId> {
        let mut cx = PageContext::new(&mut self.surface, &mut self.timers, &self.config);
        self.effects.animate(&mut cx, element, name)
    }

    /// Validate the signup form as it stands, without touching the page.
    pub fn validate_all(&self) -> PageResult<FormReport> {
        Ok(FormSnapshot::read(&self.surface)?.validate_all())
    }
}
