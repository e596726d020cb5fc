//! What a widget can touch while it handles an event.

use std::time::Duration;

use pagedom::Surface;

use crate::config::PageConfig;
use crate::timer::{Scheduler, TimerId};

/// Delayed actions widgets schedule on the page clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageTimer {
    /// Undo the pressed look of a button.
    ReleasePress { element: String },
    /// Bring back a submitted form, cleared.
    ResetForm,
    /// Blank a flashed message.
    ClearFlash { element: String },
    /// Drop a finished animation.
    EndAnimation { element: String },
}

/// Borrowed view of the page handed to widget handlers.
pub struct PageContext<'a> {
    pub surface: &'a mut dyn Surface,
    pub timers: &'a mut Scheduler<PageTimer>,
    pub config: &'a PageConfig,
}

impl<'a> PageContext<'a> {
    pub fn new(
        surface: &'a mut dyn Surface,
        timers: &'a mut Scheduler<PageTimer>,
        config: &'a PageConfig,
    ) -> Self {
        Self {
            surface,
            timers,
            config,
        }
    }

    pub fn schedule(&mut self, after: Duration, timer: PageTimer) -> TimerId {
        self.timers.schedule(after, timer)
    }

    /// Cancel `pending` if set, leaving it empty.
    pub fn cancel(&mut self, pending: &mut Option<TimerId>) {
        if let Some(id) = pending.take() {
            self.timers.cancel(id);
        }
    }
}
