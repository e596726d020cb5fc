//! Widget event handling types and traits.
//!
//! The page is a thin dispatcher: every event is offered to every widget,
//! and each widget decides for itself whether the event concerns it.

use pagedom::Event;

use crate::context::{PageContext, PageTimer};
use crate::error::PageResult;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The event did not concern this widget.
    Ignored,
    /// The widget reacted to the event.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }

    /// Combine two results; handled if either was.
    pub fn or(self, other: EventResult) -> EventResult {
        if self.is_handled() || other.is_handled() {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

/// A controller for one interactive feature of the page.
///
/// Widgets own their state (counts, flags, the selected item) and reach the
/// page only through the [`PageContext`].
pub trait Widget {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Handle a page event.
    fn on_event(&mut self, event: &Event, cx: &mut PageContext<'_>) -> PageResult<EventResult>;

    /// Handle a timer coming due. Only timers this widget scheduled need a
    /// reaction; the default ignores everything.
    fn on_timer(&mut self, _timer: &PageTimer, _cx: &mut PageContext<'_>) -> PageResult<EventResult> {
        Ok(EventResult::Ignored)
    }
}
