//! Tab switcher. Exactly one button and one panel are active.
//!
//! Each `.tab-button` names its panel's ID in `data-tab`.

use log::info;
use pagedom::Event;

use crate::context::PageContext;
use crate::error::{PageError, PageResult};

use super::events::{EventResult, Widget};

pub const BUTTON_CLASS: &str = "tab-button";
pub const PANEL_CLASS: &str = "tab-panel";
pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Default)]
pub struct Tabs {
    /// ID of the active panel, once a tab was clicked.
    active: Option<String>,
}

impl Tabs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_panel(&self) -> Option<&str> {
        self.active.as_deref()
    }

    fn activate(&mut self, button: &str, cx: &mut PageContext<'_>) -> PageResult<()> {
        let panel = cx
            .surface
            .data(button, "tab")?
            .ok_or_else(|| PageError::markup(button, "tab button has no data-tab"))?;
        if !cx.surface.contains(&panel) {
            return Err(PageError::markup(button, "data-tab names a missing panel"));
        }

        for other in cx.surface.elements_with_class(BUTTON_CLASS) {
            cx.surface.remove_class(&other, ACTIVE_CLASS)?;
        }
        for other in cx.surface.elements_with_class(PANEL_CLASS) {
            cx.surface.remove_class(&other, ACTIVE_CLASS)?;
        }

        cx.surface.add_class(button, ACTIVE_CLASS)?;
        cx.surface.add_class(&panel, ACTIVE_CLASS)?;
        info!("Switched to tab: {}", panel);
        self.active = Some(panel);
        Ok(())
    }
}

impl Widget for Tabs {
    fn name(&self) -> &'static str {
        "tabs"
    }

    fn on_event(&mut self, event: &Event, cx: &mut PageContext<'_>) -> PageResult<EventResult> {
        let Event::Click { target } = event else {
            return Ok(EventResult::Ignored);
        };
        let Some(button) = cx.surface.closest_with_class(target, BUTTON_CLASS)? else {
            return Ok(EventResult::Ignored);
        };
        self.activate(&button, cx)?;
        Ok(EventResult::Consumed)
    }
}
