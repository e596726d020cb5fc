//! Dropdown menu: a button toggling a list of options.
//!
//! Options are the children of the content element carrying `data-value`.
//! Any click that is not on the button closes the menu.

use log::info;
use pagedom::Event;

use crate::context::PageContext;
use crate::error::PageResult;

use super::events::{EventResult, Widget};
use super::{CLASS_MESSAGE_SUCCESS, set_message};

pub const BUTTON_ID: &str = "dropdown-btn";
pub const CONTENT_ID: &str = "dropdown-content";
pub const MESSAGE_ID: &str = "dropdown-message";
pub const SHOW_CLASS: &str = "show";

/// The option last picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub value: String,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct Dropdown {
    selected: Option<Selection>,
}

impl Dropdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&Selection> {
        self.selected.as_ref()
    }

    /// The `data-value` of `target` if it is an option of this menu.
    fn option_value(target: &str, cx: &PageContext<'_>) -> PageResult<Option<String>> {
        if target == CONTENT_ID || !cx.surface.is_within(target, CONTENT_ID)? {
            return Ok(None);
        }
        Ok(cx.surface.data(target, "value")?)
    }

    fn select(&mut self, option: &str, value: String, cx: &mut PageContext<'_>) -> PageResult<()> {
        let text = cx.surface.text(option)?;
        cx.surface.set_text(BUTTON_ID, &format!("{text} ▼"))?;
        cx.surface.remove_class(CONTENT_ID, SHOW_CLASS)?;
        set_message(
            cx.surface,
            MESSAGE_ID,
            &format!("📚 You selected: {text}"),
            CLASS_MESSAGE_SUCCESS,
        )?;
        info!("Selected: {}", value);
        self.selected = Some(Selection { value, text });
        Ok(())
    }
}

impl Widget for Dropdown {
    fn name(&self) -> &'static str {
        "dropdown"
    }

    fn on_event(&mut self, event: &Event, cx: &mut PageContext<'_>) -> PageResult<EventResult> {
        let Event::Click { target } = event else {
            return Ok(EventResult::Ignored);
        };

        if target == BUTTON_ID {
            cx.surface.toggle_class(CONTENT_ID, SHOW_CLASS)?;
            return Ok(EventResult::Consumed);
        }

        if let Some(value) = Self::option_value(target, cx)? {
            self.select(target, value, cx)?;
            return Ok(EventResult::Consumed);
        }

        // Click outside: close without claiming the event.
        cx.surface.remove_class(CONTENT_ID, SHOW_CLASS)?;
        Ok(EventResult::Ignored)
    }
}
