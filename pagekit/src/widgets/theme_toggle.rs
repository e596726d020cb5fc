//! Dark/light theme toggle.

use log::info;
use pagedom::Event;

use crate::context::PageContext;
use crate::error::PageResult;

use super::events::{EventResult, Widget};

pub const BUTTON_ID: &str = "theme-toggle";
pub const BODY_ID: &str = "body";
pub const DARK_CLASS: &str = "dark-theme";

pub const DARK_LABEL: &str = "🌙 Dark Mode";
pub const LIGHT_LABEL: &str = "☀️ Light Mode";

#[derive(Debug, Default)]
pub struct ThemeToggle {
    dark: bool,
}

impl ThemeToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }
}

impl Widget for ThemeToggle {
    fn name(&self) -> &'static str {
        "theme-toggle"
    }

    fn on_event(&mut self, event: &Event, cx: &mut PageContext<'_>) -> PageResult<EventResult> {
        let Event::Click { target } = event else {
            return Ok(EventResult::Ignored);
        };
        if target != BUTTON_ID {
            return Ok(EventResult::Ignored);
        }

        self.dark = !self.dark;
        if self.dark {
            cx.surface.add_class(BODY_ID, DARK_CLASS)?;
            // The button offers the mode you would switch to next.
            cx.surface.set_text(BUTTON_ID, LIGHT_LABEL)?;
            info!("Switched to dark mode");
        } else {
            cx.surface.remove_class(BODY_ID, DARK_CLASS)?;
            cx.surface.set_text(BUTTON_ID, DARK_LABEL)?;
            info!("Switched to light mode");
        }
        Ok(EventResult::Consumed)
    }
}
