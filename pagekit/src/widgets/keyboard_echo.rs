//! Keyboard echo: mirrors what is typed and "sends" it on Enter.

use log::debug;
use pagedom::{Event, Key};

use crate::context::PageContext;
use crate::error::PageResult;

use super::events::{EventResult, Widget};
use super::{CLASS_MESSAGE_SUCCESS, set_message};

pub const INPUT_ID: &str = "text-input";
pub const MESSAGE_ID: &str = "keyboard-message";

#[derive(Debug, Default)]
pub struct KeyboardEcho {
    sent: u32,
}

impl KeyboardEcho {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times Enter sent the input.
    pub fn sent(&self) -> u32 {
        self.sent
    }
}

impl Widget for KeyboardEcho {
    fn name(&self) -> &'static str {
        "keyboard-echo"
    }

    fn on_event(&mut self, event: &Event, cx: &mut PageContext<'_>) -> PageResult<EventResult> {
        match event {
            Event::Input { target } if target == INPUT_ID => {
                let text = cx.surface.value(INPUT_ID)?;
                if text.is_empty() {
                    // The class is left as it was.
                    cx.surface.set_text(MESSAGE_ID, "")?;
                } else {
                    let length = text.chars().count();
                    set_message(
                        cx.surface,
                        MESSAGE_ID,
                        &format!("⌨️ You typed: \"{text}\" ({length} characters)"),
                        CLASS_MESSAGE_SUCCESS,
                    )?;
                }
            }
            Event::KeyPress {
                target,
                key: Key::Enter,
            } if target == INPUT_ID => {
                self.sent += 1;
                debug!("Keyboard input sent ({} total)", self.sent);
                set_message(
                    cx.surface,
                    MESSAGE_ID,
                    "🚀 You pressed Enter! Message sent!",
                    CLASS_MESSAGE_SUCCESS,
                )?;
                cx.surface.set_value(INPUT_ID, "")?;
            }
            _ => return Ok(EventResult::Ignored),
        }
        Ok(EventResult::Consumed)
    }
}
