//! Hover box: reports pointer enter/leave and the pointer position.

use pagedom::Event;

use crate::context::PageContext;
use crate::error::PageResult;

use super::events::{EventResult, Widget};
use super::{CLASS_MESSAGE, CLASS_MESSAGE_SUCCESS, set_message};

pub const BOX_ID: &str = "hover-box";
pub const MESSAGE_ID: &str = "mouse-message";

#[derive(Debug, Default)]
pub struct HoverBox {
    inside: bool,
    /// Last pointer position relative to the box.
    position: Option<(i64, i64)>,
}

impl HoverBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }

    pub fn position(&self) -> Option<(i64, i64)> {
        self.position
    }
}

impl Widget for HoverBox {
    fn name(&self) -> &'static str {
        "hover-box"
    }

    fn on_event(&mut self, event: &Event, cx: &mut PageContext<'_>) -> PageResult<EventResult> {
        match event {
            Event::MouseEnter { target } if target == BOX_ID => {
                self.inside = true;
                set_message(
                    cx.surface,
                    MESSAGE_ID,
                    "🐭 Mouse entered the box!",
                    CLASS_MESSAGE_SUCCESS,
                )?;
            }
            Event::MouseLeave { target } if target == BOX_ID => {
                self.inside = false;
                set_message(cx.surface, MESSAGE_ID, "👋 Mouse left the box!", CLASS_MESSAGE)?;
            }
            Event::MouseMove {
                target,
                client_x,
                client_y,
            } if target == BOX_ID => {
                let rect = cx.surface.bounding_rect(BOX_ID)?;
                let (x, y) = rect.relative(*client_x, *client_y);
                self.position = Some((x, y));
                cx.surface.set_text(BOX_ID, &format!("Mouse at: ({x}, {y})"))?;
            }
            _ => return Ok(EventResult::Ignored),
        }
        Ok(EventResult::Consumed)
    }
}
