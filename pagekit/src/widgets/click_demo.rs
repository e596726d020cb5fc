//! Click demo: counts clicks and gives the button a short press effect.

use log::debug;
use pagedom::{Declaration, Event, Transform};

use crate::context::{PageContext, PageTimer};
use crate::error::PageResult;
use crate::timer::TimerId;

use super::events::{EventResult, Widget};
use super::{CLASS_MESSAGE_SUCCESS, set_message};

pub const BUTTON_ID: &str = "click-btn";
pub const MESSAGE_ID: &str = "click-message";

const PRESSED_SCALE: f32 = 0.95;

#[derive(Debug, Default)]
pub struct ClickDemo {
    count: u32,
    /// Pending release of the press effect.
    release: Option<TimerId>,
}

impl ClickDemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    fn click(&mut self, cx: &mut PageContext<'_>) -> PageResult<()> {
        self.count += 1;
        debug!("Click demo clicked {} time(s)", self.count);

        set_message(
            cx.surface,
            MESSAGE_ID,
            &format!("🎉 Button clicked {} time(s)!", self.count),
            CLASS_MESSAGE_SUCCESS,
        )?;

        cx.surface.set_style(
            BUTTON_ID,
            Declaration::Transform(Transform::Scale(PRESSED_SCALE)),
        )?;

        // A rapid second click restarts the press instead of stacking releases.
        cx.cancel(&mut self.release);
        let delay = cx.config.press_revert_delay();
        self.release = Some(cx.schedule(
            delay,
            PageTimer::ReleasePress {
                element: BUTTON_ID.to_string(),
            },
        ));
        Ok(())
    }
}

impl Widget for ClickDemo {
    fn name(&self) -> &'static str {
        "click-demo"
    }

    fn on_event(&mut self, event: &Event, cx: &mut PageContext<'_>) -> PageResult<EventResult> {
        match event {
            Event::Click { target } if target == BUTTON_ID => {
                self.click(cx)?;
                Ok(EventResult::Consumed)
            }
            _ => Ok(EventResult::Ignored),
        }
    }

    fn on_timer(&mut self, timer: &PageTimer, cx: &mut PageContext<'_>) -> PageResult<EventResult> {
        match timer {
            PageTimer::ReleasePress { element } if element == BUTTON_ID => {
                self.release = None;
                cx.surface
                    .set_style(BUTTON_ID, Declaration::Transform(Transform::Scale(1.0)))?;
                Ok(EventResult::Consumed)
            }
            _ => Ok(EventResult::Ignored),
        }
    }
}
