//! Click counter with color thresholds and a reset button.

use log::info;
use pagedom::{Declaration, Event};

use crate::context::PageContext;
use crate::error::PageResult;

use super::events::{EventResult, Widget};

pub const COUNTER_ID: &str = "counter-btn";
pub const RESET_ID: &str = "reset-btn";

#[derive(Debug, Default)]
pub struct Counter {
    count: u32,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    fn increment(&mut self, cx: &mut PageContext<'_>) -> PageResult<()> {
        self.count += 1;
        cx.surface
            .set_text(COUNTER_ID, &format!("Count: {}", self.count))?;

        // Below the warn threshold the color is left alone.
        let color = if self.count >= cx.config.counter_alert_at {
            Some(cx.config.counter_alert_color)
        } else if self.count >= cx.config.counter_warn_at {
            Some(cx.config.counter_warn_color)
        } else {
            None
        };
        if let Some(color) = color {
            cx.surface
                .set_style(COUNTER_ID, Declaration::BackgroundColor(color))?;
        }
        Ok(())
    }

    fn reset(&mut self, cx: &mut PageContext<'_>) -> PageResult<()> {
        self.count = 0;
        cx.surface.set_text(COUNTER_ID, "Count: 0")?;
        cx.surface.set_style(
            COUNTER_ID,
            Declaration::BackgroundColor(cx.config.counter_base_color),
        )?;
        info!("Counter reset");
        Ok(())
    }
}

impl Widget for Counter {
    fn name(&self) -> &'static str {
        "counter"
    }

    fn on_event(&mut self, event: &Event, cx: &mut PageContext<'_>) -> PageResult<EventResult> {
        match event {
            Event::Click { target } if target == COUNTER_ID => self.increment(cx)?,
            Event::Click { target } if target == RESET_ID => self.reset(cx)?,
            _ => return Ok(EventResult::Ignored),
        }
        Ok(EventResult::Consumed)
    }
}
