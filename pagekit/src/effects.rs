//! Short-lived visual effects on arbitrary elements.
//!
//! A flashed message blanks itself after a while and an animation is
//! dropped once it has played. Each element carries at most one pending
//! revert per effect: starting the effect again restarts the timer.

use std::collections::HashMap;
use std::time::Duration;

use log::debug;
use pagedom::Declaration;

use crate::context::{PageContext, PageTimer};
use crate::error::PageResult;
use crate::timer::TimerId;
use crate::widgets::{CLASS_MESSAGE, CLASS_MESSAGE_SUCCESS, set_message};

/// Animation used when none is named.
pub const DEFAULT_ANIMATION: &str = "pulse";

#[derive(Debug, Default)]
pub struct Effects {
    flashes: HashMap<String, TimerId>,
    animations: HashMap<String, TimerId>,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message` on `element` as a success message, cleared after
    /// `duration` (the configured flash duration if `None`).
    pub fn flash(
        &mut self,
        cx: &mut PageContext<'_>,
        element: &str,
        message: &str,
        duration: Option<Duration>,
    ) -> PageResult<TimerId> {
        set_message(cx.surface, element, message, CLASS_MESSAGE_SUCCESS)?;

        let duration = duration.unwrap_or_else(|| cx.config.flash_duration());
        let mut previous = self.flashes.remove(element);
        cx.cancel(&mut previous);
        let id = cx.schedule(
            duration,
            PageTimer::ClearFlash {
                element: element.to_string(),
            },
        );
        self.flashes.insert(element.to_string(), id);
        debug!("Flashed '{}' for {:?}", element, duration);
        Ok(id)
    }

    /// Play the CSS animation `name` on `element` once.
    pub fn animate(
        &mut self,
        cx: &mut PageContext<'_>,
        element: &str,
        name: &str,
    ) -> PageResult<TimerId> {
        cx.surface.set_style(
            element,
            Declaration::Animation(animation_value(name, cx.config.animation_duration())),
        )?;

        let mut previous = self.animations.remove(element);
        cx.cancel(&mut previous);
        let id = cx.schedule(
            cx.config.animation_duration(),
            PageTimer::EndAnimation {
                element: element.to_string(),
            },
        );
        self.animations.insert(element.to_string(), id);
        Ok(id)
    }

    /// Revert an effect whose timer came due. Returns false for timers that
    /// are not effects.
    pub fn on_timer(&mut self, timer: &PageTimer, cx: &mut PageContext<'_>) -> PageResult<bool> {
        match timer {
            PageTimer::ClearFlash { element } => {
                self.flashes.remove(element);
                set_message(cx.surface, element, "", CLASS_MESSAGE)?;
                Ok(true)
            }
            PageTimer::EndAnimation { element } => {
                self.animations.remove(element);
                cx.surface
                    .set_style(element, Declaration::Animation(String::new()))?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

/// Inline `animation` value, e.g. `pulse 0.5s ease-in-out`.
pub fn animation_value(name: &str, duration: Duration) -> String {
    format!("{name} {}s ease-in-out", duration.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_value_formats_seconds() {
        assert_eq!(
            animation_value("pulse", Duration::from_millis(500)),
            "pulse 0.5s ease-in-out"
        );
        assert_eq!(
            animation_value("shake", Duration::from_secs(1)),
            "shake 1s ease-in-out"
        );
    }
}
