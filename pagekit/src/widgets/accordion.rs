//! FAQ accordion. At most one answer is open at a time.
//!
//! Markup: each `.faq-question` is followed by its answer element and
//! contains a `.faq-icon`.

use log::debug;
use pagedom::{Event, Surface};

use crate::context::PageContext;
use crate::error::{PageError, PageResult};

use super::events::{EventResult, Widget};

pub const QUESTION_CLASS: &str = "faq-question";
pub const ANSWER_CLASS: &str = "faq-answer";
pub const ICON_CLASS: &str = "faq-icon";
pub const OPEN_CLASS: &str = "open";
pub const ROTATE_CLASS: &str = "rotate";

const ICON_CLOSED: &str = "+";
const ICON_OPEN: &str = "−";

#[derive(Debug, Default)]
pub struct Accordion;

struct Entry {
    answer: String,
    icon: String,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(surface: &dyn Surface, question: &str) -> PageResult<Entry> {
        let answer = surface
            .next_sibling(question)?
            .ok_or_else(|| PageError::markup(question, "FAQ question has no answer after it"))?;
        let icon = surface
            .find_descendant_with_class(question, ICON_CLASS)?
            .ok_or_else(|| PageError::markup(question, "FAQ question has no icon"))?;
        Ok(Entry { answer, icon })
    }

    fn close(surface: &mut dyn Surface, entry: &Entry) -> PageResult<()> {
        surface.remove_class(&entry.answer, OPEN_CLASS)?;
        surface.remove_class(&entry.icon, ROTATE_CLASS)?;
        surface.set_text(&entry.icon, ICON_CLOSED)?;
        Ok(())
    }

    fn open(surface: &mut dyn Surface, entry: &Entry) -> PageResult<()> {
        surface.add_class(&entry.answer, OPEN_CLASS)?;
        surface.add_class(&entry.icon, ROTATE_CLASS)?;
        surface.set_text(&entry.icon, ICON_OPEN)?;
        Ok(())
    }

    fn click(&self, question: &str, cx: &mut PageContext<'_>) -> PageResult<()> {
        // Resolve every entry before touching the page.
        let surface: &dyn Surface = cx.surface;
        let entry = Self::entry(surface, question)?;
        let others = surface
            .elements_with_class(QUESTION_CLASS)
            .into_iter()
            .filter(|other| other != question)
            .map(|other| Self::entry(surface, &other))
            .collect::<PageResult<Vec<_>>>()?;

        let was_open = cx.surface.has_class(&entry.answer, OPEN_CLASS)?;
        for other in &others {
            Self::close(cx.surface, other)?;
        }

        if was_open {
            Self::close(cx.surface, &entry)?;
            debug!("FAQ '{}' closed", question);
        } else {
            Self::open(cx.surface, &entry)?;
            debug!("FAQ '{}' opened", question);
        }
        Ok(())
    }
}

impl Widget for Accordion {
    fn name(&self) -> &'static str {
        "accordion"
    }

    fn on_event(&mut self, event: &Event, cx: &mut PageContext<'_>) -> PageResult<EventResult> {
        let Event::Click { target } = event else {
            return Ok(EventResult::Ignored);
        };
        // Clicks on the icon or text inside a question count for the question.
        let Some(question) = cx.surface.closest_with_class(target, QUESTION_CLASS)? else {
            return Ok(EventResult::Ignored);
        };
        self.click(&question, cx)?;
        Ok(EventResult::Consumed)
    }
}
