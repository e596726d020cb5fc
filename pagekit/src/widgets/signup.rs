//! Signup form controller.
//!
//! Fields are validated as the user leaves them (the password on every
//! keystroke) and all together on submit. A valid submit swaps the form for
//! the success message, then a timer brings back an empty form.

use log::{debug, info};
use pagedom::{Declaration, Display, Event, Surface};

use crate::context::{PageContext, PageTimer};
use crate::error::PageResult;
use crate::form::{FORM_ID, Field, FormReport, FormSnapshot, SUCCESS_ID};
use crate::timer::TimerId;
use crate::validation::FieldResult;

use super::events::{EventResult, Widget};

#[derive(Debug, Default)]
pub struct SignupForm {
    /// Pending reset after a successful submit.
    reset: Option<TimerId>,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Which field, if any, validates on this event.
    fn live_field(event: &Event) -> Option<Field> {
        match event {
            Event::Blur { target } => match Field::from_element_id(target)? {
                Field::Password | Field::Terms => None,
                field => Some(field),
            },
            Event::Input { target } if target == Field::Password.element_id() => {
                Some(Field::Password)
            }
            _ => None,
        }
    }

    fn validate_field(field: Field, cx: &mut PageContext<'_>) -> PageResult<FieldResult> {
        let snapshot = FormSnapshot::read(cx.surface)?;
        let result = snapshot.validate(field);
        show_result(cx, field, &result)?;
        Ok(result)
    }

    fn submit(&mut self, cx: &mut PageContext<'_>) -> PageResult<FormReport> {
        info!("Form submitted, validating...");
        let report = FormSnapshot::read(cx.surface)?.validate_all();
        for (field, result) in report.iter() {
            show_result(cx, field, result)?;
        }

        if report.is_valid() {
            cx.surface
                .set_style(FORM_ID, Declaration::Display(Display::None))?;
            cx.surface
                .set_style(SUCCESS_ID, Declaration::Display(Display::Block))?;
            info!("Form is valid! Account created successfully.");

            cx.cancel(&mut self.reset);
            let delay = cx.config.form_reset_delay();
            self.reset = Some(cx.schedule(delay, PageTimer::ResetForm));
        } else {
            info!(
                "Form validation failed ({} field(s))",
                report.errors().len()
            );
        }
        Ok(report)
    }

    fn reset(&mut self, cx: &mut PageContext<'_>) -> PageResult<()> {
        self.reset = None;
        cx.surface
            .set_style(FORM_ID, Declaration::Display(Display::Block))?;
        cx.surface
            .set_style(SUCCESS_ID, Declaration::Display(Display::None))?;
        cx.surface.reset_form(FORM_ID)?;
        clear_all_errors(cx.surface)?;
        info!("Form reset for new submission");
        Ok(())
    }
}

impl Widget for SignupForm {
    fn name(&self) -> &'static str {
        "signup-form"
    }

    fn on_event(&mut self, event: &Event, cx: &mut PageContext<'_>) -> PageResult<EventResult> {
        if let Event::Submit { target } = event
            && target == FORM_ID
        {
            self.submit(cx)?;
            return Ok(EventResult::Consumed);
        }

        match Self::live_field(event) {
            Some(field) => {
                let result = Self::validate_field(field, cx)?;
                debug!("Field '{}' valid: {}", field, result.is_valid());
                Ok(EventResult::Consumed)
            }
            None => Ok(EventResult::Ignored),
        }
    }

    fn on_timer(&mut self, timer: &PageTimer, cx: &mut PageContext<'_>) -> PageResult<EventResult> {
        match timer {
            PageTimer::ResetForm => {
                self.reset(cx)?;
                Ok(EventResult::Consumed)
            }
            _ => Ok(EventResult::Ignored),
        }
    }
}

/// Display a field's result: its message in the error color, or nothing.
fn show_result(cx: &mut PageContext<'_>, field: Field, result: &FieldResult) -> PageResult<()> {
    match result.message() {
        Some(message) => {
            cx.surface.set_text(field.error_id(), message)?;
            cx.surface
                .set_style(field.error_id(), Declaration::Color(cx.config.error_color))?;
        }
        None => clear_error(cx.surface, field)?,
    }
    Ok(())
}

fn clear_error(surface: &mut dyn Surface, field: Field) -> PageResult<()> {
    surface.set_text(field.error_id(), "")?;
    Ok(())
}

fn clear_all_errors(surface: &mut dyn Surface) -> PageResult<()> {
    for field in Field::ALL {
        clear_error(surface, field)?;
    }
    Ok(())
}
