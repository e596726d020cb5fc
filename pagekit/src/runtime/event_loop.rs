//! Main loop: read commands, dispatch them, fire timers, print changes.

use std::io::Write;

use log::{debug, info, trace, warn};
use pagedom::render::{describe, dump};
use pagedom::{Document, Event, Surface, SurfaceError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::{Instant, sleep, sleep_until};

use crate::effects::DEFAULT_ANIMATION;
use crate::error::PageError;
use crate::page::Page;

use super::command::{Command, parse_line};
use super::terminal::Printer;
use super::{ClockMode, RuntimeError};

/// Wait for an optional deadline. Without one, never completes.
async fn sleep_until_optional(deadline: Option<Instant>) {
    match deadline {
        Some(d) => sleep_until(d).await,
        None => std::future::pending::<()>().await,
    }
}

/// Print a step failure and carry on. Only I/O errors end the loop.
fn recover<W: Write>(printer: &mut Printer<W>, result: Result<(), RuntimeError>) -> Result<(), RuntimeError> {
    match result {
        Err(RuntimeError::Io(e)) => Err(RuntimeError::Io(e)),
        Err(e) => {
            warn!("{}", e);
            printer.error(&e)?;
            Ok(())
        }
        Ok(()) => Ok(()),
    }
}

/// Print every element changed since the last call.
fn flush_changes<W: Write>(page: &mut Page<Document>, printer: &mut Printer<W>) -> Result<(), RuntimeError> {
    for id in page.surface_mut().take_dirty() {
        if let Some(element) = page.surface().get(&id) {
            printer.changed(&describe(element))?;
        }
    }
    Ok(())
}

fn execute<W: Write>(
    page: &mut Page<Document>,
    command: Command,
    printer: &mut Printer<W>,
) -> Result<(), RuntimeError> {
    let event = match command {
        Command::Click(target) => Event::click(target),
        Command::Enter(target) => Event::MouseEnter { target },
        Command::Leave(target) => Event::MouseLeave { target },
        Command::Move { target, x, y } => Event::MouseMove {
            target,
            client_x: x,
            client_y: y,
        },
        Command::Type { target, text } => {
            page.surface_mut()
                .set_value(&target, &text)
                .map_err(PageError::from)?;
            Event::input(target)
        }
        Command::Key { target, key } => Event::key_press(target, key),
        Command::Blur(target) => Event::blur(target),
        Command::Check { target, checked } => {
            page.surface_mut()
                .set_checked(&target, checked)
                .map_err(PageError::from)?;
            Event::input(target)
        }
        Command::Submit(target) => Event::submit(target),
        Command::Flash { target, message } => {
            page.flash(&target, &message, None)?;
            return Ok(());
        }
        Command::Animate { target, name } => {
            page.animate(&target, name.as_deref().unwrap_or(DEFAULT_ANIMATION))?;
            return Ok(());
        }
        Command::Show(None) => {
            printer.block(&dump(page.surface().root()))?;
            return Ok(());
        }
        Command::Show(Some(id)) => {
            let element = page
                .surface()
                .get(&id)
                .ok_or_else(|| PageError::from(SurfaceError::NotFound(id.clone())))?;
            printer.block(&describe(element))?;
            return Ok(());
        }
        Command::Validate => {
            let report = page.validate_all()?;
            printer.report(&report)?;
            return Ok(());
        }
        // Handled by the loop.
        Command::Wait(_) | Command::Quit => return Ok(()),
    };

    let result = page.dispatch(&event)?;
    if !result.is_handled() && !page.surface().is_dirty() {
        printer.note(&format!("{} on '{}' had no effect", event.kind(), event.target()))?;
    }
    Ok(())
}

pub(super) async fn run_event_loop<R, W>(
    page: &mut Page<Document>,
    input: R,
    printer: &mut Printer<W>,
    clock: ClockMode,
) -> Result<usize, RuntimeError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let start = Instant::now();
    let mut executed = 0;

    loop {
        let deadline = match clock {
            ClockMode::Realtime => page.next_deadline().map(|d| start + d),
            ClockMode::Virtual => None,
        };

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = sleep_until_optional(deadline) => {
                trace!("Timer deadline reached");
                let fired = page.advance_to(start.elapsed()).map(drop).map_err(RuntimeError::from);
                recover(printer, fired)?;
                flush_changes(page, printer)?;
                continue;
            }
        };
        let Some(line) = line else {
            debug!("Input closed");
            break;
        };

        // Timers that came due while we waited for input fire first.
        if clock == ClockMode::Realtime {
            let fired = page.advance_to(start.elapsed()).map(drop).map_err(RuntimeError::from);
            recover(printer, fired)?;
            flush_changes(page, printer)?;
        }

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                recover(printer, Err(e.into()))?;
                continue;
            }
        };
        trace!("Command: {:?}", command);
        executed += 1;

        let result = match command {
            Command::Quit => break,
            Command::Wait(duration) => match clock {
                ClockMode::Virtual => page.advance(duration).map(drop).map_err(RuntimeError::from),
                ClockMode::Realtime => {
                    sleep(duration).await;
                    page.advance_to(start.elapsed())
                        .map(drop)
                        .map_err(RuntimeError::from)
                }
            },
            command => execute(page, command, printer),
        };
        recover(printer, result)?;
        flush_changes(page, printer)?;
    }

    info!("Event loop finished after {} command(s)", executed);
    Ok(executed)
}
