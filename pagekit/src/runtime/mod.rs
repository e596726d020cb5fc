//! Runtime: drives the demo page from a stream of text commands.
//!
//! Each line is one [`Command`]. After every command the elements it
//! changed are printed, one line each. Timers run on a virtual clock that
//! only `wait` moves, or on the wall clock when interactive.

mod command;
mod event_loop;
mod terminal;

use std::io::{self, Write};

use log::info;
use thiserror::Error;
use tokio::io::AsyncBufRead;

use crate::config::PageConfig;
use crate::error::PageError;
use crate::markup::demo_document;
use crate::page::Page;

pub use command::{Command, CommandError, parse_line};
pub use terminal::Printer;

/// How page time advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockMode {
    /// Only `wait` commands move time; runs are reproducible.
    #[default]
    Virtual,
    /// Timers fire on wall-clock time while waiting for input.
    Realtime,
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Command(#[from] CommandError),

    #[error("{0}")]
    Page(#[from] PageError),
}

/// Runtime builder.
#[derive(Debug, Clone, Default)]
pub struct Runtime {
    config: PageConfig,
    clock: ClockMode,
    styled: bool,
    banner: bool,
}

impl Runtime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: PageConfig) -> Self {
        self.config = config;
        self
    }

    pub fn clock(mut self, clock: ClockMode) -> Self {
        self.clock = clock;
        self
    }

    /// Color the output with terminal escape codes.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Print a greeting before reading commands.
    pub fn banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    /// Run the demo page until `input` ends or a `quit` command.
    /// Returns the output sink.
    pub async fn run<R, W>(self, input: R, output: W) -> Result<W, RuntimeError>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        info!("Starting runtime ({:?} clock)", self.clock);
        let mut page = Page::new(demo_document(), self.config);
        let mut printer = Printer::new(output, self.styled);
        if self.banner {
            printer.banner()?;
        }

        event_loop::run_event_loop(&mut page, input, &mut printer, self.clock).await?;
        Ok(printer.into_inner())
    }
}
