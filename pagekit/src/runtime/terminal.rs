//! Line output for the runtime, optionally colored.

use std::fmt::Display;
use std::io::{self, Write};

use crossterm::style::{StyledContent, Stylize};

use crate::form::FormReport;

pub struct Printer<W: Write> {
    out: W,
    styled: bool,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, styled: bool) -> Self {
        Self { out, styled }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint<'a>(&self, text: &'a str, style: fn(&'a str) -> StyledContent<&'a str>) -> String {
        if self.styled {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn line(&mut self, marker: &str, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{marker} {text}")?;
        self.out.flush()
    }

    pub fn banner(&mut self) -> io::Result<()> {
        let title = self.paint("Interactive Web Page", |s| s.bold().cyan());
        writeln!(self.out, "🎉 Welcome to the {title}!")?;
        writeln!(
            self.out,
            "Type commands such as 'click counter-btn' or 'show'; 'quit' to leave."
        )?;
        self.out.flush()
    }

    /// One element that changed.
    pub fn changed(&mut self, description: &str) -> io::Result<()> {
        let marker = self.paint("~", |s| s.yellow());
        self.line(&marker, description)
    }

    /// Something happened without changing the page.
    pub fn note(&mut self, text: &str) -> io::Result<()> {
        let marker = self.paint("·", |s| s.dark_grey());
        self.line(&marker, text)
    }

    pub fn error(&mut self, error: impl Display) -> io::Result<()> {
        let marker = self.paint("!", |s| s.red().bold());
        self.line(&marker, error)
    }

    /// Raw multi-line text such as a page dump.
    pub fn block(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        if !text.ends_with('\n') {
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    pub fn report(&mut self, report: &FormReport) -> io::Result<()> {
        for (field, result) in report.iter() {
            match result.message() {
                Some(message) => {
                    let marker = self.paint("✗", |s| s.red());
                    self.line(&marker, format_args!("{field}: {message}"))?;
                }
                None => {
                    let marker = self.paint("✓", |s| s.green());
                    self.line(&marker, field)?;
                }
            }
        }
        let verdict = if report.is_valid() { "valid" } else { "invalid" };
        self.line("=", format_args!("form {verdict}"))
    }
}
