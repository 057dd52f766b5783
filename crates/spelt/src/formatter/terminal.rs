use super::Formatter;
use crate::{
    escape::escape_display,
    report::{Outcome, Report, Stats},
};
use std::{fmt, io};
use termcolor::{Color, ColorSpec, WriteColor};

const RULE: &str =
    "--------------------------------------------------------------------------------";

struct Colored<T> {
    val: T,
    spec: Option<ColorSpec>,
}

impl<T> Colored<T> {
    fn fg(mut self, color: Color) -> Self {
        self.spec
            .get_or_insert_with(ColorSpec::new)
            .set_fg(Some(color));
        self
    }

    fn fmt_colored<W: ?Sized>(&self, w: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
        W: WriteColor,
    {
        if let Some(ref spec) = self.spec {
            w.set_color(spec)?;
        }
        write!(w, "{}", &self.val)?;
        if let Some(..) = self.spec {
            w.reset()?;
        }
        Ok(())
    }
}

fn colored<T>(val: T) -> Colored<T> {
    Colored { val, spec: None }
}

/// Human-oriented output, one line per test case.
#[derive(Debug, Default)]
pub struct TerminalFormatter {
    _p: (),
}

impl TerminalFormatter {
    /// Create a new `TerminalFormatter`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Formatter for TerminalFormatter {
    fn print_header(&mut self, w: &mut dyn WriteColor, suite_name: &str) -> io::Result<()> {
        writeln!(w, "{}", RULE)?;
        writeln!(w, " {}", suite_name)?;
        writeln!(w, "{}", RULE)?;
        writeln!(w)?;
        Ok(())
    }

    fn report(&mut self, w: &mut dyn WriteColor, report: &Report<'_>) -> io::Result<()> {
        match report.outcome {
            Outcome::Passed => {
                colored(".").fg(Color::Green).fmt_colored(w)?;
                write!(w, " {:<24}  ", report.test_name)?;
                colored("ok").fg(Color::Green).fmt_colored(w)?;
            }
            Outcome::Failed {
                file,
                line,
                message,
            } => {
                colored("x").fg(Color::Red).fmt_colored(w)?;
                write!(w, " {:<24}  {}:{}  ", report.test_name, file, line)?;
                colored(escape_display(message))
                    .fg(Color::Red)
                    .fmt_colored(w)?;
            }
        }
        writeln!(w)?;
        w.flush()
    }

    fn print_summary(&mut self, w: &mut dyn WriteColor, stats: &Stats) -> io::Result<()> {
        writeln!(w)?;
        writeln!(w, "{:<16}  {}", "Tests executed:", stats.run)?;
        writeln!(
            w,
            "{:<16}  {} ({:.0}%)",
            "Tests passed:",
            stats.passed,
            stats.percentage(stats.passed)
        )?;
        writeln!(
            w,
            "{:<16}  {} ({:.0}%)",
            "Tests failed:",
            stats.failed,
            stats.percentage(stats.failed)
        )?;
        w.flush()
    }
}
