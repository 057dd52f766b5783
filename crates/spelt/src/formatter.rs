//! Rendering of test results.

mod json;
mod terminal;

pub use self::{json::JsonFormatter, terminal::TerminalFormatter};

use crate::report::{Report, Stats};
use std::io;
use termcolor::WriteColor;

/// The strategy used by a [`Suite`](crate::Suite) to render its results.
///
/// Every method has an empty default implementation, so a formatter only
/// needs to implement the parts of the output it cares about.
pub trait Formatter {
    /// Print the banner emitted before the first test case.
    fn print_header(&mut self, w: &mut dyn WriteColor, suite_name: &str) -> io::Result<()> {
        let _ = (w, suite_name);
        Ok(())
    }

    /// Print the outcome of a single test case.
    fn report(&mut self, w: &mut dyn WriteColor, report: &Report<'_>) -> io::Result<()> {
        let _ = (w, report);
        Ok(())
    }

    /// Print the aggregated results after the last test case.
    fn print_summary(&mut self, w: &mut dyn WriteColor, stats: &Stats) -> io::Result<()> {
        let _ = (w, stats);
        Ok(())
    }
}

macro_rules! impl_formatter_body {
    () => {
        fn print_header(&mut self, w: &mut dyn WriteColor, suite_name: &str) -> io::Result<()> {
            (**self).print_header(w, suite_name)
        }

        fn report(&mut self, w: &mut dyn WriteColor, report: &Report<'_>) -> io::Result<()> {
            (**self).report(w, report)
        }

        fn print_summary(&mut self, w: &mut dyn WriteColor, stats: &Stats) -> io::Result<()> {
            (**self).print_summary(w, stats)
        }
    };
}

impl<F: ?Sized> Formatter for &mut F
where
    F: Formatter,
{
    impl_formatter_body!();
}

impl<F: ?Sized> Formatter for Box<F>
where
    F: Formatter,
{
    impl_formatter_body!();
}

/// The output formats understood by the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum OutputFormat {
    /// Colored, human-oriented lines.
    Terminal,
    /// A single JSON document.
    Json,
}

impl OutputFormat {
    pub(crate) fn formatter(self) -> Box<dyn Formatter> {
        match self {
            OutputFormat::Terminal => Box::new(TerminalFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Terminal
    }
}
