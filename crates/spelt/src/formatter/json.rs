use super::Formatter;
use crate::{
    escape::escape_json,
    report::{Outcome, Report, Stats},
};
use std::io;
use termcolor::WriteColor;

/// Machine-readable output, one JSON document per suite.
#[derive(Debug)]
pub struct JsonFormatter {
    first_report: bool,
}

impl JsonFormatter {
    /// Create a new `JsonFormatter`.
    pub fn new() -> Self {
        Self { first_report: true }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for JsonFormatter {
    fn print_header(&mut self, w: &mut dyn WriteColor, suite_name: &str) -> io::Result<()> {
        self.first_report = true;
        writeln!(w, "{{")?;
        writeln!(w, "  \"name\": \"{}\",", escape_json(suite_name))?;
        writeln!(w, "  \"tests\": {{")?;
        Ok(())
    }

    fn report(&mut self, w: &mut dyn WriteColor, report: &Report<'_>) -> io::Result<()> {
        let separator = if self.first_report { " " } else { "," };
        self.first_report = false;

        writeln!(
            w,
            "    {}\"{}\": {{",
            separator,
            escape_json(report.test_name)
        )?;
        match report.outcome {
            Outcome::Passed => {
                writeln!(w, "      \"passed\": true")?;
            }
            Outcome::Failed {
                file,
                line,
                message,
            } => {
                writeln!(w, "      \"passed\": false,")?;
                writeln!(w, "      \"file\": \"{}\",", escape_json(file))?;
                writeln!(w, "      \"line\": {},", line)?;
                writeln!(w, "      \"error_message\": \"{}\"", escape_json(message))?;
            }
        }
        writeln!(w, "    }}")?;
        w.flush()
    }

    fn print_summary(&mut self, w: &mut dyn WriteColor, stats: &Stats) -> io::Result<()> {
        writeln!(w, "  }},")?;
        writeln!(w, "  \"results\": {{")?;
        writeln!(w, "    \"nb_tests\": {},", stats.run)?;
        writeln!(w, "    \"nb_passed_tests\": {},", stats.passed)?;
        writeln!(w, "    \"nb_failed_tests\": {}", stats.failed)?;
        writeln!(w, "  }}")?;
        writeln!(w, "}}")?;
        w.flush()
    }
}
