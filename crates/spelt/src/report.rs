use std::fmt;

/// The source location of an assertion.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

impl From<&'static std::panic::Location<'static>> for Location {
    fn from(loc: &'static std::panic::Location<'static>) -> Self {
        Self {
            file: loc.file(),
            line: loc.line(),
            column: loc.column(),
        }
    }
}

/// The outcome of a single test case.
///
/// Outcomes are handed to the formatter once and are not kept by the suite.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// The test body returned normally.
    Passed,
    /// The test body was aborted.
    #[allow(missing_docs)]
    Failed {
        file: &'a str,
        line: u32,
        message: &'a str,
    },
}

impl Outcome<'_> {
    /// Return whether the outcome represents a passed test.
    #[inline]
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

/// A record passed to [`Formatter::report`](crate::Formatter::report).
#[derive(Debug, Copy, Clone)]
pub struct Report<'a> {
    /// The name of the test case.
    pub test_name: &'a str,
    /// What happened when running it.
    pub outcome: Outcome<'a>,
}

/// Aggregated counters of a test suite.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of executed test cases.
    pub run: usize,
    /// Number of passed test cases.
    pub passed: usize,
    /// Number of failed test cases.
    pub failed: usize,
}

impl Stats {
    /// Return the ratio of `n` to the number of executed tests, in percent.
    ///
    /// Returns zero when no test has been executed.
    pub fn percentage(&self, n: usize) -> f64 {
        if self.run == 0 {
            return 0.0;
        }
        n as f64 / self.run as f64 * 100.0
    }

    /// Return whether no test has failed so far.
    #[inline]
    pub fn is_passed(&self) -> bool {
        self.passed == self.run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_of_empty_run_is_zero() {
        let stats = Stats::default();
        assert_eq!(stats.percentage(stats.passed), 0.0);
        assert_eq!(stats.percentage(stats.failed), 0.0);
        assert!(stats.is_passed());
    }

    #[test]
    fn percentage() {
        let stats = Stats {
            run: 3,
            passed: 2,
            failed: 1,
        };
        assert_eq!(format!("{:.0}", stats.percentage(stats.passed)), "67");
        assert_eq!(format!("{:.0}", stats.percentage(stats.failed)), "33");
        assert!(!stats.is_passed());
    }

    #[test]
    fn location_display() {
        let loc = Location {
            file: "src/lib.rs",
            line: 42,
            column: 5,
        };
        assert_eq!(loc.to_string(), "src/lib.rs:42:5");
    }
}
