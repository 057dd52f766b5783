use crate::{
    formatter::Formatter,
    report::{Location, Outcome, Report},
};
use std::{
    fmt::{self, Write as _},
    panic,
};
use termcolor::WriteColor;

/// The maximum length in bytes of a failure message.
///
/// Longer messages are truncated.
pub const MESSAGE_BUFFER_SIZE: usize = 1024;

/// The unwinding payload used to leave an aborted test body.
///
/// It is raised with `resume_unwind`, which does not run the panic hook, and
/// is caught by the suite before `run_test` returns.
#[derive(Debug)]
pub(crate) struct Abort {
    _p: (),
}

/// The reporting half of a suite, lent to a running test.
pub(crate) struct Reporter<'a> {
    pub(crate) suite_name: &'a str,
    pub(crate) output: &'a mut dyn WriteColor,
    pub(crate) formatter: &'a mut dyn Formatter,
}

impl Reporter<'_> {
    pub(crate) fn report(&mut self, report: &Report<'_>) {
        if let Err(err) = self.formatter.report(&mut *self.output, report) {
            tracing::warn!(
                error = %err,
                test = report.test_name,
                "failed to write the test report"
            );
        }
    }
}

/// Context values while running a test case.
///
/// A context is created by [`Suite::run_test`](crate::Suite::run_test) right
/// before the test body is called and dropped as soon as it returns.
pub struct Context<'a> {
    test_name: &'a str,
    reporter: Reporter<'a>,
    aborted: bool,
}

impl<'a> Context<'a> {
    pub(crate) fn new(test_name: &'a str, reporter: Reporter<'a>) -> Self {
        Self {
            test_name,
            reporter,
            aborted: false,
        }
    }

    /// Return the name of the running test case.
    #[inline]
    pub fn test_name(&self) -> &str {
        self.test_name
    }

    /// Return the name of the suite running this test case.
    #[inline]
    pub fn suite_name(&self) -> &str {
        self.reporter.suite_name
    }

    pub(crate) fn is_aborted(&self) -> bool {
        self.aborted
    }

    pub(crate) fn reporter(&mut self) -> &mut Reporter<'a> {
        &mut self.reporter
    }

    /// Report the running test case as failed and leave its body.
    ///
    /// The message is truncated to [`MESSAGE_BUFFER_SIZE`] bytes. This
    /// function never returns: control goes straight back to the
    /// `run_test` call that started the test case, skipping the rest of the
    /// body.
    ///
    /// Usually called through [`fail!`](crate::fail) or one of the
    /// `require` macros.
    ///
    /// Only the first abort of a test case is reported. If the body catches
    /// the unwind and aborts again, the later call just unwinds.
    #[inline(never)]
    pub fn abort(&mut self, location: &Location, args: fmt::Arguments<'_>) -> ! {
        if self.aborted {
            tracing::debug!(test = self.test_name, %location, "test case already aborted");
            panic::resume_unwind(Box::new(Abort { _p: () }));
        }

        let message = bounded_message(args);
        self.reporter.report(&Report {
            test_name: self.test_name,
            outcome: Outcome::Failed {
                file: location.file,
                line: location.line,
                message: &message,
            },
        });
        tracing::debug!(test = self.test_name, %location, "test case aborted");

        self.aborted = true;
        panic::resume_unwind(Box::new(Abort { _p: () }))
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("test_name", &self.test_name)
            .field("suite_name", &self.reporter.suite_name)
            .field("aborted", &self.aborted)
            .finish()
    }
}

/// Format a message into a buffer of at most `MESSAGE_BUFFER_SIZE` bytes.
pub(crate) fn bounded_message(args: fmt::Arguments<'_>) -> String {
    let mut w = BoundedWriter {
        buf: String::with_capacity(MESSAGE_BUFFER_SIZE),
    };
    let _ = w.write_fmt(args);
    w.buf
}

struct BoundedWriter {
    buf: String,
}

impl fmt::Write for BoundedWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = MESSAGE_BUFFER_SIZE - self.buf.len();
        if s.len() <= remaining {
            self.buf.push_str(s);
            return Ok(());
        }

        let mut end = remaining;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.buf.push_str(&s[..end]);
        Err(fmt::Error)
    }
}
