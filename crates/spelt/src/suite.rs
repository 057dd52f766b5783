use crate::{
    cli::ExitStatus,
    context::{bounded_message, Context, Reporter},
    formatter::{Formatter, TerminalFormatter},
    global,
    report::{Location, Outcome, Report, Stats},
    termination::Termination,
};
use maybe_unwind::maybe_unwind;
use std::{io::Write as _, panic::AssertUnwindSafe};
use termcolor::{ColorChoice, StandardStream, WriteColor};

/// The result of a single `run_test` call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum Status {
    /// The test body returned normally.
    Passed,
    /// The test body was aborted, returned an error or panicked.
    Failed,
}

impl Status {
    /// Return whether the test case passed.
    #[inline]
    pub fn is_passed(self) -> bool {
        self == Status::Passed
    }
}

/// A test suite.
///
/// A suite is driven by its owner: call [`start`](Suite::start) once, then
/// [`run_test`](Suite::run_test) for every test case, and finally
/// [`print_results`](Suite::print_results) or
/// [`print_results_and_exit`](Suite::print_results_and_exit).
pub struct Suite<'a> {
    name: String,
    output: Box<dyn WriteColor + 'a>,
    formatter: Box<dyn Formatter + 'a>,
    stats: Stats,
}

impl<'a> Suite<'a> {
    /// Create a new suite writing colored terminal output to the standard
    /// output stream.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            output: Box::new(StandardStream::stdout(ColorChoice::Auto)),
            formatter: Box::new(TerminalFormatter::new()),
            stats: Stats::default(),
        }
    }

    /// Return the name of this suite.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the counters collected so far.
    #[inline]
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Replace the destination of the results.
    ///
    /// Plain writers can be used by wrapping them with [`termcolor::NoColor`].
    pub fn set_output<W>(&mut self, output: W)
    where
        W: WriteColor + 'a,
    {
        self.output = Box::new(output);
    }

    /// Replace the formatter used to render the results.
    pub fn set_formatter<F>(&mut self, formatter: F)
    where
        F: Formatter + 'a,
    {
        self.formatter = Box::new(formatter);
    }

    /// Print the suite header.
    pub fn start(&mut self) {
        if let Err(err) = self.formatter.print_header(&mut *self.output, &self.name) {
            tracing::warn!(error = %err, suite = %self.name, "failed to write the suite header");
        }
    }

    /// Run a test case.
    ///
    /// The body receives a [`Context`] that the assertion macros use to
    /// abort it. The first failed assertion ends the body; the failure has
    /// already been reported when control comes back here. A body that
    /// returns an error or panics is reported as failed at the location of
    /// this call.
    ///
    /// A closure whose body diverges, such as `|_| panic!(..)` or
    /// `|ctx| fail!(ctx)`, needs an explicit `-> ()` return type since its
    /// return type cannot be inferred from the body.
    #[track_caller]
    pub fn run_test<F, T>(&mut self, test_name: &str, body: F) -> Status
    where
        F: FnOnce(&mut Context<'_>) -> T,
        T: Termination,
    {
        let caller = Location::from(std::panic::Location::caller());
        global::install_panic_hook();

        self.stats.run += 1;
        tracing::debug!(suite = %self.name, test = test_name, "running test case");

        let mut ctx = Context::new(
            test_name,
            Reporter {
                suite_name: &self.name,
                output: &mut *self.output,
                formatter: &mut *self.formatter,
            },
        );
        let result = maybe_unwind(AssertUnwindSafe(|| body(&mut ctx).into_result()));

        let status = if ctx.is_aborted() {
            Status::Failed
        } else {
            let message = match result {
                Ok(Ok(())) => None,
                Ok(Err(err)) => Some(bounded_message(format_args!("{:#}", err))),
                Err(unwind) => Some(bounded_message(format_args!("{}", unwind))),
            };
            let outcome = match message {
                None => Outcome::Passed,
                Some(ref message) => Outcome::Failed {
                    file: caller.file,
                    line: caller.line,
                    message,
                },
            };
            ctx.reporter().report(&Report { test_name, outcome });
            if outcome.is_passed() {
                Status::Passed
            } else {
                Status::Failed
            }
        };
        drop(ctx);

        match status {
            Status::Passed => self.stats.passed += 1,
            Status::Failed => self.stats.failed += 1,
        }
        tracing::debug!(suite = %self.name, test = test_name, ?status, "test case finished");

        status
    }

    /// Return whether every test case run so far has passed.
    #[inline]
    pub fn passed(&self) -> bool {
        self.stats.is_passed()
    }

    /// Print the summary of the results.
    pub fn print_results(&mut self) {
        if let Err(err) = self.formatter.print_summary(&mut *self.output, &self.stats) {
            tracing::warn!(error = %err, suite = %self.name, "failed to write the results");
        }
    }

    /// Print the summary of the results and terminate the process.
    ///
    /// The process exits successfully only if every test case passed.
    pub fn print_results_and_exit(mut self) -> ! {
        self.print_results();
        let status = if self.passed() {
            ExitStatus::OK
        } else {
            ExitStatus::FAILED
        };
        drop(self);
        status.exit()
    }
}

impl Drop for Suite<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.output.flush() {
            tracing::warn!(error = %err, suite = %self.name, "failed to flush the output");
        }
    }
}
