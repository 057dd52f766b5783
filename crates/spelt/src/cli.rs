//! Command line bootstrap of a test suite.

mod args;
mod exit_status;

pub use self::{
    args::{Args, ColorConfig, Output},
    exit_status::ExitStatus,
};

use crate::{error::ConfigError, logger, suite::Suite};
use std::{fs::File, io::BufWriter};
use termcolor::{NoColor, StandardStream};

impl Suite<'static> {
    /// Create a new suite configured from the command line arguments.
    ///
    /// This also installs the diagnostics subscriber (see
    /// [`init_logger`](crate::init_logger)). On `-h` the usage is printed
    /// and the process exits successfully; invalid arguments terminate the
    /// process with a failure status before any test case runs.
    pub fn from_env(name: impl Into<String>) -> Self {
        logger::init_logger();

        let args = Args::from_env().unwrap_or_else(|st| st.exit());
        let mut suite = Suite::new(name);
        if let Err(err) = suite.initialize_from_args(&args) {
            tracing::error!(error = %err, "cannot configure the test suite");
            eprintln!("fatal: {}", err);
            ExitStatus::FAILED.exit();
        }
        suite
    }
}

impl<'a> Suite<'a> {
    /// Apply the output and format selected on the command line.
    ///
    /// Output files are created (or truncated) here and never receive
    /// color codes.
    pub fn initialize_from_args(&mut self, args: &Args) -> Result<(), ConfigError> {
        match args.output {
            Output::Stdout => self.set_output(StandardStream::stdout(args.color.into())),
            Output::File(ref path) => {
                let file = File::create(path).map_err(|source| ConfigError::Output {
                    path: path.clone(),
                    source,
                })?;
                self.set_output(NoColor::new(BufWriter::new(file)));
            }
        }
        self.set_formatter(args.format.formatter());
        tracing::debug!(suite = self.name(), ?args, "configured test suite");
        Ok(())
    }
}
