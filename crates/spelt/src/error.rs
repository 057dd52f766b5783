use std::{io, path::PathBuf};

/// Errors detected while configuring a suite from the command line.
///
/// These happen before any test case runs and are fatal for the
/// test process.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The value of `-f` does not name a known output format.
    #[error("unknown output format '{0}'")]
    UnknownFormat(String),

    /// The value of `--color` is not one of `auto`, `always` or `never`.
    #[error("argument for --color must be auto, always, or never (was {0})")]
    UnknownColor(String),

    /// The file given with `-o` cannot be opened for writing.
    #[error("cannot open {}: {source}", .path.display())]
    Output {
        /// The path passed on the command line.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}
