/*!
A minimal unit testing framework for Rust.

Test cases are plain functions receiving a [`Context`]. They are run one
after another by a [`Suite`], which counts the results and renders them
through a pluggable [`Formatter`]. A failed assertion aborts only the test
case it belongs to; the suite then carries on with the next one.

```no_run
use spelt::{require, require_str_eq, run_test, Context, Suite};

fn strings(ctx: &mut Context<'_>) {
    require_str_eq!(ctx, "foo", "foo");
}

fn truth(ctx: &mut Context<'_>) {
    let x = 1 + 1 == 2;
    require!(ctx, x);
}

fn main() {
    let mut suite = Suite::from_env("main");
    suite.start();
    let _ = run_test!(suite, strings);
    let _ = run_test!(suite, truth);
    suite.print_results_and_exit();
}
```
!*/

#![doc(html_root_url = "https://docs.rs/spelt/0.1.0-dev")]
#![deny(missing_docs)]
#![forbid(clippy::unimplemented, clippy::todo)]

#[macro_use]
mod macros;
pub mod check;
mod cli;
mod context;
mod error;
pub mod escape;
mod formatter;
mod global;
mod logger;
mod report;
mod suite;
mod termination;

pub use crate::{
    cli::{Args, ColorConfig, ExitStatus, Output},
    context::{Context, MESSAGE_BUFFER_SIZE},
    error::ConfigError,
    formatter::{Formatter, JsonFormatter, OutputFormat, TerminalFormatter},
    logger::{init_logger, LOG_ENV},
    report::{Location, Outcome, Report, Stats},
    suite::{Status, Suite},
    termination::Termination,
};

hidden_item! {
    /// Re-exported items for the assertion macros.
    pub mod _test_reexports {
        pub use crate::{
            __location as location, //
            check,
            report::Location,
        };
        pub use std::{column, file, format_args, line, option::Option, stringify};
    }
}
