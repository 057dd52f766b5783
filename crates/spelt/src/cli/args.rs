//! Definition of command line interface.

use crate::{cli::exit_status::ExitStatus, error::ConfigError, formatter::OutputFormat};
use getopts::Options;
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

/// Command line arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// The format of the results.
    pub format: OutputFormat,
    /// Where the results are written.
    pub output: Output,
    /// Coloring of the terminal output.
    pub color: ColorConfig,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            format: OutputFormat::Terminal,
            output: Output::Stdout,
            color: ColorConfig::Auto,
        }
    }
}

impl Args {
    /// Parse command line arguments.
    ///
    /// On `-h`, usage errors and invalid values, the diagnostic is printed
    /// here and the status the process should exit with is returned.
    pub fn from_env() -> Result<Self, ExitStatus> {
        let args: Vec<_> = std::env::args().collect();
        let parser = Parser::new(&args[..]);
        match parser.parse() {
            Ok(Some(args)) => Ok(args),
            Ok(None) => {
                parser.print_usage();
                Err(ExitStatus::OK)
            }
            Err(ArgsError::Usage(err)) => {
                eprintln!("CLI argument error: {}", err);
                parser.print_usage();
                Err(ExitStatus::FAILED)
            }
            Err(ArgsError::Config(err)) => {
                eprintln!("fatal: {}", err);
                Err(ExitStatus::FAILED)
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn parse_from(args: &[&str]) -> Result<Option<Self>, ArgsError> {
        let args: Vec<String> = args.iter().map(|&s| s.to_owned()).collect();
        Parser::new(&args[..]).parse()
    }
}

/// The destination of the results.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// The standard output stream.
    Stdout,
    /// A file, created or truncated when the suite is configured.
    File(PathBuf),
}

impl FromStr for Output {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" => Ok(Output::Stdout),
            path => Ok(Output::File(path.into())),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            v => Err(ConfigError::UnknownFormat(v.into())),
        }
    }
}

/// The color configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ColorConfig {
    /// Colorize if the terminal supports it.
    Auto,
    /// Always colorize output.
    Always,
    /// Never colorize output.
    Never,
}

impl From<ColorConfig> for termcolor::ColorChoice {
    fn from(color: ColorConfig) -> Self {
        match color {
            ColorConfig::Auto => termcolor::ColorChoice::Auto,
            ColorConfig::Always => termcolor::ColorChoice::Always,
            ColorConfig::Never => termcolor::ColorChoice::Never,
        }
    }
}

impl FromStr for ColorConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorConfig::Auto),
            "always" => Ok(ColorConfig::Always),
            "never" => Ok(ColorConfig::Never),
            v => Err(ConfigError::UnknownColor(v.into())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum ArgsError {
    #[error(transparent)]
    Usage(#[from] getopts::Fail),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

struct Parser<'a> {
    args: &'a [String],
    opts: Options,
}

impl<'a> Parser<'a> {
    fn new(args: &'a [String]) -> Self {
        let mut opts = Options::new();
        opts.optflag("h", "help", "Display this message");
        opts.optopt(
            "f",
            "format",
            "Configure the format of the results:
                terminal = human-readable lines (default);
                json     = a single JSON document;",
            "terminal|json",
        );
        opts.optopt(
            "o",
            "output",
            "Write the results to PATH ('-' for the standard output, default)",
            "PATH",
        );
        opts.optopt(
            "",
            "color",
            "Configure coloring of output:
                auto   = colorize if the terminal supports it (default);
                always = always colorize output;
                never  = never colorize output;",
            "auto|always|never",
        );

        Self { args, opts }
    }

    fn print_usage(&self) {
        let binary = self.args.get(0).map_or("spelt", |s| s.as_str());
        let progname = Path::new(binary)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(binary);

        let message = format!("Usage: {} [OPTIONS]", progname);
        eprintln!("{}", self.opts.usage(&message));
    }

    fn parse(&self) -> Result<Option<Args>, ArgsError> {
        let args = &self.args[..];

        let matches = self.opts.parse(args.get(1..).unwrap_or(args))?;
        if matches.opt_present("h") {
            return Ok(None);
        }

        let mut parsed = Args::default();
        if let Some(format) = matches.opt_str("f") {
            parsed.format = format.parse()?;
        }
        if let Some(output) = matches.opt_str("o") {
            parsed.output = output.parse()?;
        }
        if let Some(color) = matches.opt_str("color") {
            parsed.color = color.parse()?;
        }

        Ok(Some(parsed))
    }
}
