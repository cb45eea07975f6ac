//! Reads the classifier's options from an argument vector.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Parser, ValueHint};
use petclass_common::{ConfigError, InvalidArgument, InvalidReason};
use serde::Serialize;
use tracing::debug;

use crate::arch::Arch;
use crate::defaults_file::{self, FileDefaults};
use crate::validate::{validate_directory, validate_file};

pub const DEFAULT_DIR: &str = "pet_images/";
pub const DEFAULT_DOGFILE: &str = "dognames.txt";

/// CNN image classifier for pet images.
#[derive(Parser, Debug)]
#[command(
    name = "petclass",
    version,
    about,
    args_override_self = true,
    infer_long_args = true
)]
struct Cli {
    /// A valid path to the folder of pet images [default: pet_images/].
    #[arg(long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    dir: Option<String>,

    /// A valid path to the file containing dog names [default: dognames.txt].
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    dogfile: Option<String>,

    /// The CNN model architecture for the classifier [default: vgg].
    #[arg(long, value_enum)]
    arch: Option<Arch>,

    /// TOML file with defaults for --dir, --dogfile and --arch.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Log level override (e.g. debug, petclass=trace).
    #[arg(long)]
    log_level: Option<String>,

    /// Print the parsed arguments as JSON.
    #[arg(long)]
    json: bool,
}

/// Validated options handed to the classification pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedArguments {
    #[serde(rename = "dir")]
    pub image_dir: String,
    pub dogfile: String,
    pub arch: Arch,
}

/// Parsed options plus the flags that only matter to the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub args: ParsedArguments,
    pub log_level: Option<String>,
    pub json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Invalid(#[from] InvalidArgument),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Help or version output was requested; print it and exit successfully.
    #[error("{0}")]
    Display(clap::Error),
}

impl ReadError {
    fn from_clap(err: clap::Error) -> Self {
        match err.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => ReadError::Display(err),
            _ => ReadError::Invalid(invalid_from_clap(&err)),
        }
    }

    /// The rejected value, if this is a validation failure.
    pub fn invalid(&self) -> Option<&InvalidArgument> {
        match self {
            ReadError::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

fn invalid_from_clap(err: &clap::Error) -> InvalidArgument {
    let option = match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => option_name(arg),
        _ => None,
    };
    let value = match err.get(ContextKind::InvalidValue) {
        Some(ContextValue::String(value)) => Some(value.as_str()),
        _ => None,
    };

    match (err.kind(), option.as_deref(), value) {
        (ErrorKind::InvalidValue, Some("arch"), Some(value)) => {
            InvalidArgument::invalid_choice(value, &Arch::names()).for_option("arch")
        }
        _ => {
            let rendered = err.to_string();
            let first = rendered.lines().next().unwrap_or_default();
            let message = first.strip_prefix("error: ").unwrap_or(first).trim();
            InvalidArgument::new(InvalidReason::Malformed, message)
        }
    }
}

/// `--arch <ARCH>` -> `arch`
fn option_name(arg: &str) -> Option<String> {
    arg.split_whitespace()
        .next()
        .map(|flag| flag.trim_start_matches('-'))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// The command line after clap has parsed it, before the defaults file is
/// read or any path is checked.
///
/// Split from validation so a caller can install logging from the ambient
/// flags before [`CommandLine::resolve`] emits its events.
#[derive(Debug)]
pub struct CommandLine {
    cli: Cli,
}

impl CommandLine {
    pub fn log_level(&self) -> Option<&str> {
        self.cli.log_level.as_deref()
    }

    pub fn json(&self) -> bool {
        self.cli.json
    }

    /// Layer the command line over the `--config` file and the built-in
    /// defaults, then validate each option.
    pub fn resolve(self) -> Result<ParsedArguments, ReadError> {
        let cli = self.cli;
        let file = match &cli.config {
            Some(path) => defaults_file::load_from_path(path)?,
            None => FileDefaults::default(),
        };

        // Choices are checked before touching the filesystem.
        let arch = match (cli.arch, file.arch) {
            (Some(arch), _) => arch,
            (None, Some(name)) => name
                .parse::<Arch>()
                .map_err(|e| e.for_option("arch"))?,
            (None, None) => Arch::default(),
        };

        let dir = cli
            .dir
            .or(file.dir)
            .unwrap_or_else(|| DEFAULT_DIR.to_string());
        let image_dir = validate_directory(&dir).map_err(|e| e.for_option("dir"))?;

        let dogfile = cli
            .dogfile
            .or(file.dogfile)
            .unwrap_or_else(|| DEFAULT_DOGFILE.to_string());
        let dogfile = validate_file(&dogfile).map_err(|e| e.for_option("dogfile"))?;

        debug!(dir = %image_dir, dogfile = %dogfile, arch = %arch, "arguments parsed");

        Ok(ParsedArguments {
            image_dir,
            dogfile,
            arch,
        })
    }
}

/// Parse `raw_args` with clap only. Repeated options keep the last value and
/// unambiguous prefixes of long options are accepted (`--dog` for `--dogfile`).
pub fn parse_command_line<I, T>(raw_args: I) -> Result<CommandLine, ReadError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(raw_args).map_err(ReadError::from_clap)?;
    Ok(CommandLine { cli })
}

/// Read and validate the three classifier options from `raw_args`.
///
/// `raw_args` includes the program name, as returned by
/// [`std::env::args_os`]. Omitted options fall back to the `--config` file
/// when given, then to the built-in defaults.
pub fn read_arguments<I, T>(raw_args: I) -> Result<ParsedArguments, ReadError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    parse_command_line(raw_args)?.resolve()
}

/// Like [`read_arguments`], also returning the binary's ambient flags.
pub fn read_invocation<I, T>(raw_args: I) -> Result<Invocation, ReadError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let command_line = parse_command_line(raw_args)?;
    let log_level = command_line.log_level().map(str::to_string);
    let json = command_line.json();
    Ok(Invocation {
        args: command_line.resolve()?,
        log_level,
        json,
    })
}
