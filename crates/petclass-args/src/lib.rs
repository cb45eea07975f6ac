//! Command-line argument reader for the pet-image classifier.
//!
//! Reads `--dir`, `--dogfile` and `--arch`, applies defaults, validates the
//! two paths against the filesystem and returns a [`ParsedArguments`].
//! Defaults can also come from a TOML file passed with `--config`.
//!
//! ```rust,no_run
//! use petclass_args::read_arguments;
//!
//! let args = read_arguments(std::env::args_os()).expect("invalid arguments");
//! println!("{} {} {}", args.image_dir, args.dogfile, args.arch);
//! ```

pub mod arch;
pub mod defaults_file;
pub mod reader;
pub mod validate;

pub use arch::Arch;
pub use defaults_file::FileDefaults;
pub use reader::{
    parse_command_line, read_arguments, read_invocation, CommandLine, Invocation,
    ParsedArguments, ReadError, DEFAULT_DIR, DEFAULT_DOGFILE,
};
pub use validate::{validate_directory, validate_file};
