use std::fmt;
use std::path::PathBuf;

/// Why a command-line value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    NotADirectory,
    DirectoryNotReadable,
    NotAFile,
    FileNotReadable,
    InvalidChoice,
    /// Unknown flag, missing value, or a value that is not valid UTF-8.
    Malformed,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InvalidReason::NotADirectory => "not-a-directory",
            InvalidReason::DirectoryNotReadable => "directory-not-readable",
            InvalidReason::NotAFile => "not-a-file",
            InvalidReason::FileNotReadable => "file-not-readable",
            InvalidReason::InvalidChoice => "invalid-choice",
            InvalidReason::Malformed => "malformed",
        };
        f.write_str(name)
    }
}

/// A rejected command-line value.
///
/// Validators build this without knowing which option they serve; the
/// reader attaches the option name with [`InvalidArgument::for_option`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}{}", option_prefix(.option), .message)]
pub struct InvalidArgument {
    pub option: Option<String>,
    pub reason: InvalidReason,
    pub message: String,
}

fn option_prefix(option: &Option<String>) -> String {
    match option {
        Some(name) => format!("argument --{name}: "),
        None => String::new(),
    }
}

impl InvalidArgument {
    pub fn new(reason: InvalidReason, message: impl Into<String>) -> Self {
        Self {
            option: None,
            reason,
            message: message.into(),
        }
    }

    pub fn not_a_directory(path: &str) -> Self {
        Self::new(
            InvalidReason::NotADirectory,
            format!("readable_dir:{path} is not a valid path"),
        )
    }

    pub fn directory_not_readable(path: &str) -> Self {
        Self::new(
            InvalidReason::DirectoryNotReadable,
            format!("readable_dir:{path} is not a readable dir"),
        )
    }

    pub fn not_a_file(path: &str) -> Self {
        Self::new(InvalidReason::NotAFile, format!("{path} is not a valid file"))
    }

    pub fn file_not_readable(path: &str) -> Self {
        Self::new(InvalidReason::FileNotReadable, format!("{path} is not readable"))
    }

    pub fn invalid_choice(value: &str, choices: &[&str]) -> Self {
        let choices = choices
            .iter()
            .map(|c| format!("'{c}'"))
            .collect::<Vec<_>>()
            .join(", ");
        Self::new(
            InvalidReason::InvalidChoice,
            format!("invalid choice: '{value}' (choose from {choices})"),
        )
    }

    /// Attach the name of the option (without leading dashes) that carried the value.
    pub fn for_option(mut self, option: impl Into<String>) -> Self {
        self.option = Some(option.into());
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display_without_option() {
        let err = InvalidArgument::not_a_directory("missing/");
        assert_eq!(err.to_string(), "readable_dir:missing/ is not a valid path");
        assert_eq!(err.reason, InvalidReason::NotADirectory);
        assert!(err.option.is_none());
    }

    #[test]
    fn invalid_argument_display_with_option() {
        let err = InvalidArgument::file_not_readable("dognames.txt").for_option("dogfile");
        assert_eq!(
            err.to_string(),
            "argument --dogfile: dognames.txt is not readable"
        );
        assert_eq!(err.option.as_deref(), Some("dogfile"));
    }

    #[test]
    fn path_messages() {
        assert_eq!(
            InvalidArgument::directory_not_readable("x").message,
            "readable_dir:x is not a readable dir"
        );
        assert_eq!(InvalidArgument::not_a_file("x").message, "x is not a valid file");
    }

    #[test]
    fn invalid_choice_lists_choices() {
        let err = InvalidArgument::invalid_choice("lenet", &["vgg", "alexnet", "resnet"])
            .for_option("arch");
        assert_eq!(err.reason, InvalidReason::InvalidChoice);
        assert_eq!(
            err.to_string(),
            "argument --arch: invalid choice: 'lenet' (choose from 'vgg', 'alexnet', 'resnet')"
        );
    }

    #[test]
    fn reason_display() {
        assert_eq!(InvalidReason::NotADirectory.to_string(), "not-a-directory");
        assert_eq!(
            InvalidReason::DirectoryNotReadable.to_string(),
            "directory-not-readable"
        );
        assert_eq!(InvalidReason::InvalidChoice.to_string(), "invalid-choice");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");
    }
}
