//! petclass: reads the classifier's command-line options and reports them.
//!
//! Exit status is 0 on success (including `--help`/`--version`) and 2 when
//! an option is rejected, matching the usual usage-error convention.

use std::process::ExitCode;

use petclass_args::{parse_command_line, ParsedArguments, ReadError};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

const USAGE_ERROR: u8 = 2;

fn init_logging(log_level: Option<&str>) {
    let directive = log_level.unwrap_or("petclass=info");
    let filter = match directive.parse::<Directive>() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(e) => {
            eprintln!("petclass: ignoring invalid log level '{directive}': {e}");
            EnvFilter::from_default_env()
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn summary(args: &ParsedArguments) -> String {
    format!(
        "Command Line Arguments:\n     dir = {}\n    arch = {}\n dogfile = {}",
        args.image_dir, args.arch, args.dogfile
    )
}

fn report(args: &ParsedArguments, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(args)?);
    } else {
        println!("{}", summary(args));
    }
    Ok(())
}

fn exit_with(err: ReadError) -> ExitCode {
    match err {
        ReadError::Display(info) => match info.print() {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        },
        e => {
            eprintln!("petclass: error: {e}");
            eprintln!("Run 'petclass --help' for usage information.");
            ExitCode::from(USAGE_ERROR)
        }
    }
}

fn main() -> ExitCode {
    let command_line = match parse_command_line(std::env::args_os()) {
        Ok(command_line) => command_line,
        Err(e) => return exit_with(e),
    };

    // Installed before validation so the reader's events are recorded.
    init_logging(command_line.log_level());
    let json = command_line.json();

    let args = match command_line.resolve() {
        Ok(args) => args,
        Err(e) => return exit_with(e),
    };
    tracing::info!(
        "petclass v{} using {} on {}",
        env!("CARGO_PKG_VERSION"),
        args.arch,
        args.image_dir
    );

    if let Err(e) = report(&args, json) {
        tracing::error!("failed to serialize arguments: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use petclass_args::Arch;

    fn sample() -> ParsedArguments {
        ParsedArguments {
            image_dir: "pet_images/".into(),
            dogfile: "dognames.txt".into(),
            arch: Arch::Vgg,
        }
    }

    #[test]
    fn summary_lists_all_three_options() {
        assert_eq!(
            summary(&sample()),
            "Command Line Arguments:\n     dir = pet_images/\n    arch = vgg\n dogfile = dognames.txt"
        );
    }

    #[test]
    fn json_uses_option_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["dir"], "pet_images/");
        assert_eq!(json["dogfile"], "dognames.txt");
        assert_eq!(json["arch"], "vgg");
    }
}
