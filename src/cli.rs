use crate::greet;
use crate::tracing::{debug, warn};
use anyhow::{Context, Result};
use argh::{EarlyExit, FromArgs};
use std::io::Write;

/// Conventional process exit code type used by this crate.
pub type ExitCode = i32;

/// The greeting was printed.
pub const EXIT_SUCCESS: ExitCode = 0;
/// Something other than the arguments went wrong, e.g. stdout was closed.
pub const EXIT_FAILURE: ExitCode = 1;
/// The argument list was missing or malformed.
pub const EXIT_USAGE: ExitCode = 2;

/// Name the program reports in usage and diagnostics.
pub const PROGRAM_NAME: &str = "greeter";

#[derive(FromArgs, Debug, PartialEq)]
/// Print a greeting for the given name to standard output.
pub struct Greet {
    #[argh(positional)]
    /// name to greet; used verbatim, may be empty or start with a dash.
    pub name: String,
}

impl Greet {
    /// Writes the greeting line for this invocation.
    pub fn execute(self, stdout: &mut dyn Write) -> Result<ExitCode> {
        writeln!(stdout, "{}", greet(&self.name)).context("can't write greeting")?;
        Ok(EXIT_SUCCESS)
    }

    /// Usage text rendered by `argh` for this command.
    pub fn usage() -> String {
        match Greet::from_args(&[PROGRAM_NAME], &["--help"]) {
            Ok(_) => String::new(),
            Err(EarlyExit { output, .. }) => output,
        }
    }
}

/// Runs one invocation with `args` (program name excluded).
///
/// The single argument is taken as the name without any option parsing, so
/// `help`, `--help` and `-x` are greeted like any other name. Usage problems
/// are reported on `stderr` and turned into [`EXIT_USAGE`]; only I/O failures
/// come back as `Err`.
pub fn run(args: &[&str], stdout: &mut dyn Write, stderr: &mut dyn Write) -> Result<ExitCode> {
    match args {
        [] => {
            warn!("no name given");
            writeln!(stderr, "{}: missing required argument: name", PROGRAM_NAME)?;
            stderr.write_all(Greet::usage().as_bytes())?;
            Ok(EXIT_USAGE)
        }
        [name] => {
            debug!(name = %name, "greeting");
            Greet {
                name: name.to_string(),
            }
            .execute(stdout)
        }
        _ => {
            warn!(?args, "too many arguments");
            writeln!(
                stderr,
                "{}: expected exactly one argument, got {}",
                PROGRAM_NAME,
                args.len()
            )?;
            stderr.write_all(Greet::usage().as_bytes())?;
            Ok(EXIT_USAGE)
        }
    }
}
