use anyhow::Context;
use greeter::cli::{self, EXIT_FAILURE, EXIT_USAGE, PROGRAM_NAME};
use greeter::tracing::init_tracing;
use std::io::Write;
use std::process;

fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("{}: can't set up logging: {:#}", PROGRAM_NAME, e);
    }

    let args: Vec<String> = match std::env::args_os()
        .skip(1)
        .map(|a| a.into_string())
        .collect::<Result<_, _>>()
    {
        Ok(args) => args,
        Err(arg) => {
            eprintln!("{}: argument is not valid UTF-8: {:?}", PROGRAM_NAME, arg);
            process::exit(EXIT_USAGE);
        }
    };
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let code = run(&args).unwrap_or_else(|e| {
        eprintln!("{}: {:#}", PROGRAM_NAME, e);
        EXIT_FAILURE
    });
    process::exit(code);
}

fn run(args: &[&str]) -> anyhow::Result<cli::ExitCode> {
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();
    let code = cli::run(args, &mut stdout, &mut stderr)?;
    stdout.flush().context("can't flush stdout")?;
    Ok(code)
}
