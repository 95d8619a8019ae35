//! A tiny command-line greeter.
//!
//! The crate is split into a pure [`greet`] function and the [`cli`] glue that
//! parses invocation arguments, prints the greeting and maps failures onto
//! process exit codes. The binary in `src/main.rs` only wires the real process
//! streams into [`cli::run`].
//!
//! Example
//! ```
//! assert_eq!(greeter::greet("World"), "Hello, World!");
//!
//! let mut out = Vec::new();
//! let code = greeter::cli::run(&["Ada"], &mut out, &mut std::io::sink()).unwrap();
//! assert_eq!(code, 0);
//! assert_eq!(out, b"Hello, Ada!\n");
//! ```

pub mod cli;
mod greeting;
pub mod tracing;

/// Just a convenient re-export of the greeting function.
pub use greeting::greet;
