/// Builds the greeting for `name`.
///
/// The name is embedded verbatim; empty or unusual input is not rejected.
pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}
