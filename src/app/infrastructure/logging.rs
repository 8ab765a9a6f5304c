use log::LevelFilter;

/// Route `log` output to stderr.
///
/// The server's stdout carries MCP traffic, so nothing may ever be logged there.
pub fn init(level: LevelFilter) {
    let result = env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .parse_env("INTERACTIVE_FEEDBACK_LOG")
        .try_init();

    if let Err(e) = result {
        eprintln!("Logger already initialised: {}", e);
    }
}
