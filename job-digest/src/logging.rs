//! Terminal logging for the digest run.

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Environment variable holding the log level (`error` .. `trace`).
pub const LEVEL_VAR: &str = "DIGEST_LOG";

/// Installs the global terminal logger. Unknown or absent levels fall back to `info`.
pub fn initialize() {
    let level = std::env::var(LEVEL_VAR)
        .ok()
        .and_then(|value| parse_level(&value))
        .unwrap_or(LevelFilter::Info);

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let _ = TermLogger::init(level, config, TerminalMode::Mixed, ColorChoice::Auto);
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}
