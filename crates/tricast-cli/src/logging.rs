//! Logger setup for the command line.

use log::LevelFilter;

/// Map `-v` occurrences to a level filter.
///
/// No flag shows warnings and errors only; each `-v` adds one level.
pub fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger.
///
/// `RUST_LOG`, when set, refines the level chosen by `verbosity`.
pub fn setup_logging(verbosity: u8) {
    use std::io::Write;

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_from_verbosity(verbosity))
        .parse_env("RUST_LOG")
        .format(|buf, record| {
            let top_level_module = record
                .module_path()
                .and_then(|m| m.split("::").next())
                .unwrap_or("tricast");
            writeln!(
                buf,
                "{:5} [{}]: {}",
                record.level(),
                top_level_module,
                record.args()
            )
        });

    if builder.try_init().is_err() {
        log::warn!("logger already initialized");
    }
}
