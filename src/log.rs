use log::LevelFilter;

/// Initialise `env_logger` for the command-line tool.
///
/// Warnings and errors are shown by default; `verbose` raises the level to
/// `Debug`. `RUST_LOG`, when set, overrides both.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second initialisation keeps the first logger
    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}
