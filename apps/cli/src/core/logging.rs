use tracing::level_filters::LevelFilter;

/// Map `-q` / `-v` counts onto a level. Problems are reported at warn and
/// error, so the default shows those and nothing else.
pub fn level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. Diagnostics go to stderr; stdout carries
/// only the skip report.
pub fn init(verbose: u8, quiet: bool) {
    tracing_subscriber::fmt()
        .with_max_level(level(verbose, quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
