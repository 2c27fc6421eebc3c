// Copyright (C) 2020-2026 Andy Kurnia.

/// Sets up `env_logger` for the binaries.
///
/// `verbose` picks Debug over Info. An explicit `RUST_LOG` wins over both.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    // a second init (tests, shell reruns) is harmless.
    let _ = builder.try_init();
}
