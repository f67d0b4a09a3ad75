use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger for hosts that have none of their own.
///
/// Map loading reports dropped footholds through the `log` facade; embedders
/// with their own logger can skip this entirely. When `verbose` is `true`
/// debug messages are printed, otherwise info level and above. `RUST_LOG`
/// overrides either default.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // `try_init` only fails if a logger was already set. Ignore that case so
    // tests can call `init` multiple times without panicking.
    let _ = Builder::from_env(Env::default().default_filter_or(level.to_string())).try_init();
}
