//! Logging setup for the `hill_terrain` binary

/// Install `env_logger` at `info`, or at whatever `RUST_LOG` asks for.
///
/// Per-hill placement is logged at `debug`, skipped hills at `warn`;
/// `RUST_LOG=hill_terrain=debug` shows every stamp.
pub fn init() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();
}
