/// Workspace crate targets that receive log output.
const CRATE_TARGETS: &[&str] = &["cv_chain_core", "cv_chain_exemple"];

/// Initialize logging based on CLI verbosity level.
///
/// Mapping:
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
///
/// `RUST_LOG` overrides the CLI flag if set.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let default_filter = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
}
