use crate::cli::{actions::Action, commands, dispatch::handler, globals::GlobalArgs};
use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Map verbosity count to tracing level
const fn get_verbosity_level(verbosity: u8) -> tracing::Level {
    match verbosity {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

/// Start the CLI
///
/// # Errors
///
/// Returns an error if logging initialization or action dispatch fails
pub fn start() -> Result<(Action, GlobalArgs)> {
    let matches = commands::new().get_matches();

    let verbosity_level = get_verbosity_level(
        matches
            .get_one::<u8>(commands::ARG_VERBOSITY)
            .copied()
            .unwrap_or(0),
    );

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    // RUST_LOG=
    let env_filter = EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy();

    let subscriber = Registry::default().with(fmt_layer).with(env_filter);

    tracing::subscriber::set_global_default(subscriber)?;

    handler(&matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(get_verbosity_level(0), tracing::Level::ERROR);
        assert_eq!(get_verbosity_level(1), tracing::Level::WARN);
        assert_eq!(get_verbosity_level(2), tracing::Level::INFO);
        assert_eq!(get_verbosity_level(3), tracing::Level::DEBUG);
        assert_eq!(get_verbosity_level(4), tracing::Level::TRACE);
        assert_eq!(get_verbosity_level(9), tracing::Level::TRACE);
    }
}
