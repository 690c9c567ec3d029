//! logger.rs - Logging setup for the wordmask CLI.
//!
//! `RUST_LOG` is honored unless an explicit level is passed in, which is how
//! `--quiet` and `--debug` take precedence over the environment.

use std::sync::Once;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Initializes `env_logger` exactly once per process.
pub fn init_logger(level: Option<LevelFilter>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
        if let Some(level) = level {
            builder.filter_level(level);
        }
        builder.format_timestamp(None).target(env_logger::Target::Stderr);
        // A test harness may already have installed a logger.
        let _ = builder.try_init();
    });
}

/// Picks the level implied by the global flags, if any.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_wins_over_debug() {
        assert_eq!(level_from_flags(true, true), Some(LevelFilter::Off));
        assert_eq!(level_from_flags(false, true), Some(LevelFilter::Debug));
        assert_eq!(level_from_flags(false, false), None);
    }
}
