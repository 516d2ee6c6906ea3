use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// Filter precedence: `env_filter`, then `RUST_LOG`, then `default_level`
/// applied to every target.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter directives, e.g. "stargrade_ui=debug,resvg=warn".
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    /// Raises the fallback level to `debug` when `verbose` is set.
    pub fn verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.default_level = LevelFilter::Debug;
        }
        self
    }

    /// Filter directives to hand to `env_logger`, given the `RUST_LOG` value.
    fn directives(&self, rust_log: Option<String>) -> String {
        self.env_filter
            .clone()
            .or(rust_log)
            .unwrap_or_else(|| self.default_level.to_string().to_lowercase())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global `env_logger` once; later calls are no-ops.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let directives = config.directives(std::env::var("RUST_LOG").ok());

        let installed = env_logger::Builder::new()
            .parse_filters(&directives)
            .write_style(config.write_style)
            .try_init();

        // Another logger (e.g. a test harness) may already be installed.
        if installed.is_ok() {
            log::debug!("logging initialized with filter {directives:?}");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins_over_env() {
        let config = LoggingConfig { env_filter: Some("warn".into()), ..LoggingConfig::default() };
        assert_eq!(config.directives(Some("trace".into())), "warn");
    }

    #[test]
    fn env_wins_over_default_level() {
        assert_eq!(LoggingConfig::default().directives(Some("stargrade_ui=debug".into())), "stargrade_ui=debug");
    }

    #[test]
    fn default_level_is_info() {
        assert_eq!(LoggingConfig::default().directives(None), "info");
    }

    #[test]
    fn verbose_raises_default_to_debug() {
        assert_eq!(LoggingConfig::default().verbose(true).directives(None), "debug");
        assert_eq!(LoggingConfig::default().verbose(false).directives(None), "info");
    }
}
