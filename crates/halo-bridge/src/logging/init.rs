use std::sync::Once;

use super::SCRIPT_TARGET;

/// How the host wants bridge and script logs filtered.
///
/// `env_filter` uses the `env_logger` filter syntax, e.g.
/// `"halo_bridge=debug,wgpu=warn"`. Without it, `RUST_LOG` applies, then `info`.
///
/// `script_level` is appended for the script console target only, so page
/// output can be quieted without hiding lifecycle logs.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub script_level: Option<log::LevelFilter>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            script_level: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Filter directives after applying the `RUST_LOG` fallback.
    fn directives(&self, rust_log: Option<String>) -> String {
        let base = self
            .env_filter
            .clone()
            .or(rust_log)
            .unwrap_or_else(|| "info".to_string());

        match self.script_level {
            Some(level) => format!("{base},{SCRIPT_TARGET}={}", level.as_str().to_lowercase()),
            None => base,
        }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the global logger, once per process.
///
/// Call it before `Bridge::initialize` so console output from the first
/// loaded script is captured. Later calls are ignored, as is the call when
/// the host already installed its own logger.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let directives = config.directives(std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&directives);
        builder.write_style(config.write_style);

        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized: {directives}");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins_over_rust_log() {
        let config = LoggingConfig {
            env_filter: Some("warn".to_string()),
            ..Default::default()
        };
        assert_eq!(config.directives(Some("trace".to_string())), "warn");
    }

    #[test]
    fn falls_back_to_rust_log_then_info() {
        let config = LoggingConfig::default();
        assert_eq!(config.directives(Some("debug".to_string())), "debug");
        assert_eq!(config.directives(None), "info");
    }

    #[test]
    fn script_level_targets_console_only() {
        let config = LoggingConfig {
            script_level: Some(log::LevelFilter::Error),
            ..Default::default()
        };
        assert_eq!(config.directives(None), "info,halo::script=error");
    }
}
