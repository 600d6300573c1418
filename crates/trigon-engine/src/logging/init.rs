use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "trigon_engine=debug,wgpu_core=warn") and takes precedence over `RUST_LOG`.
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Crates that log per-frame or per-object detail at `info`.
const NOISY_MODULES: [&str; 3] = ["wgpu_core", "wgpu_hal", "naga"];

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match resolve_filter(config.env_filter, std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
                for module in NOISY_MODULES {
                    builder.filter_module(module, log::LevelFilter::Warn);
                }
            }
        }

        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging initialized");
    });
}

/// Explicit configuration wins over the environment; blank filters count as unset.
fn resolve_filter(configured: Option<String>, env: Option<String>) -> Option<String> {
    configured
        .into_iter()
        .chain(env)
        .find(|f| !f.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_filter_beats_environment() {
        let f = resolve_filter(Some("debug".into()), Some("warn".into()));
        assert_eq!(f.as_deref(), Some("debug"));
    }

    #[test]
    fn environment_used_when_unconfigured() {
        let f = resolve_filter(None, Some("trigon_engine=trace".into()));
        assert_eq!(f.as_deref(), Some("trigon_engine=trace"));
    }

    #[test]
    fn blank_filters_are_ignored() {
        assert_eq!(resolve_filter(Some("  ".into()), None), None);
        assert_eq!(resolve_filter(Some(String::new()), Some("info".into())).as_deref(), Some("info"));
    }

    #[test]
    fn default_config_defers_to_environment() {
        let cfg = LoggingConfig::default();
        assert!(cfg.env_filter.is_none());
    }
}
