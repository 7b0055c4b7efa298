use anyhow::{Result, anyhow};
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

pub struct LogConfig {
    pub filter: String,
}

/// Process-wide tracing subscriber whose filter can be swapped after startup.
pub struct Logger {
    reload_handle: reload::Handle<EnvFilter, Registry>,
    pinned_by_env: bool,
}

impl Logger {
    /// Installs the global subscriber at `info`, or at `RUST_LOG` when set.
    pub fn new_bootstrap() -> Self {
        let from_env = EnvFilter::try_from_default_env().ok();
        let pinned_by_env = from_env.is_some();
        let filter = from_env.unwrap_or_else(|| EnvFilter::new("info"));
        let (filter, reload_handle) = reload::Layer::new(filter);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();

        Self {
            reload_handle,
            pinned_by_env,
        }
    }

    /// Applies the configured filter. A filter given through `RUST_LOG` wins.
    pub fn reload_from_config(&self, config: &LogConfig) -> Result<()> {
        if self.pinned_by_env {
            return Ok(());
        }
        let filter = EnvFilter::try_new(&config.filter).map_err(|e| anyhow!(e))?;
        self.reload_handle.reload(filter).map_err(|e| anyhow!(e))?;
        Ok(())
    }
}
