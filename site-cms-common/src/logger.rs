use site_cms_error::{CmsError, CmsResult};
use std::{
    str::FromStr,
    sync::{Arc, Mutex, PoisonError},
};
use tracing::{subscriber::set_global_default, Level};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    filter::DynFilterFn,
    fmt::{self},
    layer::SubscriberExt,
    Layer, Registry,
};

/// Console plus daily rolling file logging with a level that can change at runtime.
pub struct Logger {
    level: Arc<Mutex<Level>>,
    _file_guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn new(level: Option<Level>) -> Self {
        Logger {
            level: Arc::new(Mutex::new(level.unwrap_or(Level::INFO))),
            _file_guard: None,
        }
    }

    /// Level from configuration, falling back to debug in debug builds and info otherwise.
    pub fn level_from_config(level: Option<&str>) -> Level {
        level
            .and_then(|l| Level::from_str(l.trim()).ok())
            .unwrap_or(if cfg!(debug_assertions) {
                Level::DEBUG
            } else {
                Level::INFO
            })
    }

    #[inline]
    pub fn set_level(&self, new_level: Level) {
        *self.level.lock().unwrap_or_else(PoisonError::into_inner) = new_level;
    }

    #[inline]
    pub fn get_level(&self) -> Level {
        *self.level.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Installs the global subscriber, writing to stdout and to `dir/file` rotated daily.
    pub fn initialize(&mut self, dir: &str, file: &str) -> CmsResult<()> {
        let file_appender = rolling::daily(dir, file);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        self._file_guard = Some(guard);

        let console_filter = {
            let level = Arc::clone(&self.level);
            DynFilterFn::new(move |metadata, _| {
                metadata.level() <= &*level.lock().unwrap_or_else(PoisonError::into_inner)
            })
        };
        let file_filter = {
            let level = Arc::clone(&self.level);
            DynFilterFn::new(move |metadata, _| {
                metadata.level() <= &*level.lock().unwrap_or_else(PoisonError::into_inner)
            })
        };

        let console_layer = {
            #[cfg(debug_assertions)]
            let layer = fmt::layer()
                .pretty()
                .with_writer(std::io::stdout)
                .with_file(true)
                .with_line_number(true);

            #[cfg(not(debug_assertions))]
            let layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_file(false)
                .with_line_number(false);

            layer.with_filter(console_filter)
        };

        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_filter(file_filter);

        let subscriber = Registry::default().with(console_layer).with(file_layer);
        set_global_default(subscriber).map_err(|_| CmsError::from("Failed to set logger"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_wins_over_build_default() {
        assert_eq!(Logger::level_from_config(Some("warn")), Level::WARN);
        assert_eq!(Logger::level_from_config(Some(" TRACE ")), Level::TRACE);
        let fallback = Logger::level_from_config(Some("loud"));
        assert!(fallback == Level::DEBUG || fallback == Level::INFO);
    }

    #[test]
    fn level_can_change_at_runtime() {
        let logger = Logger::new(Some(Level::INFO));
        logger.set_level(Level::ERROR);
        assert_eq!(logger.get_level(), Level::ERROR);
    }
}
