use std::env;
use std::io::{self, IsTerminal};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::{Format, JsonFields};
use tracing_subscriber::{prelude::*, Registry};

pub const LOG_LEVEL_ENV: &str = "ASTRX_REFLEX_LOG";
pub const LOG_FORMAT_ENV: &str = "ASTRX_REFLEX_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggingOpts {
    pub level: LevelFilter,
    pub json: bool,
}

impl Default for LoggingOpts {
    fn default() -> Self {
        Self {
            level: LevelFilter::OFF,
            json: false,
        }
    }
}

impl LoggingOpts {
    pub fn from_env() -> Self {
        Self::parse(
            env::var(LOG_LEVEL_ENV).ok().as_deref(),
            env::var(LOG_FORMAT_ENV).ok().as_deref(),
        )
    }

    fn parse(level: Option<&str>, format: Option<&str>) -> Self {
        let level = level
            .and_then(|l| l.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::OFF);
        let json = format.is_some_and(|f| f.trim().eq_ignore_ascii_case("json"));
        Self { level, json }
    }

    /// Installs a stderr subscriber. stdout carries only the result line.
    pub fn configure_logging(&self) {
        if self.level == LevelFilter::OFF {
            return;
        }

        let result = if self.json {
            let layer = tracing_subscriber::fmt::layer()
                .event_format(Format::default().json().flatten_event(true))
                .fmt_fields(JsonFields::new())
                .with_writer(io::stderr)
                .with_filter(self.level);
            tracing::subscriber::set_global_default(Registry::default().with(layer))
        } else {
            let layer = tracing_subscriber::fmt::layer()
                .event_format(Format::default().with_target(false).compact())
                .with_ansi(io::stderr().is_terminal())
                .with_writer(io::stderr)
                .with_filter(self.level);
            tracing::subscriber::set_global_default(Registry::default().with(layer))
        };

        if let Err(e) = result {
            eprintln!("[log] failed to install subscriber: {e}");
        }
    }
}
