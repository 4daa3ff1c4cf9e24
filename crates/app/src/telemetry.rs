//! Tracing subscriber setup.
//!
//! - `GDPT_LOG` sets the filter (e.g. "debug" or "info,services=debug").
//! - `GDPT_LOG_FORMAT` selects "pretty" (default) or "json".

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "GDPT_LOG";
pub const LOG_FORMAT_ENV: &str = "GDPT_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Pretty,
        }
    }
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let format = std::env::var(LOG_FORMAT_ENV).ok();
    match LogFormat::from_env_value(format.as_deref()) {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}
