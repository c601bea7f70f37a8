use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::queue::DEFAULT_QUEUE_URL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub queue: QueueConfig,
    pub syslog_ident: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueConfig {
    pub url: String,
    /// `None` leaves the HTTP client's default in place.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            queue: QueueConfig {
                url: DEFAULT_QUEUE_URL.to_string(),
                timeout: None,
            },
            syslog_ident: "queuetc".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let timeout = match lookup("QUEUETC_TIMEOUT_SECS") {
            Some(secs) => Some(Duration::from_secs(
                secs.trim().parse::<u64>().with_context(|| {
                    format!("QUEUETC_TIMEOUT_SECS is not a whole number: {:?}", secs)
                })?,
            )),
            None => None,
        };

        Ok(Self {
            queue: QueueConfig {
                url: lookup("QUEUETC_URL").unwrap_or(defaults.queue.url),
                timeout,
            },
            syslog_ident: lookup("QUEUETC_SYSLOG_IDENT").unwrap_or(defaults.syslog_ident),
        })
    }

    /// Apply command-line overrides.
    pub fn with_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.queue.url = url;
        }
        self
    }
}
