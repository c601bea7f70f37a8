// Logger initialization and the system log sink for failure reports

use std::io::{self, Write};
use std::sync::Mutex;
use syslog::{Facility, Formatter3164, Logger, LoggerBackend};
use tracing::{error, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the tracing subscriber.
///
/// The hook runs inside the recorder's pipeline, so without `debug` nothing is
/// written to stderr unless `RUST_LOG` asks for it.
pub fn init_logger(debug: bool) {
    let default_filter = if debug { "queuetc=debug" } else { "off" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Destination for the one-line failure report of an invocation.
pub trait SystemLog: Send + Sync {
    fn write(&self, message: &str);
}

/// Local syslog over the unix socket, facility `user`, severity `err`.
pub struct Syslog {
    logger: Mutex<Logger<LoggerBackend, Formatter3164>>,
}

impl Syslog {
    pub fn connect(ident: &str) -> anyhow::Result<Self> {
        let mut formatter = Formatter3164::default();
        formatter.facility = Facility::LOG_USER;
        formatter.process = ident.to_string();

        let logger = syslog::unix(formatter)
            .map_err(|e| anyhow::anyhow!("Failed to connect to syslog: {}", e))?;

        Ok(Self {
            logger: Mutex::new(logger),
        })
    }
}

impl SystemLog for Syslog {
    fn write(&self, message: &str) {
        let mut logger = match self.logger.lock() {
            Ok(logger) => logger,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = logger.err(message) {
            warn!("Syslog write failed ({}): {}", e, message);
        }
    }
}

/// Reports failures as tracing events on stderr. Used in debug mode.
pub struct StderrLog;

impl SystemLog for StderrLog {
    fn write(&self, message: &str) {
        error!("{}", message);
    }
}

/// Writes each message as one line to `W`, independent of the tracing filter.
pub struct WriterLog<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterLog<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl<W: Write + Send> SystemLog for WriterLog<W> {
    fn write(&self, message: &str) {
        let mut writer = match self.writer.lock() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(writer, "{}", message).and_then(|_| writer.flush()) {
            warn!("Failure report could not be written ({}): {}", e, message);
        }
    }
}

/// Pick the sink for this run. When the syslog socket is unavailable the
/// report goes straight to stderr so it is not lost.
pub fn system_log(debug: bool, ident: &str) -> Box<dyn SystemLog> {
    select_log(debug, || Syslog::connect(ident), io::stderr())
}

fn select_log<W>(
    debug: bool,
    connect: impl FnOnce() -> anyhow::Result<Syslog>,
    fallback: W,
) -> Box<dyn SystemLog>
where
    W: Write + Send + 'static,
{
    if debug {
        return Box::new(StderrLog);
    }

    match connect() {
        Ok(syslog) => Box::new(syslog),
        Err(e) => {
            warn!("{}; reporting to stderr instead", e);
            Box::new(WriterLog::new(fallback))
        }
    }
}

/// Keeps every message in memory.
#[cfg(test)]
#[derive(Default, Clone)]
pub struct MemoryLog {
    messages: std::sync::Arc<Mutex<Vec<String>>>,
}

#[cfg(test)]
impl MemoryLog {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl SystemLog for MemoryLog {
    fn write(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
