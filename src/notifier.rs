//! Post-processing hook flow.
//!
//! One invocation validates the positional arguments, submits a single job
//! and reports a failed submission to the system log. Submission failures
//! never change the exit code; only a bad command line exits non-zero.

use std::process::ExitCode;
use tracing::{debug, info};

use crate::cli::{usage, Cli};
use crate::config::Config;
use crate::queue::{HttpJobQueue, JobQueue, JobRequest};
use crate::types::NotifyError;
use crate::utils::SystemLog;

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Queued,
    /// Carries the message that was written to the system log.
    Failed(String),
}

pub struct Notifier {
    queue: Box<dyn JobQueue>,
    log: Box<dyn SystemLog>,
}

impl Notifier {
    pub fn new(queue: Box<dyn JobQueue>, log: Box<dyn SystemLog>) -> Self {
        Self { queue, log }
    }

    /// Submit `job` once. Failures are logged and swallowed.
    pub async fn notify(&self, job: &JobRequest) -> Outcome {
        match self.queue.submit(job).await {
            Ok(_) => {
                info!("Queued transcode job for '{}' ({})", job.title(), job.fname());
                Outcome::Queued
            }
            Err(e) => Outcome::Failed(self.report(&e)),
        }
    }

    fn report(&self, error: &NotifyError) -> String {
        let message = failure_message(error);
        self.log.write(&message);
        message
    }
}

pub fn failure_message(error: &NotifyError) -> String {
    format!("Error queueing job: {}", error.log_detail())
}

/// How the process should exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Covers both a queued job and a logged failure.
    Completed,
    MissingArguments,
}

impl Exit {
    pub fn code(self) -> u8 {
        match self {
            Exit::Completed => 0,
            Exit::MissingArguments => 1,
        }
    }
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit.code())
    }
}

/// Run one hook invocation. `config` already carries command-line overrides.
pub async fn run(cli: &Cli, config: &Config, log: Box<dyn SystemLog>) -> Exit {
    let job = match JobRequest::from_args(&cli.args) {
        Ok(job) => job,
        Err(e) => {
            debug!("Rejecting command line: {}", e);
            println!("{}", usage());
            return Exit::MissingArguments;
        }
    };

    let queue = match HttpJobQueue::new(config.queue.url.as_str(), config.queue.timeout) {
        Ok(queue) => queue,
        Err(e) => {
            log.write(&failure_message(&e));
            return Exit::Completed;
        }
    };

    debug!("Submitting {:?} to {}", job, queue.url());
    match Notifier::new(Box::new(queue), log).notify(&job).await {
        Outcome::Queued => debug!("Job for {} accepted", job.path()),
        Outcome::Failed(message) => debug!("Job for {} not queued: {}", job.path(), message),
    }
    Exit::Completed
}
