// queuetc - post-processing hook that hands finished recordings to the transcode queue

pub mod cli;
pub mod config;
pub mod notifier;
pub mod queue;
pub mod types;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use notifier::{run, Exit, Notifier, Outcome};
pub use queue::{HttpJobQueue, JobQueue, JobRequest, QueueResponse};
pub use types::{NotifyError, NotifyResult};
