// Transcode job queue: payload types and the HTTP client that submits them

pub mod client;
pub mod jobs;

pub use client::{HttpJobQueue, JobQueue, DEFAULT_QUEUE_URL};
pub use jobs::{JobRequest, QueueResponse};
