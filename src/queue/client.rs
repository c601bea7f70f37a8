use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

use crate::queue::jobs::{JobRequest, QueueResponse};
use crate::types::{NotifyError, NotifyResult};

/// Default job endpoint of the local transcode queue.
pub const DEFAULT_QUEUE_URL: &str = "http://127.0.0.1:8998/job";

#[async_trait]
pub trait JobQueue: Send + Sync {
    /// Submit one job. `Ok` only when the queue accepted it.
    async fn submit(&self, job: &JobRequest) -> NotifyResult<QueueResponse>;
}

/// Job queue reached over HTTP with a single POST per job.
pub struct HttpJobQueue {
    client: Client,
    url: String,
}

impl HttpJobQueue {
    /// Create a queue client for `url`. Without a timeout the request waits
    /// as long as the HTTP client allows.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> NotifyResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl JobQueue for HttpJobQueue {
    async fn submit(&self, job: &JobRequest) -> NotifyResult<QueueResponse> {
        debug!("POST {} for {}", self.url, job.path());

        let body = job.to_json()?;
        let response = self
            .client
            .post(&self.url)
            .header("Content-type", "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("Job queue answered {}: {}", status, body);

        if status != StatusCode::OK {
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let reply: QueueResponse = serde_json::from_str(&body)
            .map_err(|source| NotifyError::MalformedResponse {
                body: body.clone(),
                source,
            })?;

        if !reply.is_ok() {
            if let Some(message) = &reply.message {
                debug!("Job queue message: {}", message);
            }
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(reply)
    }
}
