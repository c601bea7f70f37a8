// Job payload sent to the transcode queue and the queue's reply

use serde::{Deserialize, Serialize};

use crate::types::{NotifyError, NotifyResult};

/// One finished recording, as submitted to `POST /job`.
///
/// Field order matches the wire format: `path`, `fname`, `channel`, `title`,
/// `status`, then `description` when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobRequest {
    path: String,
    fname: String,
    channel: String,
    title: String,
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl JobRequest {
    /// Build a job for the recording at `path`. `fname` is derived from it.
    pub fn new(
        path: impl Into<String>,
        channel: impl Into<String>,
        title: impl Into<String>,
        status: impl Into<String>,
        description: Option<String>,
    ) -> NotifyResult<Self> {
        let path = path.into();
        if path.is_empty() {
            return Err(NotifyError::EmptyPath);
        }

        Ok(Self {
            fname: basename(&path).to_string(),
            path,
            channel: channel.into(),
            title: title.into(),
            status: status.into(),
            description,
        })
    }

    /// Build a job from the hook's positional arguments:
    /// `path channel title status [description]`.
    pub fn from_args(args: &[String]) -> NotifyResult<Self> {
        match args {
            [path, channel, title, status] => {
                Self::new(path.as_str(), channel.as_str(), title.as_str(), status.as_str(), None)
            }
            [path, channel, title, status, description] => Self::new(
                path.as_str(),
                channel.as_str(),
                title.as_str(),
                status.as_str(),
                Some(description.clone()),
            ),
            _ => Err(NotifyError::ArgumentCount { got: args.len() }),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn fname(&self) -> &str {
        &self.fname
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn to_json(&self) -> NotifyResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Last `/`-separated segment of `path`. A trailing slash yields `""`.
fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Body returned by the job queue. Only `status` decides success; other
/// fields are tolerated and ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct QueueResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl QueueResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fname_is_last_path_segment() {
        let job = JobRequest::new("/rec/show.ts", "c", "t", "s", None).unwrap();
        assert_eq!(job.fname(), "show.ts");

        let job = JobRequest::new("show.ts", "c", "t", "s", None).unwrap();
        assert_eq!(job.fname(), "show.ts");

        let job = JobRequest::new("/srv/tv/2024/01/news.mkv", "c", "t", "s", None).unwrap();
        assert_eq!(job.fname(), "news.mkv");

        let job = JobRequest::new("/rec/", "c", "t", "s", None).unwrap();
        assert_eq!(job.fname(), "");
    }

    #[test]
    fn test_empty_path_rejected() {
        assert!(matches!(
            JobRequest::new("", "c", "t", "s", None),
            Err(NotifyError::EmptyPath)
        ));
    }

    #[test]
    fn test_four_argument_form() {
        let job = JobRequest::from_args(&args(&["/tv/rec1.ts", "BBC1", "News at Ten", "completed"]))
            .unwrap();

        assert_eq!(job.path(), "/tv/rec1.ts");
        assert_eq!(job.channel(), "BBC1");
        assert_eq!(job.title(), "News at Ten");
        assert_eq!(job.status(), "completed");
        assert_eq!(job.description(), None);
        assert_eq!(
            job.to_json().unwrap(),
            r#"{"path":"/tv/rec1.ts","fname":"rec1.ts","channel":"BBC1","title":"News at Ten","status":"completed"}"#
        );
    }

    #[test]
    fn test_five_argument_form() {
        let job = JobRequest::from_args(&args(&[
            "/tv/rec2.ts",
            "BBC2",
            "Nature",
            "completed",
            "A documentary",
        ]))
        .unwrap();

        assert_eq!(job.description(), Some("A documentary"));
        assert_eq!(
            job.to_json().unwrap(),
            r#"{"path":"/tv/rec2.ts","fname":"rec2.ts","channel":"BBC2","title":"Nature","status":"completed","description":"A documentary"}"#
        );
    }

    #[test]
    fn test_wrong_argument_count() {
        for count in [0, 1, 3, 6, 9] {
            let values: Vec<String> = (0..count).map(|i| format!("arg{}", i)).collect();
            match JobRequest::from_args(&values) {
                Err(NotifyError::ArgumentCount { got }) => assert_eq!(got, count),
                other => panic!("expected ArgumentCount for {} args, got {:?}", count, other),
            }
        }
    }

    #[test]
    fn test_queue_response_tolerates_extra_fields() {
        let response: QueueResponse =
            serde_json::from_str(r#"{"status":"ok","queued":3,"id":17}"#).unwrap();
        assert!(response.is_ok());
        assert!(response.message.is_none());

        let response: QueueResponse =
            serde_json::from_str(r#"{"status":"error","message":"database locked"}"#).unwrap();
        assert!(!response.is_ok());
        assert_eq!(response.message.as_deref(), Some("database locked"));
    }
}
