use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("webhook unreachable: {0}")]
    Transport(String),
    #[error("webhook answered with status {0}")]
    Status(u16),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Contact,
    Newsletter,
}

#[derive(Serialize)]
struct Envelope<'a, R> {
    #[serde(rename = "type")]
    kind: FormKind,
    #[serde(flatten)]
    record: &'a R,
}

/// Sends a JSON body somewhere and reports the HTTP status it got back.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<u16, SubmitError>;
}

pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<u16, SubmitError> {
        let response = Request::post(url)
            .json(body)
            .map_err(|e| SubmitError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        Ok(response.status())
    }
}

pub struct WebhookClient<T = GlooTransport> {
    url: String,
    transport: T,
}

impl WebhookClient<GlooTransport> {
    pub fn new() -> Self {
        Self::with_transport(config::get_webhook_url(), GlooTransport)
    }
}

impl Default for WebhookClient<GlooTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> WebhookClient<T> {
    pub fn with_transport(url: impl Into<String>, transport: T) -> Self {
        Self { url: url.into(), transport }
    }

    /// Posts `record` tagged with `kind`. Any non-2xx answer is a failure and
    /// the response body is ignored.
    pub async fn submit<R: Serialize>(&self, kind: FormKind, record: &R) -> Result<(), SubmitError> {
        let body = serde_json::to_value(Envelope { kind, record })?;
        let status = self.transport.post_json(&self.url, &body).await?;
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(SubmitError::Status(status))
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    /// Records every request and answers with a canned result.
    pub struct RecordingTransport {
        pub requests: RefCell<Vec<(String, Value)>>,
        answer: Result<u16, String>,
    }

    impl RecordingTransport {
        pub fn answering(status: u16) -> Self {
            Self { requests: RefCell::new(Vec::new()), answer: Ok(status) }
        }

        pub fn unreachable() -> Self {
            Self { requests: RefCell::new(Vec::new()), answer: Err("connection refused".to_string()) }
        }
    }

    impl WebhookClient<RecordingTransport> {
        /// Bodies posted so far.
        pub fn transport_requests(&self) -> Vec<Value> {
            self.transport.requests.borrow().iter().map(|(_, body)| body.clone()).collect()
        }
    }

    impl Transport for RecordingTransport {
        async fn post_json(&self, url: &str, body: &Value) -> Result<u16, SubmitError> {
            self.requests.borrow_mut().push((url.to_string(), body.clone()));
            self.answer.clone().map_err(SubmitError::Transport)
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::testing::RecordingTransport;
    use super::*;
    use crate::forms::models::{ContactFormData, NewsletterFormData};

    const URL: &str = "https://hooks.test/forms";

    #[test]
    fn contact_body_is_record_plus_type() {
        let client = WebhookClient::with_transport(URL, RecordingTransport::answering(200));
        let record = ContactFormData {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            message: "Need an aerial survey".to_string(),
        };

        block_on(client.submit(FormKind::Contact, &record)).unwrap();

        let requests = client.transport.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, URL);
        assert_eq!(
            requests[0].1,
            json!({
                "type": "contact",
                "name": "Ada",
                "email": "ada@example.com",
                "phone": "",
                "message": "Need an aerial survey",
            })
        );
    }

    #[test]
    fn newsletter_is_tagged() {
        let client = WebhookClient::with_transport(URL, RecordingTransport::answering(204));
        let record = NewsletterFormData { email: "a@b.com".to_string() };
        block_on(client.submit(FormKind::Newsletter, &record)).unwrap();
        let requests = client.transport.requests.borrow();
        assert_eq!(requests[0].1, json!({ "type": "newsletter", "email": "a@b.com" }));
    }

    #[test]
    fn non_success_status_fails() {
        for status in [301, 400, 404, 500, 503] {
            let client = WebhookClient::with_transport(URL, RecordingTransport::answering(status));
            let record = NewsletterFormData { email: "a@b.com".to_string() };
            let err = block_on(client.submit(FormKind::Newsletter, &record)).unwrap_err();
            assert!(matches!(err, SubmitError::Status(s) if s == status));
        }
    }

    #[test]
    fn default_client_targets_configured_webhook() {
        let client = WebhookClient::<GlooTransport>::default();
        assert_eq!(client.url, config::get_webhook_url());
    }

    #[test]
    fn transport_failure_fails() {
        let client = WebhookClient::with_transport(URL, RecordingTransport::unreachable());
        let record = NewsletterFormData { email: "a@b.com".to_string() };
        let err = block_on(client.submit(FormKind::Newsletter, &record)).unwrap_err();
        assert!(matches!(err, SubmitError::Transport(_)));
        assert_eq!(client.transport.requests.borrow().len(), 1);
    }
}
