//! A scripted generation backend for front-end tests.

use agronomist::{ContentPart, GenerationDriver, GenerationError, GenerationErrorKind};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// What the fake returns for one call.
#[derive(Debug, Clone)]
pub enum FakeReply {
    Text(String),
    /// Upstream answered with this HTTP status
    HttpFault(u16),
}

/// Answers from a script and records every request.
#[derive(Debug, Default)]
pub struct FakeDriver {
    replies: Mutex<VecDeque<FakeReply>>,
    calls: Mutex<Vec<Vec<ContentPart>>>,
}

#[allow(dead_code)]
impl FakeDriver {
    pub fn new(replies: Vec<FakeReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            ..Default::default()
        }
    }

    pub fn texts(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| FakeReply::Text(t.to_string())).collect())
    }

    pub fn calls(&self) -> Vec<Vec<ContentPart>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationDriver for FakeDriver {
    async fn generate(&self, parts: &[ContentPart]) -> Result<String, GenerationError> {
        self.calls.lock().unwrap().push(parts.to_vec());
        match self.replies.lock().unwrap().pop_front() {
            Some(FakeReply::Text(text)) => Ok(text),
            Some(FakeReply::HttpFault(status_code)) => {
                Err(GenerationError::new(GenerationErrorKind::Http {
                    status_code,
                    message: "upstream unavailable".into(),
                }))
            }
            None => Ok(String::new()),
        }
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
