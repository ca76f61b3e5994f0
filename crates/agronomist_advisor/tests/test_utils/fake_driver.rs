//! A scripted stand-in for the generation gateway.

use agronomist_core::ContentPart;
use agronomist_error::{GenerationError, GenerationErrorKind};
use agronomist_interface::GenerationDriver;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;

/// What the fake returns for one call.
#[derive(Debug, Clone)]
pub enum FakeReply {
    /// Successful generation with this text
    Text(String),
    /// Network fault
    NetworkFault,
}

/// Records every submitted request and answers from a script.
///
/// When the script runs out, calls return an empty string.
#[derive(Debug, Default)]
pub struct FakeDriver {
    replies: Mutex<VecDeque<FakeReply>>,
    calls: Mutex<Vec<Vec<ContentPart>>>,
    /// Directory to snapshot on each call, to observe staged uploads
    watch_dir: Option<PathBuf>,
    snapshots: Mutex<Vec<Vec<String>>>,
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

    pub fn watching(mut self, dir: impl Into<PathBuf>) -> Self {
        self.watch_dir = Some(dir.into());
        self
    }

    pub fn calls(&self) -> Vec<Vec<ContentPart>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn snapshots(&self) -> Vec<Vec<String>> {
        self.snapshots.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationDriver for FakeDriver {
    async fn generate(&self, parts: &[ContentPart]) -> Result<String, GenerationError> {
        self.calls.lock().unwrap().push(parts.to_vec());

        if let Some(dir) = &self.watch_dir {
            let mut names: Vec<String> = std::fs::read_dir(dir)
                .unwrap()
                .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
                .collect();
            names.sort();
            self.snapshots.lock().unwrap().push(names);
        }

        match self.replies.lock().unwrap().pop_front() {
            Some(FakeReply::Text(text)) => Ok(text),
            Some(FakeReply::NetworkFault) => Err(GenerationError::new(
                GenerationErrorKind::Network("connection reset by peer".into()),
            )),
            None => Ok(String::new()),
        }
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
