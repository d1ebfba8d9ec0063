//! Scripted `TextGenerationBackend` for tests. Never touches the network.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{BackendError, TextGenerationBackend};

enum Reply {
    /// Replies with `"echo: " + prompt`.
    Echo,
    Text(String),
    AuthFailure,
}

pub struct ScriptedBackend {
    reply: Reply,
    /// Per-call delays, cycled by call index.
    delays: Vec<Duration>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    fn new(reply: Reply) -> Self {
        Self {
            reply,
            delays: Vec::new(),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn echo() -> Self {
        Self::new(Reply::Echo)
    }

    pub fn replying(text: &str) -> Self {
        Self::new(Reply::Text(text.to_string()))
    }

    /// Behaves like a provider rejecting the API key.
    pub fn failing_auth() -> Self {
        Self::new(Reply::AuthFailure)
    }

    pub fn with_delays(mut self, delays: Vec<Duration>) -> Self {
        self.delays = delays;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerationBackend for ScriptedBackend {
    async fn generate(&self, prompt: &str) -> Result<String, BackendError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        if !self.delays.is_empty() {
            tokio::time::sleep(self.delays[n % self.delays.len()]).await;
        }

        match &self.reply {
            Reply::Echo => Ok(format!("echo: {prompt}")),
            Reply::Text(text) => Ok(text.clone()),
            Reply::AuthFailure => Err(BackendError::Auth {
                status: 401,
                message: "Incorrect API key provided".to_string(),
            }),
        }
    }
}
