//! Common test utilities shared across integration tests.
//!
//! Clippy cannot track usage across integration test files, hence the
//! `allow(dead_code)` annotation.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use sentra_client::{Analyze, Error, Result, SentimentResult};
use tokio::sync::Notify;

#[derive(Debug, Clone)]
pub enum Scripted {
    Success(SentimentResult),
    Failure,
}

/// In-memory `Analyze` that records calls and replays scripted outcomes.
///
/// Clones share counters, so a test can keep one clone while the view owns
/// another. When gated, each request stays in flight until `release` is called.
#[derive(Clone, Default)]
pub struct FakeAnalyzer {
    calls: Arc<AtomicUsize>,
    texts: Arc<Mutex<Vec<String>>>,
    script: Arc<Mutex<VecDeque<Scripted>>>,
    gate: Option<Arc<Notify>>,
}

impl FakeAnalyzer {
    pub fn scripted(outcomes: Vec<Scripted>) -> Self {
        Self {
            script: Arc::new(Mutex::new(outcomes.into())),
            ..Self::default()
        }
    }

    pub fn succeeding(result: SentimentResult) -> Self {
        Self::scripted(vec![Scripted::Success(result)])
    }

    pub fn failing() -> Self {
        Self::scripted(vec![Scripted::Failure])
    }

    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

impl Analyze for FakeAnalyzer {
    fn analyze(&self, text: &str) -> impl Future<Output = Result<SentimentResult>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.texts.lock().unwrap().push(text.to_string());
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Scripted::Failure);
        let gate = self.gate.clone();

        async move {
            if let Some(gate) = gate {
                gate.notified().await;
            }
            match next {
                Scripted::Success(result) => Ok(result),
                Scripted::Failure => Err(Error::Status {
                    status: 503,
                    body: "unavailable".to_string(),
                }),
            }
        }
    }
}
