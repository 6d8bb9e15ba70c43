//! Test doubles shared by the integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use image_bot::search::{CandidateImage, ImageSearch, SearchError, SearchQuery};
use image_bot::services::random::RandomSource;
use tracing_subscriber::fmt::MakeWriter;

/// Search provider returning a canned result and recording what it was asked.
pub struct FakeSearch {
    result: Result<Vec<CandidateImage>, String>,
    calls: AtomicUsize,
    last_query: Mutex<Option<SearchQuery>>,
}

impl FakeSearch {
    pub fn with_urls(urls: &[&str]) -> Self {
        Self::new(Ok(urls.iter().map(|u| CandidateImage::new(*u)).collect()))
    }

    pub fn failing(message: &str) -> Self {
        Self::new(Err(message.to_string()))
    }

    fn new(result: Result<Vec<CandidateImage>, String>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<SearchQuery> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ImageSearch for FakeSearch {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<CandidateImage>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.clone());
        match &self.result {
            Ok(images) => Ok(images.clone()),
            Err(message) => Err(SearchError::api(403, message.clone())),
        }
    }
}

/// Returns scripted values in order, then `min` once the script runs out.
/// Every request is recorded as its `(min, max)` range.
#[derive(Default)]
pub struct ScriptedRandom {
    values: Mutex<VecDeque<usize>>,
    calls: Mutex<Vec<(usize, usize)>>,
}

impl ScriptedRandom {
    pub fn new(values: &[usize]) -> Self {
        Self {
            values: Mutex::new(values.iter().copied().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls_in_range(&self, min: usize, max: usize) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|range| **range == (min, max))
            .count()
    }
}

impl RandomSource for ScriptedRandom {
    fn between(&self, min: usize, max: usize) -> usize {
        self.calls.lock().unwrap().push((min, max));
        self.values
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(min)
            .clamp(min, max)
    }
}

/// Captures formatted log output for assertions.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Installs a thread-local subscriber writing into the returned buffer until the guard drops.
pub fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}
