//! Scripted port doubles shared by the use case tests.

use crate::ports::document_catalog::{CatalogError, CatalogSession, DocumentCatalog};
use crate::ports::query_logger::{QueryEvent, QueryLogger};
use crate::ports::retrieval_engine::{RetrievalEngine, RetrievalError, RetrievalQuery};
use crate::ports::theme_synthesizer::{SynthesisError, ThemeSynthesizer};
use async_trait::async_trait;
use docquery_domain::{DocumentId, DocumentRef, Match, QueryText, Theme};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn ids(raw: &[i64]) -> Vec<DocumentId> {
    raw.iter().map(|id| DocumentId::try_new(*id).unwrap()).collect()
}

pub fn query(text: &str) -> QueryText {
    QueryText::try_new(text).unwrap()
}

pub fn matches(count: usize) -> Vec<Match> {
    (0..count)
        .map(|i| Match::new(json!({"rank": i + 1, "text": format!("passage {}", i + 1)})))
        .collect()
}

pub fn themes(labels: &[&str]) -> Vec<Theme> {
    labels
        .iter()
        .map(|label| Theme::new(json!({"label": label})))
        .collect()
}

// ==================== Catalog ====================

#[derive(Default)]
pub struct CatalogProbe {
    pub opened: AtomicUsize,
    pub released: AtomicUsize,
    pub lookups: Mutex<Vec<Vec<DocumentId>>>,
}

pub struct MockCatalog {
    documents: Vec<DocumentId>,
    fail_open: bool,
    fail_lookup: bool,
    pub probe: Arc<CatalogProbe>,
}

impl MockCatalog {
    pub fn with_documents(raw: &[i64]) -> Self {
        Self {
            documents: ids(raw),
            fail_open: false,
            fail_lookup: false,
            probe: Arc::new(CatalogProbe::default()),
        }
    }

    pub fn failing_open() -> Self {
        Self {
            fail_open: true,
            ..Self::with_documents(&[])
        }
    }

    pub fn failing_lookup() -> Self {
        Self {
            fail_lookup: true,
            ..Self::with_documents(&[])
        }
    }

    pub fn opened(&self) -> usize {
        self.probe.opened.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.probe.released.load(Ordering::SeqCst)
    }

    pub fn lookups(&self) -> Vec<Vec<DocumentId>> {
        self.probe.lookups.lock().unwrap().clone()
    }
}

struct MockSession {
    documents: Vec<DocumentId>,
    fail_lookup: bool,
    probe: Arc<CatalogProbe>,
}

impl Drop for MockSession {
    fn drop(&mut self) {
        self.probe.released.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl DocumentCatalog for MockCatalog {
    async fn open(&self) -> Result<Box<dyn CatalogSession>, CatalogError> {
        if self.fail_open {
            return Err(CatalogError::Unavailable("connection refused".to_string()));
        }
        self.probe.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockSession {
            documents: self.documents.clone(),
            fail_lookup: self.fail_lookup,
            probe: Arc::clone(&self.probe),
        }))
    }
}

#[async_trait]
impl CatalogSession for MockSession {
    async fn find_by_ids(&self, ids: &[DocumentId]) -> Result<Vec<DocumentRef>, CatalogError> {
        self.probe.lookups.lock().unwrap().push(ids.to_vec());
        if self.fail_lookup {
            return Err(CatalogError::Corrupt("bad row".to_string()));
        }
        Ok(ids
            .iter()
            .filter(|id| self.documents.contains(id))
            .map(|id| DocumentRef::new(*id))
            .collect())
    }
}

// ==================== Retrieval ====================

pub struct MockRetrieval {
    outcome: Result<Vec<Match>, String>,
    calls: Mutex<Vec<RetrievalQuery>>,
}

impl MockRetrieval {
    pub fn returning(matches: Vec<Match>) -> Self {
        Self {
            outcome: Ok(matches),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RetrievalQuery> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RetrievalEngine for MockRetrieval {
    async fn process_query(&self, query: &RetrievalQuery) -> Result<Vec<Match>, RetrievalError> {
        self.calls.lock().unwrap().push(query.clone());
        self.outcome
            .clone()
            .map_err(RetrievalError::RequestFailed)
    }
}

// ==================== Theme synthesis ====================

pub struct MockSynthesizer {
    outcome: Result<Vec<Theme>, String>,
    calls: Mutex<Vec<(usize, u32)>>,
}

impl MockSynthesizer {
    pub fn returning(themes: Vec<Theme>) -> Self {
        Self {
            outcome: Ok(themes),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `(match_count, theme_count)` per invocation
    pub fn calls(&self) -> Vec<(usize, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ThemeSynthesizer for MockSynthesizer {
    async fn identify_themes(
        &self,
        matches: &[Match],
        theme_count: u32,
    ) -> Result<Vec<Theme>, SynthesisError> {
        self.calls.lock().unwrap().push((matches.len(), theme_count));
        self.outcome.clone().map_err(SynthesisError::Other)
    }
}

// ==================== Logger ====================

#[derive(Default)]
pub struct RecordingLogger {
    events: Mutex<Vec<(&'static str, serde_json::Value)>>,
}

impl RecordingLogger {
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(|(t, _)| *t).collect()
    }

    pub fn payload(&self, event_type: &str) -> Option<serde_json::Value> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .find(|(t, _)| *t == event_type)
            .map(|(_, p)| p.clone())
    }
}

impl QueryLogger for RecordingLogger {
    fn log(&self, event: QueryEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type, event.payload));
    }
}
