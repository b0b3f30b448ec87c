//! In-memory capability implementations for tests and headless callers.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::dom::{Document, ElementMetrics};
use crate::error::{HostError, Result};
use crate::image::ImageLoader;

#[derive(Debug, Clone, Copy)]
struct Entry {
    metrics: ElementMetrics,
    visible_after: u64,
}

#[derive(Debug, Default)]
struct DocumentState {
    elements: HashMap<String, Vec<Entry>>,
    queries: u64,
}

/// A [`Document`] whose elements can be scheduled to appear after a number
/// of `query_selector` calls.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    state: Arc<Mutex<DocumentState>>,
}

impl MemoryDocument {
    pub fn insert(&self, selector: &str, metrics: ElementMetrics) {
        self.insert_after(selector, metrics, 0);
    }

    /// Makes the element visible from the `polls`-th query onwards.
    pub fn insert_after(&self, selector: &str, metrics: ElementMetrics, polls: u64) {
        self.lock()
            .elements
            .entry(selector.to_string())
            .or_default()
            .push(Entry {
                metrics,
                visible_after: polls,
            });
    }

    /// Number of `query_selector` calls so far.
    pub fn queries(&self) -> u64 {
        self.lock().queries
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DocumentState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Document for MemoryDocument {
    type Element = ElementMetrics;

    fn query_selector(&self, selector: &str) -> Option<ElementMetrics> {
        let mut state = self.lock();
        state.queries += 1;
        let queries = state.queries;
        state
            .elements
            .get(selector)?
            .iter()
            .find(|entry| entry.visible_after <= queries)
            .map(|entry| entry.metrics)
    }

    fn query_selector_all(&self, selector: &str) -> Vec<ElementMetrics> {
        let state = self.lock();
        state
            .elements
            .get(selector)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|entry| entry.visible_after <= state.queries)
                    .map(|entry| entry.metrics)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// An [`ImageLoader`] that knows a fixed set of sources.
#[derive(Debug, Clone, Default)]
pub struct MemoryImageLoader {
    images: Arc<Mutex<HashSet<String>>>,
}

impl MemoryImageLoader {
    pub fn with_images<I, S>(images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            images: Arc::new(Mutex::new(images.into_iter().map(Into::into).collect())),
        }
    }

    pub fn add(&self, src: &str) {
        self.images
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(src.to_string());
    }
}

#[async_trait]
impl ImageLoader for MemoryImageLoader {
    async fn load(&self, src: &str) -> Result<()> {
        let known = self
            .images
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(src);
        if known {
            Ok(())
        } else {
            Err(HostError::ImageLoad {
                src: src.to_string(),
                reason: "not found".to_string(),
            })
        }
    }
}
