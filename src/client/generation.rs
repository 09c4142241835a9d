//! "Last request wins" bookkeeping for interactive callers.
//!
//! The fetch chain itself is never cancelled mid-flight. A caller that starts a new
//! request before the previous one finished takes a fresh ticket, and the older
//! outcome is discarded when its ticket is no longer current.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    current: Arc<AtomicU64>,
}

/// Issued by [`RequestGeneration::begin`]; compare before applying a result.
#[derive(Debug, Clone)]
pub struct GenerationTicket {
    id: u64,
    current: Arc<AtomicU64>,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every ticket issued before.
    pub fn begin(&self) -> GenerationTicket {
        let id = self.current.fetch_add(1, Ordering::AcqRel) + 1;
        GenerationTicket {
            id,
            current: Arc::clone(&self.current),
        }
    }

    /// Supersede outstanding tickets without starting a request (e.g. the input was cleared).
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::AcqRel);
    }

    pub fn current(&self) -> u64 {
        self.current.load(Ordering::Acquire)
    }
}

impl GenerationTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::Acquire) == self.id
    }

    /// Returns `value` only if no newer request has started since this ticket was issued.
    pub fn commit<T>(&self, value: T) -> Option<T> {
        self.is_current().then_some(value)
    }
}
