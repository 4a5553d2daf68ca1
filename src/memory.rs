//! Symbolic memory ledger for `malloc`/`free` commands.
//!
//! No real memory moves here: the simulator only records which pointer ids
//! are live and how many bytes each allocation claimed, so allocate/free
//! pairing mistakes (double-free, freeing an unknown id) become visible.
//! Ids are minted as `ptr<N>` where `N` counts every allocation ever made
//! and never decreases, so a freed id is never reissued.

use std::collections::HashMap;

use log::{debug, info};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MemoryError {
    #[error("Invalid allocation size {0}")]
    InvalidAllocationSize(i64),

    #[error("Unknown pointer '{0}'")]
    UnknownPointer(String),
}

/// Bookkeeping for one evaluator run's allocations.
#[derive(Debug, Default)]
pub struct MemorySimulator {
    ledger: HashMap<String, usize>,
    created: usize,
}

impl MemorySimulator {
    pub fn new() -> Self {
        info!("MemorySimulator created");

        Self {
            ledger: HashMap::new(),
            created: 0,
        }
    }

    /// Records an allocation of `size` bytes and returns the minted id.
    pub fn allocate(&mut self, size: i64) -> Result<String, MemoryError> {
        if size < 0 {
            return Err(MemoryError::InvalidAllocationSize(size));
        }

        let id: String = format!("ptr{}", self.created);
        self.created += 1;

        debug!("Allocating {} bytes as {}", size, id);

        self.ledger.insert(id.clone(), size as usize);

        Ok(id)
    }

    /// Removes the ledger entry for `id`.  Freeing an id that is not live
    /// (never allocated, or already freed) is an error.
    pub fn free(&mut self, id: &str) -> Result<(), MemoryError> {
        debug!("Freeing {}", id);

        self.ledger
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| MemoryError::UnknownPointer(id.to_string()))
    }

    /// Is `id` currently allocated?
    pub fn is_live(&self, id: &str) -> bool {
        self.ledger.contains_key(id)
    }

    /// Number of live allocations.
    pub fn live_count(&self) -> usize {
        self.ledger.len()
    }
}
