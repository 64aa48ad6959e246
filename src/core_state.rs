//! Transport-agnostic application state.
//!
//! `CoreState` is the single shared state behind the HTTP layer. The only
//! mutable slot is the model: empty until startup finishes loading the
//! artifacts, then written once and read concurrently by every request.

use std::sync::{RwLock, RwLockReadGuard};

use crate::model::SymptomModel;

/// Process-wide shared state, wrapped in `Arc` at startup.
///
/// Uses `RwLock` so any number of requests can read the loaded model
/// concurrently; the single write happens during initialization, before
/// the listener accepts traffic.
pub struct CoreState {
    /// Loaded model bundle. `None` until artifact loading completes.
    model: RwLock<Option<SymptomModel>>,
}

impl CoreState {
    /// Create a new CoreState with no model loaded.
    pub fn new() -> Self {
        Self {
            model: RwLock::new(None),
        }
    }

    /// Install the loaded model bundle. Called once at startup.
    pub fn install_model(&self, model: SymptomModel) -> Result<(), CoreError> {
        let mut guard = self.model.write().map_err(|_| CoreError::LockPoisoned)?;
        *guard = Some(model);
        Ok(())
    }

    /// Acquire a read lock on the model slot.
    ///
    /// Request handlers use this to borrow the model without cloning.
    /// The slot may still be `None` — callers decide how to surface that.
    pub fn read_model(
        &self,
    ) -> Result<RwLockReadGuard<'_, Option<SymptomModel>>, CoreError> {
        self.model.read().map_err(|_| CoreError::LockPoisoned)
    }

    /// Whether the model artifacts have been loaded.
    pub fn is_model_loaded(&self) -> bool {
        self.model.read().map(|m| m.is_some()).unwrap_or(false)
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors from core state access.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("model state lock poisoned")]
    LockPoisoned,
}
