//! Shared engine handle for multi-caller access
//!
//! A single [`ScientificCalculator`] behind a mutex. Each closure passed to
//! [`SharedCalculator::with`] runs under one lock, so read-modify-write
//! sequences on the memory register cannot interleave.

use crate::engine::{EngineSnapshot, ScientificCalculator};
use crate::error::Result;
use crate::operation::{Operation, Outcome};
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, thread-safe handle to one engine instance
#[derive(Debug, Clone, Default)]
pub struct SharedCalculator {
    inner: Arc<Mutex<ScientificCalculator>>,
}

impl SharedCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing engine, keeping its state
    pub fn from_calculator(calc: ScientificCalculator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(calc)),
        }
    }

    /// Run `f` with exclusive access to the engine
    pub fn with<R>(&self, f: impl FnOnce(&mut ScientificCalculator) -> R) -> R {
        let mut calc = self.inner.lock();
        f(&mut calc)
    }

    pub fn apply(&self, op: Operation, args: &[f64]) -> Result<Outcome> {
        self.with(|calc| calc.apply(op, args))
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        self.inner.lock().snapshot()
    }
}
