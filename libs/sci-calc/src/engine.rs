//! ScientificCalculator - stateful calculator engine
//!
//! Holds the memory register and the last-result cache. Computational
//! operations write their return value (including NaN/infinity sentinels)
//! to the last result; memory operations and constant queries never do.

use crate::functions;
use serde::Serialize;
use tracing::{debug, trace};

/// Point-in-time view of the engine state
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngineSnapshot {
    /// Memory register value
    pub memory: f64,
    /// Value returned by the most recent computational operation
    pub last_result: f64,
}

/// Scientific calculator engine
///
/// # Example
/// ```rust
/// use sci_calc::ScientificCalculator;
///
/// let mut calc = ScientificCalculator::new();
/// assert_eq!(calc.add(2.0, 3.0), 5.0);
///
/// calc.memory_store(100.0);
/// assert_eq!(calc.last_result(), 5.0);
///
/// assert!(calc.divide(1.0, 0.0).is_nan());
/// assert!(calc.last_result().is_nan());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScientificCalculator {
    memory: f64,
    last_result: f64,
}

impl ScientificCalculator {
    /// Create an engine with memory and last result both at 0.0
    pub fn new() -> Self {
        Self::default()
    }

    /// Single recording path shared by success and sentinel results
    pub(crate) fn record(&mut self, op: &'static str, value: f64) -> f64 {
        self.last_result = value;
        trace!(op, value, "result");
        if functions::is_sentinel(value) {
            debug!(op, value, "sentinel result");
        }
        value
    }

    // === Arithmetic ===

    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        self.record("add", functions::add(a, b))
    }

    pub fn subtract(&mut self, a: f64, b: f64) -> f64 {
        self.record("subtract", functions::subtract(a, b))
    }

    pub fn multiply(&mut self, a: f64, b: f64) -> f64 {
        self.record("multiply", functions::multiply(a, b))
    }

    /// NaN (recorded as the last result) when `b == 0`
    pub fn divide(&mut self, a: f64, b: f64) -> f64 {
        self.record("divide", functions::divide(a, b))
    }

    /// `fmod` remainder; NaN (recorded) when `b == 0`
    pub fn modulo(&mut self, a: f64, b: f64) -> f64 {
        self.record("modulo", functions::modulo(a, b))
    }

    // === Power and roots ===

    pub fn power(&mut self, base: f64, exponent: f64) -> f64 {
        self.record("power", functions::power(base, exponent))
    }

    pub fn square_root(&mut self, x: f64) -> f64 {
        self.record("square_root", functions::square_root(x))
    }

    pub fn cube_root(&mut self, x: f64) -> f64 {
        self.record("cube_root", functions::cube_root(x))
    }

    /// See [`functions::nth_root`] for the negative-base behaviour
    pub fn nth_root(&mut self, x: f64, n: f64) -> f64 {
        self.record("nth_root", functions::nth_root(x, n))
    }

    // === Trigonometry (radians) ===

    pub fn sine(&mut self, x: f64) -> f64 {
        self.record("sine", functions::sine(x))
    }

    pub fn cosine(&mut self, x: f64) -> f64 {
        self.record("cosine", functions::cosine(x))
    }

    pub fn tangent(&mut self, x: f64) -> f64 {
        self.record("tangent", functions::tangent(x))
    }

    pub fn arcsine(&mut self, x: f64) -> f64 {
        self.record("arcsine", functions::arcsine(x))
    }

    pub fn arccosine(&mut self, x: f64) -> f64 {
        self.record("arccosine", functions::arccosine(x))
    }

    pub fn arctangent(&mut self, x: f64) -> f64 {
        self.record("arctangent", functions::arctangent(x))
    }

    // === Hyperbolic ===

    pub fn sinh(&mut self, x: f64) -> f64 {
        self.record("sinh", functions::sinh(x))
    }

    pub fn cosh(&mut self, x: f64) -> f64 {
        self.record("cosh", functions::cosh(x))
    }

    pub fn tanh(&mut self, x: f64) -> f64 {
        self.record("tanh", functions::tanh(x))
    }

    // === Logarithms and exponential ===

    pub fn natural_log(&mut self, x: f64) -> f64 {
        self.record("natural_log", functions::natural_log(x))
    }

    pub fn log10(&mut self, x: f64) -> f64 {
        self.record("log10", functions::log10(x))
    }

    pub fn log2(&mut self, x: f64) -> f64 {
        self.record("log2", functions::log2(x))
    }

    pub fn exponential(&mut self, x: f64) -> f64 {
        self.record("exponential", functions::exponential(x))
    }

    // === Special ===

    pub fn factorial(&mut self, n: i32) -> f64 {
        self.record("factorial", functions::factorial(n))
    }

    pub fn absolute(&mut self, x: f64) -> f64 {
        self.record("absolute", functions::absolute(x))
    }

    pub fn ceiling(&mut self, x: f64) -> f64 {
        self.record("ceiling", functions::ceiling(x))
    }

    pub fn floor(&mut self, x: f64) -> f64 {
        self.record("floor", functions::floor(x))
    }

    pub fn round(&mut self, x: f64) -> f64 {
        self.record("round", functions::round(x))
    }

    // === Conversion ===

    pub fn degrees_to_radians(&mut self, degrees: f64) -> f64 {
        self.record("degrees_to_radians", functions::degrees_to_radians(degrees))
    }

    pub fn radians_to_degrees(&mut self, radians: f64) -> f64 {
        self.record("radians_to_degrees", functions::radians_to_degrees(radians))
    }

    // === Memory register ===

    pub fn memory_store(&mut self, value: f64) {
        self.memory = value;
        trace!(memory = self.memory, "memory_store");
    }

    pub fn memory_add(&mut self, value: f64) {
        self.memory += value;
        trace!(memory = self.memory, "memory_add");
    }

    pub fn memory_subtract(&mut self, value: f64) {
        self.memory -= value;
        trace!(memory = self.memory, "memory_subtract");
    }

    pub fn memory_clear(&mut self) {
        self.memory = 0.0;
        trace!("memory_clear");
    }

    pub fn memory_recall(&self) -> f64 {
        self.memory
    }

    /// Whether the register holds a non-zero value
    pub fn memory_is_set(&self) -> bool {
        self.memory != 0.0
    }

    // === Queries ===

    pub fn last_result(&self) -> f64 {
        self.last_result
    }

    pub fn pi(&self) -> f64 {
        functions::pi()
    }

    pub fn e(&self) -> f64 {
        functions::e()
    }

    pub fn golden_ratio(&self) -> f64 {
        functions::golden_ratio()
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            memory: self.memory,
            last_result: self.last_result,
        }
    }
}
