//! sci-calc - Stateful scientific calculator engine
//!
//! A catalog of numeric operations plus two pieces of session state: a
//! memory register and a last-result cache. Hosts (UI, REPL, scripts) call
//! one operation at a time.
//!
//! # Features
//!
//! - **In-band errors**: undefined inputs return NaN, overflow returns infinity; no operation fails
//! - **Last result**: every computational operation records its return value, sentinels included
//! - **Memory register**: store / add / subtract / clear / recall, isolated from computation
//! - **Named dispatch**: [`Operation`] resolves host-facing names for [`ScientificCalculator::apply`]
//!
//! # Example
//!
//! ```rust
//! use sci_calc::{Operation, Outcome, ScientificCalculator};
//!
//! let mut calc = ScientificCalculator::new();
//!
//! assert_eq!(calc.add(2.0, 3.0), 5.0);
//! assert!(calc.natural_log(0.0).is_nan());
//! assert!(calc.last_result().is_nan());
//!
//! calc.memory_store(5.0);
//! calc.memory_add(3.0);
//! calc.memory_subtract(2.0);
//! assert_eq!(calc.memory_recall(), 6.0);
//!
//! let op: Operation = "sqrt".parse().unwrap();
//! assert_eq!(calc.apply(op, &[16.0]).unwrap(), Outcome::Value(4.0));
//! ```
//!
//! # Edge cases
//!
//! | Operation | Input | Result |
//! |-----------|-------|--------|
//! | `divide`, `modulo` | `b == 0` | NaN |
//! | `square_root` | `x < 0` | NaN |
//! | `nth_root` | `n == 0`, or `x < 0` with non-integer `1/n` | NaN |
//! | `arcsine`, `arccosine` | `x` outside `[-1, 1]` | NaN |
//! | `natural_log`, `log10`, `log2` | `x <= 0` | NaN |
//! | `factorial` | `n < 0` / `n > 170` | NaN / +inf |
//! | `exponential`, `power` | overflow | +inf |

pub mod engine;
pub mod error;
pub mod functions;
pub mod operation;
pub mod shared;

// Re-exports for convenience
pub use engine::{EngineSnapshot, ScientificCalculator};
pub use error::{CalcError, Result};
pub use operation::{Category, Operation, Outcome};
pub use shared::SharedCalculator;

pub use functions::{is_sentinel, MAX_FACTORIAL_INPUT};
