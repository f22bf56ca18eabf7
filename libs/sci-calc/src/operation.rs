//! Named-operation catalog
//!
//! Lets a host (REPL, script runner, UI) call engine operations by name with
//! a slice of numeric arguments instead of binding every method by hand.
//!
//! Names resolve from the canonical snake_case form, the camelCase names used
//! by web host bindings (`squareRoot`, `log10_calc`, `getPi`, ...) and short
//! calculator-key aliases (`sqrt`, `ln`, `m+`, ...).

use crate::engine::ScientificCalculator;
use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operation grouping used for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Arithmetic,
    Power,
    Trigonometric,
    Hyperbolic,
    Logarithmic,
    Special,
    Conversion,
    Memory,
    Constant,
    Introspection,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Arithmetic,
        Category::Power,
        Category::Trigonometric,
        Category::Hyperbolic,
        Category::Logarithmic,
        Category::Special,
        Category::Conversion,
        Category::Memory,
        Category::Constant,
        Category::Introspection,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Arithmetic => "arithmetic",
            Category::Power => "power",
            Category::Trigonometric => "trigonometric",
            Category::Hyperbolic => "hyperbolic",
            Category::Logarithmic => "logarithmic",
            Category::Special => "special",
            Category::Conversion => "conversion",
            Category::Memory => "memory",
            Category::Constant => "constant",
            Category::Introspection => "introspection",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CalcError::invalid_argument(format!("unknown category '{}'", s)))
    }
}

/// Every operation the engine exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
    SquareRoot,
    CubeRoot,
    NthRoot,
    Sine,
    Cosine,
    Tangent,
    Arcsine,
    Arccosine,
    Arctangent,
    Sinh,
    Cosh,
    Tanh,
    NaturalLog,
    Log10,
    Log2,
    Exponential,
    Factorial,
    Absolute,
    Ceiling,
    Floor,
    Round,
    DegreesToRadians,
    RadiansToDegrees,
    MemoryStore,
    MemoryRecall,
    MemoryAdd,
    MemorySubtract,
    MemoryClear,
    LastResult,
    Pi,
    E,
    GoldenRatio,
}

impl Operation {
    /// Catalog order
    pub const ALL: [Operation; 38] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Modulo,
        Operation::Power,
        Operation::SquareRoot,
        Operation::CubeRoot,
        Operation::NthRoot,
        Operation::Sine,
        Operation::Cosine,
        Operation::Tangent,
        Operation::Arcsine,
        Operation::Arccosine,
        Operation::Arctangent,
        Operation::Sinh,
        Operation::Cosh,
        Operation::Tanh,
        Operation::NaturalLog,
        Operation::Log10,
        Operation::Log2,
        Operation::Exponential,
        Operation::Factorial,
        Operation::Absolute,
        Operation::Ceiling,
        Operation::Floor,
        Operation::Round,
        Operation::DegreesToRadians,
        Operation::RadiansToDegrees,
        Operation::MemoryStore,
        Operation::MemoryRecall,
        Operation::MemoryAdd,
        Operation::MemorySubtract,
        Operation::MemoryClear,
        Operation::LastResult,
        Operation::Pi,
        Operation::E,
        Operation::GoldenRatio,
    ];

    /// Canonical snake_case name (also the serde representation)
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Modulo => "modulo",
            Operation::Power => "power",
            Operation::SquareRoot => "square_root",
            Operation::CubeRoot => "cube_root",
            Operation::NthRoot => "nth_root",
            Operation::Sine => "sine",
            Operation::Cosine => "cosine",
            Operation::Tangent => "tangent",
            Operation::Arcsine => "arcsine",
            Operation::Arccosine => "arccosine",
            Operation::Arctangent => "arctangent",
            Operation::Sinh => "sinh",
            Operation::Cosh => "cosh",
            Operation::Tanh => "tanh",
            Operation::NaturalLog => "natural_log",
            Operation::Log10 => "log10",
            Operation::Log2 => "log2",
            Operation::Exponential => "exponential",
            Operation::Factorial => "factorial",
            Operation::Absolute => "absolute",
            Operation::Ceiling => "ceiling",
            Operation::Floor => "floor",
            Operation::Round => "round",
            Operation::DegreesToRadians => "degrees_to_radians",
            Operation::RadiansToDegrees => "radians_to_degrees",
            Operation::MemoryStore => "memory_store",
            Operation::MemoryRecall => "memory_recall",
            Operation::MemoryAdd => "memory_add",
            Operation::MemorySubtract => "memory_subtract",
            Operation::MemoryClear => "memory_clear",
            Operation::LastResult => "last_result",
            Operation::Pi => "pi",
            Operation::E => "e",
            Operation::GoldenRatio => "golden_ratio",
        }
    }

    /// Alternative names accepted by [`FromStr`]
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Operation::Add => &["+", "plus"],
            Operation::Subtract => &["-", "minus", "sub"],
            Operation::Multiply => &["*", "times", "mul"],
            Operation::Divide => &["/", "div"],
            Operation::Modulo => &["%", "mod", "fmod"],
            Operation::Power => &["^", "pow"],
            Operation::SquareRoot => &["squareRoot", "sqrt"],
            Operation::CubeRoot => &["cubeRoot", "cbrt"],
            Operation::NthRoot => &["nthRoot", "root"],
            Operation::Sine => &["sin"],
            Operation::Cosine => &["cos"],
            Operation::Tangent => &["tan"],
            Operation::Arcsine => &["asin"],
            Operation::Arccosine => &["acos"],
            Operation::Arctangent => &["atan"],
            Operation::Sinh => &["sinh_calc"],
            Operation::Cosh => &["cosh_calc"],
            Operation::Tanh => &["tanh_calc"],
            Operation::NaturalLog => &["naturalLog", "ln"],
            Operation::Log10 => &["log10_calc", "log"],
            Operation::Log2 => &["log2_calc"],
            Operation::Exponential => &["exp"],
            Operation::Factorial => &["fact", "!"],
            Operation::Absolute => &["abs"],
            Operation::Ceiling => &["ceil"],
            Operation::Floor => &["floor_calc"],
            Operation::Round => &["round_calc"],
            Operation::DegreesToRadians => &["degreesToRadians", "deg2rad", "rad"],
            Operation::RadiansToDegrees => &["radiansToDegrees", "rad2deg", "deg"],
            Operation::MemoryStore => &["memoryStore", "ms"],
            Operation::MemoryRecall => &["memoryRecall", "mr"],
            Operation::MemoryAdd => &["memoryAdd", "m+"],
            Operation::MemorySubtract => &["memorySubtract", "m-"],
            Operation::MemoryClear => &["memoryClear", "mc"],
            Operation::LastResult => &["getLastResult", "ans"],
            Operation::Pi => &["getPi"],
            Operation::E => &["getE"],
            Operation::GoldenRatio => &["getGoldenRatio", "phi"],
        }
    }

    /// Number of numeric arguments
    pub fn arity(self) -> usize {
        match self {
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Modulo
            | Operation::Power
            | Operation::NthRoot => 2,
            Operation::MemoryRecall
            | Operation::MemoryClear
            | Operation::LastResult
            | Operation::Pi
            | Operation::E
            | Operation::GoldenRatio => 0,
            _ => 1,
        }
    }

    pub fn category(self) -> Category {
        match self {
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Modulo => Category::Arithmetic,
            Operation::Power | Operation::SquareRoot | Operation::CubeRoot | Operation::NthRoot => {
                Category::Power
            }
            Operation::Sine
            | Operation::Cosine
            | Operation::Tangent
            | Operation::Arcsine
            | Operation::Arccosine
            | Operation::Arctangent => Category::Trigonometric,
            Operation::Sinh | Operation::Cosh | Operation::Tanh => Category::Hyperbolic,
            Operation::NaturalLog | Operation::Log10 | Operation::Log2 | Operation::Exponential => {
                Category::Logarithmic
            }
            Operation::Factorial
            | Operation::Absolute
            | Operation::Ceiling
            | Operation::Floor
            | Operation::Round => Category::Special,
            Operation::DegreesToRadians | Operation::RadiansToDegrees => Category::Conversion,
            Operation::MemoryStore
            | Operation::MemoryRecall
            | Operation::MemoryAdd
            | Operation::MemorySubtract
            | Operation::MemoryClear => Category::Memory,
            Operation::Pi | Operation::E | Operation::GoldenRatio => Category::Constant,
            Operation::LastResult => Category::Introspection,
        }
    }

    /// Whether invoking this operation overwrites the last result
    pub fn records_result(self) -> bool {
        !matches!(
            self.category(),
            Category::Memory | Category::Constant | Category::Introspection
        )
    }

    /// Operations that take an angle in radians
    pub fn takes_angle(self) -> bool {
        matches!(
            self,
            Operation::Sine | Operation::Cosine | Operation::Tangent
        )
    }

    /// Operations that return an angle in radians
    pub fn returns_angle(self) -> bool {
        matches!(
            self,
            Operation::Arcsine | Operation::Arccosine | Operation::Arctangent
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| {
                op.name().eq_ignore_ascii_case(s)
                    || op.aliases().iter().any(|a| a.eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| CalcError::unknown_operation(s))
    }
}

/// Result of invoking an operation by name
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Value-returning operation
    Value(f64),
    /// Memory setter, nothing returned
    Unit,
}

impl Outcome {
    pub fn value(self) -> Option<f64> {
        match self {
            Outcome::Value(v) => Some(v),
            Outcome::Unit => None,
        }
    }
}

/// Floor a factorial argument to `i32`
///
/// `None` stands for an argument with no factorial (NaN or below `i32::MIN`).
/// Values above `i32::MAX` saturate, which still overflows to infinity.
fn factorial_arg(x: f64) -> Option<i32> {
    let n = x.floor();
    if n.is_nan() || n < f64::from(i32::MIN) {
        None
    } else if n > f64::from(i32::MAX) {
        Some(i32::MAX)
    } else {
        Some(n as i32)
    }
}

impl ScientificCalculator {
    /// Invoke an operation by name
    ///
    /// Fails only on a wrong argument count; state is untouched in that case.
    /// Numeric domain problems come back as `Outcome::Value(NaN)` or
    /// infinity. The factorial argument is floored first.
    pub fn apply(&mut self, op: Operation, args: &[f64]) -> Result<Outcome> {
        if args.len() != op.arity() {
            return Err(CalcError::arity(op.name(), op.arity(), args.len()));
        }
        let a = args.first().copied().unwrap_or_default();
        let b = args.get(1).copied().unwrap_or_default();

        let value = match op {
            Operation::Add => self.add(a, b),
            Operation::Subtract => self.subtract(a, b),
            Operation::Multiply => self.multiply(a, b),
            Operation::Divide => self.divide(a, b),
            Operation::Modulo => self.modulo(a, b),
            Operation::Power => self.power(a, b),
            Operation::SquareRoot => self.square_root(a),
            Operation::CubeRoot => self.cube_root(a),
            Operation::NthRoot => self.nth_root(a, b),
            Operation::Sine => self.sine(a),
            Operation::Cosine => self.cosine(a),
            Operation::Tangent => self.tangent(a),
            Operation::Arcsine => self.arcsine(a),
            Operation::Arccosine => self.arccosine(a),
            Operation::Arctangent => self.arctangent(a),
            Operation::Sinh => self.sinh(a),
            Operation::Cosh => self.cosh(a),
            Operation::Tanh => self.tanh(a),
            Operation::NaturalLog => self.natural_log(a),
            Operation::Log10 => self.log10(a),
            Operation::Log2 => self.log2(a),
            Operation::Exponential => self.exponential(a),
            Operation::Factorial => match factorial_arg(a) {
                Some(n) => self.factorial(n),
                None => self.record("factorial", f64::NAN),
            },
            Operation::Absolute => self.absolute(a),
            Operation::Ceiling => self.ceiling(a),
            Operation::Floor => self.floor(a),
            Operation::Round => self.round(a),
            Operation::DegreesToRadians => self.degrees_to_radians(a),
            Operation::RadiansToDegrees => self.radians_to_degrees(a),
            Operation::MemoryStore => {
                self.memory_store(a);
                return Ok(Outcome::Unit);
            }
            Operation::MemoryAdd => {
                self.memory_add(a);
                return Ok(Outcome::Unit);
            }
            Operation::MemorySubtract => {
                self.memory_subtract(a);
                return Ok(Outcome::Unit);
            }
            Operation::MemoryClear => {
                self.memory_clear();
                return Ok(Outcome::Unit);
            }
            Operation::MemoryRecall => self.memory_recall(),
            Operation::LastResult => self.last_result(),
            Operation::Pi => self.pi(),
            Operation::E => self.e(),
            Operation::GoldenRatio => self.golden_ratio(),
        };
        Ok(Outcome::Value(value))
    }

    /// Resolve `name` and invoke it
    pub fn apply_named(&mut self, name: &str, args: &[f64]) -> Result<Outcome> {
        let op: Operation = name.parse()?;
        self.apply(op, args)
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let mut seen = HashSet::new();
        for op in Operation::ALL {
            assert!(seen.insert(op.name().to_ascii_lowercase()), "{}", op);
            for alias in op.aliases() {
                assert!(seen.insert(alias.to_ascii_lowercase()), "{} alias {}", op, alias);
            }
        }
    }

    #[test]
    fn test_parse_canonical_and_aliases() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
            for alias in op.aliases() {
                assert_eq!(alias.parse::<Operation>().unwrap(), op);
            }
        }
        assert_eq!("SQRT".parse::<Operation>().unwrap(), Operation::SquareRoot);
        assert_eq!(" getPi ".parse::<Operation>().unwrap(), Operation::Pi);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "integrate".parse::<Operation>().unwrap_err();
        assert_eq!(err, CalcError::UnknownOperation("integrate".to_string()));
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        let json = serde_json::to_string(&Operation::DegreesToRadians).unwrap();
        assert_eq!(json, "\"degrees_to_radians\"");
        for op in Operation::ALL {
            let json = serde_json::to_string(&op).unwrap();
            assert_eq!(json, format!("\"{}\"", op.name()));
        }
        let op: Operation = serde_json::from_str("\"log10\"").unwrap();
        assert_eq!(op, Operation::Log10);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Memory".parse::<Category>().unwrap(), Category::Memory);
        assert!("misc".parse::<Category>().is_err());
        assert_eq!(
            serde_json::to_string(&Category::Trigonometric).unwrap(),
            "\"trigonometric\""
        );
        for c in Category::ALL {
            assert!(Operation::ALL.iter().any(|op| op.category() == c), "{}", c);
        }
    }

    #[test]
    fn test_apply_value_and_unit() {
        let mut calc = ScientificCalculator::new();
        assert_eq!(
            calc.apply(Operation::Add, &[2.0, 3.0]).unwrap(),
            Outcome::Value(5.0)
        );
        assert_eq!(
            calc.apply(Operation::MemoryStore, &[7.0]).unwrap(),
            Outcome::Unit
        );
        assert_eq!(
            calc.apply(Operation::MemoryRecall, &[]).unwrap(),
            Outcome::Value(7.0)
        );
        assert_eq!(
            calc.apply(Operation::LastResult, &[]).unwrap(),
            Outcome::Value(5.0)
        );
    }

    #[test]
    fn test_apply_arity_error_leaves_state() {
        let mut calc = ScientificCalculator::new();
        calc.add(1.0, 1.0);
        let err = calc.apply(Operation::Divide, &[1.0]).unwrap_err();
        assert_eq!(err, CalcError::arity("divide", 2, 1));
        assert_eq!(calc.last_result(), 2.0);
        assert!(calc.apply(Operation::Pi, &[1.0]).is_err());
    }

    #[test]
    fn test_apply_factorial_argument() {
        let mut calc = ScientificCalculator::new();
        assert_eq!(
            calc.apply(Operation::Factorial, &[6.0]).unwrap(),
            Outcome::Value(720.0)
        );

        // fractional input is floored
        assert_eq!(
            calc.apply(Operation::Factorial, &[3.7]).unwrap(),
            Outcome::Value(6.0)
        );
        assert_eq!(calc.last_result(), 6.0);

        let v = calc.apply(Operation::Factorial, &[1e12]).unwrap();
        assert_eq!(v, Outcome::Value(f64::INFINITY));
        assert_eq!(calc.last_result(), f64::INFINITY);

        for x in [f64::NAN, -1e12, -0.5, f64::NEG_INFINITY] {
            let v = calc.apply(Operation::Factorial, &[x]).unwrap();
            assert!(v.value().unwrap().is_nan(), "factorial({})", x);
            assert!(calc.last_result().is_nan());
        }

        assert_eq!(
            calc.apply_named("factorial", &[170.9]).unwrap().value(),
            Some(calc.factorial(170))
        );
    }

    #[test]
    fn test_records_result_matches_engine() {
        for op in Operation::ALL {
            let mut calc = ScientificCalculator::new();
            calc.add(40.0, 2.0);
            let arg = if op == Operation::Factorial { 3.0 } else { 0.5 };
            let args = vec![arg; op.arity()];
            calc.apply(op, &args).unwrap();
            let changed = calc.last_result() != 42.0;
            assert_eq!(changed, op.records_result(), "{}", op);
        }
    }

    #[test]
    fn test_apply_named() {
        let mut calc = ScientificCalculator::new();
        let out = calc.apply_named("nthRoot", &[-8.0, 3.0]).unwrap();
        assert!(out.value().unwrap().is_nan());
        assert!(calc.apply_named("nope", &[]).is_err());
    }
}
