//! Calculator session - one engine plus host settings
//!
//! Angle mode is handled here, not in the engine: in degrees mode trig inputs
//! go through `degrees_to_radians` and inverse-trig outputs through
//! `radians_to_degrees`, both as engine calls, so the last result reflects
//! the converted value.

use crate::config::{AngleMode, Settings};
use crate::format::format_value;
use anyhow::{bail, Context, Result};
use sci_calc::{Operation, Outcome, ScientificCalculator};
use tracing::debug;

pub struct Session {
    calc: ScientificCalculator,
    settings: Settings,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            calc: ScientificCalculator::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn calculator(&self) -> &ScientificCalculator {
        &self.calc
    }

    pub fn set_angle_mode(&mut self, mode: AngleMode) {
        debug!(mode = mode.label(), "angle mode changed");
        self.settings.angle_mode = mode;
    }

    /// Invoke an operation, converting angles per the session's angle mode
    pub fn invoke(&mut self, op: Operation, args: &[f64]) -> Result<Outcome> {
        let degrees = self.settings.angle_mode == AngleMode::Degrees;

        let outcome = match args {
            [x] if degrees && op.takes_angle() => {
                let radians = self.calc.degrees_to_radians(*x);
                self.calc.apply(op, &[radians])?
            },
            _ => self.calc.apply(op, args)?,
        };

        match outcome {
            Outcome::Value(radians) if degrees && op.returns_angle() => {
                Ok(Outcome::Value(self.calc.radians_to_degrees(radians)))
            },
            other => Ok(other),
        }
    }

    pub fn format(&self, value: f64, raw: bool) -> String {
        format_value(value, self.settings.precision, raw)
    }
}

/// One parsed line of interactive input
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Empty,
    Help,
    Quit,
    State,
    List,
    Mode(AngleMode),
    Call { op: Operation, args: Vec<f64> },
}

/// Parse `<op> [args..]` or a session command
///
/// Arguments are numbers or the names `ans` (current last result), `pi`
/// and `e`.
pub fn parse_line(line: &str, last_result: f64) -> Result<ReplCommand> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(ReplCommand::Empty);
    };

    match head.to_ascii_lowercase().as_str() {
        "help" | "?" => return Ok(ReplCommand::Help),
        "quit" | "exit" | "q" => return Ok(ReplCommand::Quit),
        "state" => return Ok(ReplCommand::State),
        "list" => return Ok(ReplCommand::List),
        "mode" => {
            let mode = match parts.next().map(str::to_ascii_lowercase).as_deref() {
                Some("deg" | "degrees") => AngleMode::Degrees,
                Some("rad" | "radians") => AngleMode::Radians,
                _ => bail!("Usage: mode deg|rad"),
            };
            return Ok(ReplCommand::Mode(mode));
        },
        _ => {},
    }

    let op: Operation = head.parse()?;
    let args = parts
        .map(|token| parse_arg(token, last_result))
        .collect::<Result<Vec<_>>>()?;
    Ok(ReplCommand::Call { op, args })
}

fn parse_arg(token: &str, last_result: f64) -> Result<f64> {
    match token.to_ascii_lowercase().as_str() {
        "ans" => Ok(last_result),
        "pi" => Ok(std::f64::consts::PI),
        "e" => Ok(std::f64::consts::E),
        _ => token
            .parse::<f64>()
            .with_context(|| format!("Invalid number '{}'", token)),
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    fn degrees_session() -> Session {
        Session::new(Settings {
            angle_mode: AngleMode::Degrees,
            ..Settings::default()
        })
    }

    #[test]
    fn test_radians_mode_passes_through() {
        let mut session = Session::new(Settings::default());
        let out = session.invoke(Operation::Sine, &[0.5]).unwrap();
        assert_eq!(out, Outcome::Value(0.5_f64.sin()));
    }

    #[test]
    fn test_degrees_mode_converts_trig_input() {
        let mut session = degrees_session();
        let v = session.invoke(Operation::Sine, &[90.0]).unwrap().value().unwrap();
        assert!((v - 1.0).abs() < 1e-12);
        assert_eq!(session.calculator().last_result(), v);
    }

    #[test]
    fn test_degrees_mode_converts_inverse_trig_output() {
        let mut session = degrees_session();
        let v = session.invoke(Operation::Arctangent, &[1.0]).unwrap().value().unwrap();
        assert!((v - 45.0).abs() < 1e-9);
        assert_eq!(session.calculator().last_result(), v);

        let v = session.invoke(Operation::Arcsine, &[2.0]).unwrap().value().unwrap();
        assert!(v.is_nan());
    }

    #[test]
    fn test_degrees_mode_leaves_other_ops() {
        let mut session = degrees_session();
        let out = session.invoke(Operation::Add, &[90.0, 90.0]).unwrap();
        assert_eq!(out, Outcome::Value(180.0));
        assert!(session.invoke(Operation::Sine, &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_parse_call() {
        assert_eq!(
            parse_line("add 2 -3.5", 0.0).unwrap(),
            ReplCommand::Call {
                op: Operation::Add,
                args: vec![2.0, -3.5]
            }
        );
        assert_eq!(
            parse_line("  sqrt   ans ", 81.0).unwrap(),
            ReplCommand::Call {
                op: Operation::SquareRoot,
                args: vec![81.0]
            }
        );
        assert_eq!(
            parse_line("mc", 0.0).unwrap(),
            ReplCommand::Call {
                op: Operation::MemoryClear,
                args: vec![]
            }
        );
    }

    #[test]
    fn test_parse_session_commands() {
        assert_eq!(parse_line("", 0.0).unwrap(), ReplCommand::Empty);
        assert_eq!(parse_line("QUIT", 0.0).unwrap(), ReplCommand::Quit);
        assert_eq!(parse_line("state", 0.0).unwrap(), ReplCommand::State);
        assert_eq!(
            parse_line("mode deg", 0.0).unwrap(),
            ReplCommand::Mode(AngleMode::Degrees)
        );
        assert!(parse_line("mode grad", 0.0).is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_line("frobnicate 1", 0.0).is_err());
        assert!(parse_line("add 1 x", 0.0).is_err());
    }
}
