//! Interactive calculator session
//!
//! One engine lives for the whole session, so memory and `ans` carry over
//! between lines.

use crate::session::{parse_line, ReplCommand, Session};
use anyhow::{Context, Result};
use colored::*;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper};
use sci_calc::{Operation, Outcome};

const SESSION_COMMANDS: [&str; 6] = ["help", "quit", "exit", "state", "list", "mode"];

/// Tab completion for operation names and session commands
struct CalcHelper;

impl Helper for CalcHelper {}

impl Hinter for CalcHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for CalcHelper {}

impl Validator for CalcHelper {}

impl Completer for CalcHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.contains(' ') {
            return Ok((pos, vec![]));
        }
        Ok((0, complete_command(line)))
    }
}

fn complete_command(prefix: &str) -> Vec<Pair> {
    let prefix = prefix.to_ascii_lowercase();
    SESSION_COMMANDS
        .iter()
        .copied()
        .chain(Operation::ALL.iter().map(|op| op.name()))
        .filter(|name| name.starts_with(&prefix))
        .map(|name| Pair {
            display: name.to_string(),
            replacement: name.to_string(),
        })
        .collect()
}

pub fn run_repl(mut session: Session) -> Result<()> {
    let config = rustyline::Config::builder()
        .completion_type(rustyline::CompletionType::List)
        .build();
    let mut rl = Editor::with_config(config).context("Failed to initialize readline")?;
    rl.set_helper(Some(CalcHelper));

    println!("{}", "Scientific Calculator".bright_cyan().bold());
    println!(
        "Type '{}' for commands, {} for completion\n",
        "help".bright_yellow(),
        "Tab".bright_cyan()
    );

    loop {
        let prompt = format!("calc[{}]> ", session.settings().angle_mode.label());
        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                match execute_line(&mut session, line) {
                    Ok(true) => continue,
                    Ok(false) => break,
                    Err(e) => eprintln!("{} {}", "Error:".red(), e),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            },
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{} {}", "Readline error:".red(), e);
                break;
            },
        }
    }

    println!("Bye!");
    Ok(())
}

/// Execute one line; `Ok(false)` ends the session
fn execute_line(session: &mut Session, line: &str) -> Result<bool> {
    let last = session.calculator().last_result();
    match parse_line(line, last)? {
        ReplCommand::Empty => {},
        ReplCommand::Help => print_help(),
        ReplCommand::Quit => return Ok(false),
        ReplCommand::State => print_state(session),
        ReplCommand::List => crate::print_catalog(None),
        ReplCommand::Mode(mode) => {
            session.set_angle_mode(mode);
            println!("Angle mode: {}", mode.label().bright_cyan());
        },
        ReplCommand::Call { op, args } => match session.invoke(op, &args)? {
            Outcome::Value(v) => {
                let text = session.format(v, false);
                if v.is_finite() {
                    println!("{}", text.bright_green());
                } else {
                    println!("{}", text.red());
                }
            },
            Outcome::Unit => print_memory(session),
        },
    }
    Ok(true)
}

fn print_memory(session: &Session) {
    let calc = session.calculator();
    let indicator = if calc.memory_is_set() { "M" } else { " " };
    println!(
        "{} {}",
        indicator.bright_yellow(),
        session.format(calc.memory_recall(), true)
    );
}

fn print_state(session: &Session) {
    let calc = session.calculator();
    println!(
        "  {:<12} {}",
        "last result",
        session.format(calc.last_result(), true)
    );
    println!(
        "  {:<12} {}",
        "memory",
        session.format(calc.memory_recall(), true)
    );
    println!("  {:<12} {}", "angle mode", session.settings().angle_mode.label());
}

fn print_help() {
    println!("{}", "Usage:".bright_cyan());
    println!("  <operation> [args..]   e.g. 'add 2 3', 'sqrt ans', 'ms 10', 'mr'");
    println!("  ans | pi | e           usable in place of a numeric argument");
    println!("  mode deg|rad           switch the angle unit for trig operations");
    println!("  list                   show every operation");
    println!("  state                  show last result, memory and angle mode");
    println!("  help | quit");
}
