// Interactive command loop

use crate::error::{CliError, CliResult};
use crate::output::OutputStyle;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tally_core::{OperationKind, Session, TallyError};

const MENU: &str = "enter your command or its number:\n\
                    1- increment\n\
                    2- decrement\n\
                    3- double\n\
                    4- randadd\n\
                    5- undo\n\
                    (history, help, exit)";

/// One parsed line of shell input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    /// Apply the selected operation
    Apply(OperationKind),
    /// Undo the most recent operation
    Undo,
    /// List the operations still on the history stack
    History,
    /// Show the menu again
    Help,
    /// Leave the loop
    Exit,
}

impl ShellCommand {
    /// Parse a trimmed, lowercased input line. `None` means the line is not
    /// a command at all (invalid selector, reported and skipped).
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim().to_lowercase();
        match line.as_str() {
            "5" | "undo" => Some(ShellCommand::Undo),
            "history" => Some(ShellCommand::History),
            "help" | "?" => Some(ShellCommand::Help),
            "exit" | "quit" => Some(ShellCommand::Exit),
            other => other.parse::<OperationKind>().ok().map(ShellCommand::Apply),
        }
    }
}

/// The interactive shell around one session
pub struct Repl {
    session: Session,
    style: OutputStyle,
}

impl Repl {
    /// Create a shell over a session starting at the given value
    pub fn new(initial: i64, style: OutputStyle) -> Self {
        Repl {
            session: Session::new(initial),
            style,
        }
    }

    /// Run the loop until exit or end of input
    pub fn start(&mut self) -> CliResult<()> {
        let mut rl = DefaultEditor::new().map_err(|e| CliError::Readline(e.to_string()))?;

        println!("{}", self.style.menu(MENU));

        loop {
            let readline = rl.readline("> ");
            match readline {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line.as_str());
                    if !self.dispatch(&line) {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(CliError::Readline(e.to_string())),
            }
        }

        Ok(())
    }

    /// Handle one input line; returns false when the loop should end
    fn dispatch(&mut self, line: &str) -> bool {
        match ShellCommand::parse(line) {
            Some(ShellCommand::Apply(kind)) => {
                let value = self.session.apply(kind);
                println!("{}", self.style.value(value));
            }
            Some(ShellCommand::Undo) => match self.session.undo() {
                Ok(value) => println!("{}", self.style.value(value)),
                Err(TallyError::NothingToUndo) => {
                    println!("{}", self.style.info("No commands to undo."));
                }
                Err(e) => println!("{}", self.style.error(&e.to_string())),
            },
            Some(ShellCommand::History) => {
                if self.session.history_len() == 0 {
                    println!("{}", self.style.info("History is empty."));
                } else {
                    for entry in self.session.history_entries() {
                        println!(
                            "{:>3}  {}  {}",
                            entry.index,
                            entry.applied_at.format("%H:%M:%S"),
                            entry.operation
                        );
                    }
                }
            }
            Some(ShellCommand::Help) => {
                println!("{}", self.style.menu(MENU));
            }
            Some(ShellCommand::Exit) => return false,
            None => {
                println!("{}", self.style.error("Invalid command."));
            }
        }
        true
    }

    /// The session's current value
    pub fn value(&self) -> i64 {
        self.session.value()
    }
}

/// Read the initial value from the console, re-prompting on bad input
pub fn prompt_initial_value(style: &OutputStyle) -> CliResult<i64> {
    let mut rl = DefaultEditor::new().map_err(|e| CliError::Readline(e.to_string()))?;

    loop {
        let prompt = style.menu("Enter your initial number: ");
        match rl.readline(&prompt) {
            Ok(line) => match line.trim().parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    println!("{}", style.error("Please enter an integer."));
                }
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                return Err(CliError::InvalidArgument {
                    message: "no initial value provided".to_string(),
                })
            }
            Err(e) => return Err(CliError::Readline(e.to_string())),
        }
    }
}
