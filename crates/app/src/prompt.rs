//! Interactive console session.
//!
//! Asks for each rotor's position and increment, the repeat count and the
//! message, the way an operator would set up the machine by hand. Numbers
//! may be given on one line or spread across several.

use enigma_sim_core::{rotor::MAX_SETTING, MachineConfig};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use thiserror::Error;

/// Errors while prompting.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Input ended before all answers were given
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// Answer is not a non-negative integer
    #[error("{what} must be an integer, got {input:?}")]
    NotAnInteger { what: &'static str, input: String },

    /// Answer is outside [min, max]
    #[error("{what} must be between {min} and {max}, got {value}")]
    OutOfRange {
        what: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    /// Console I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads whitespace-separated answers and whole lines from a console.
struct Prompter<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
        }
    }

    fn ask(&mut self, question: &str) -> Result<(), PromptError> {
        write!(self.writer, "{}", question)?;
        self.writer.flush()?;
        Ok(())
    }

    fn next_token(&mut self) -> Result<String, PromptError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(PromptError::UnexpectedEof);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    fn next_number(&mut self, what: &'static str, min: usize, max: usize) -> Result<usize, PromptError> {
        let token = self.next_token()?;
        let value: usize = token.parse().map_err(|_| PromptError::NotAnInteger {
            what,
            input: token.clone(),
        })?;
        if value < min || value > max {
            return Err(PromptError::OutOfRange {
                what,
                value,
                min,
                max,
            });
        }
        Ok(value)
    }

    /// Next non-empty line; leftover answers on the current line are dropped.
    fn next_line(&mut self) -> Result<String, PromptError> {
        self.pending.clear();
        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(PromptError::UnexpectedEof);
            }
            if !line.trim().is_empty() {
                return Ok(line.trim_end_matches(['\r', '\n']).to_string());
            }
        }
    }
}

/// Run the console session, updating `machine` and returning the raw message.
///
/// The message is returned as typed; normalization is the caller's job.
pub fn run_session<R: BufRead, W: Write>(
    machine: &mut MachineConfig,
    reader: R,
    writer: W,
) -> Result<String, PromptError> {
    let mut prompter = Prompter::new(reader, writer);

    for (i, rotor) in machine.rotors.iter_mut().enumerate() {
        prompter.ask(&format!(
            "Enter rotor {} position and increment (0 - {}): ",
            i, MAX_SETTING
        ))?;
        rotor.position = prompter.next_number("rotor position", 0, MAX_SETTING)?;
        rotor.increment = prompter.next_number("rotor increment", 0, MAX_SETTING)?;
    }

    prompter.ask("Enter repeat: ")?;
    machine.repeat = prompter.next_number("repeat", 1, usize::MAX)?;

    prompter.ask("Enter message: ")?;
    prompter.next_line()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str) -> (Result<String, PromptError>, MachineConfig, String) {
        let mut machine = MachineConfig::classic();
        let mut output = Vec::new();
        let result = run_session(&mut machine, Cursor::new(input), &mut output);
        (result, machine, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_full_session() {
        let (result, machine, transcript) = session("1 2\n3 4\n5 6\n2\nhello world\n");

        assert_eq!(result.unwrap(), "hello world");
        let settings: Vec<(usize, usize)> = machine
            .rotors
            .iter()
            .map(|r| (r.position, r.increment))
            .collect();
        assert_eq!(settings, vec![(1, 2), (3, 4), (5, 6)]);
        assert_eq!(machine.repeat, 2);
        assert!(transcript.contains("Enter rotor 0 position and increment (0 - 25): "));
        assert!(transcript.contains("Enter rotor 2 position and increment (0 - 25): "));
        assert!(transcript.ends_with("Enter message: "));
    }

    #[test]
    fn test_answers_across_lines() {
        let (result, machine, _) = session("1\n2\n3\n4\n5\n6\n1\n\nABC\n");
        assert_eq!(result.unwrap(), "ABC");
        assert_eq!(machine.rotors[2].increment, 6);
    }

    #[test]
    fn test_not_an_integer() {
        let (result, _, _) = session("one 2\n");
        assert!(matches!(
            result,
            Err(PromptError::NotAnInteger {
                what: "rotor position",
                ..
            })
        ));
    }

    #[test]
    fn test_position_out_of_range() {
        let (result, _, _) = session("26 1\n");
        assert!(matches!(
            result,
            Err(PromptError::OutOfRange {
                what: "rotor position",
                value: 26,
                ..
            })
        ));
    }

    #[test]
    fn test_increment_out_of_range() {
        let (result, _, _) = session("0 99\n");
        assert!(matches!(
            result,
            Err(PromptError::OutOfRange {
                what: "rotor increment",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_repeat_rejected() {
        let (result, _, _) = session("0 1 0 1 0 1\n0\n");
        assert!(matches!(
            result,
            Err(PromptError::OutOfRange { what: "repeat", .. })
        ));
    }

    #[test]
    fn test_eof_before_message() {
        let (result, _, _) = session("0 1 0 1 0 1\n1\n");
        assert!(matches!(result, Err(PromptError::UnexpectedEof)));
    }
}
