//! Line-oriented console I/O used by the session.
//!
//! [`Console`] is the seam between the reporters and the terminal: the
//! interactive [`Prompter`] asks the operator, [`Unattended`] answers every
//! yes/no question with a fixed value and never reads input.

use crate::errors::{AppError, AppResult};
use crate::utils::formatting::is_yes;
use std::io::{BufRead, Write};

pub trait Console {
    fn out(&mut self) -> &mut dyn Write;

    /// Ask a yes/no question. Only "yes" (any case) counts as yes.
    fn confirm(&mut self, question: &str) -> AppResult<bool>;
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and read one line. End of input is an error, so a
    /// closed stdin cannot keep a retry loop spinning.
    pub fn ask(&mut self, question: &str) -> AppResult<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask until `parse` accepts the answer. Rejected selections re-prompt
    /// with `retry`; any other error is returned.
    pub fn ask_until<T>(
        &mut self,
        question: &str,
        retry: &str,
        parse: impl Fn(&str) -> AppResult<T>,
    ) -> AppResult<T> {
        let mut answer = self.ask(question)?;
        loop {
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(AppError::InvalidSelection { kind, value }) => {
                    log::debug!("rejected {kind} '{value}'");
                    answer = self.ask(retry)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for Prompter<R, W> {
    fn out(&mut self) -> &mut dyn Write {
        &mut self.output
    }

    fn confirm(&mut self, question: &str) -> AppResult<bool> {
        Ok(is_yes(&self.ask(question)?))
    }
}

/// Non-interactive console: writes output, answers every question the same.
pub struct Unattended<W> {
    output: W,
    answer: bool,
}

impl<W: Write> Unattended<W> {
    pub fn new(output: W, answer: bool) -> Self {
        Self { output, answer }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<W: Write> Console for Unattended<W> {
    fn out(&mut self) -> &mut dyn Write {
        &mut self.output
    }

    fn confirm(&mut self, _question: &str) -> AppResult<bool> {
        Ok(self.answer)
    }
}
