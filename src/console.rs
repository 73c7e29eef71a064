//! Line-oriented console presenter.

use crate::messages::Messages;
use crate::render::{Symbols, render_board};
use gridtac_core::{Board, InputError, Move, Presenter, PresenterError, Role};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Reads moves from `R` and writes prompts and boards to `W`.
///
/// Generic over the streams so tests can drive it with in-memory buffers.
#[derive(Debug)]
pub struct ConsolePresenter<R, W> {
    input: R,
    output: W,
    messages: Messages,
    symbols: Symbols,
}

impl<R: BufRead, W: Write> ConsolePresenter<R, W> {
    /// Creates a presenter over the given streams.
    pub fn new(input: R, output: W, messages: Messages) -> Self {
        Self {
            input,
            output,
            messages,
            symbols: Symbols::for_starter(Role::Computer),
        }
    }

    /// Localized message table in use.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Symbols for the current match.
    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    /// Resets symbols so `starter` draws `x`.
    #[instrument(skip(self))]
    pub fn begin_match(&mut self, starter: Role) {
        self.symbols = Symbols::for_starter(starter);
    }

    /// Consumes the presenter, returning its streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> Result<(), PresenterError> {
        writeln!(self.output, "{}", text).map_err(write_error)
    }

    /// Writes `prompt` without a newline and reads one line of reply.
    ///
    /// Returns `None` once the input is exhausted.
    #[instrument(skip(self, prompt))]
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>, PresenterError> {
        write!(self.output, "{}", prompt).map_err(write_error)?;
        self.output.flush().map_err(write_error)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| PresenterError::new(format!("Failed to read input: {}", e)))?;
        if read == 0 {
            debug!("Input exhausted");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[track_caller]
fn write_error(e: std::io::Error) -> PresenterError {
    PresenterError::new(format!("Failed to write output: {}", e))
}

impl<R: BufRead, W: Write> Presenter<Role> for ConsolePresenter<R, W> {
    fn prompt_move(&mut self, _board: &Board<Role>, _human: Role) -> Result<String, PresenterError> {
        let prompt = self.messages.your_turn();
        self.ask(prompt)?
            .ok_or_else(|| PresenterError::new("Input closed before a move was entered"))
    }

    fn reject_input(&mut self, error: &InputError) -> Result<(), PresenterError> {
        let text = self.messages.input_error(error);
        self.say(text)
    }

    fn computer_moved(&mut self, mv: Move) -> Result<(), PresenterError> {
        let text = self.messages.computer_plays(mv);
        self.say(&text)
    }

    fn board_changed(&mut self, board: &Board<Role>) -> Result<(), PresenterError> {
        let text = render_board(board, &self.symbols, true);
        write!(self.output, "{}", text).map_err(write_error)
    }
}
