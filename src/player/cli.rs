#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::engine::{
    board::Board,
    common::{GameError, Position},
    config::{GameMode, MAX_MINES, MIN_MINES},
    game::Player,
    rules::Selection,
};

use super::Controller;

/// Source of input lines. Implemented for the process stdin and for
/// in-memory cursors, so several controllers can share one terminal without
/// holding the stdin lock.
pub trait LineReader {
    /// Append the next line to `buf`, returning the bytes read (0 at end of input).
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineReader for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineReader for io::Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Human player at a terminal. Also asks the session-level questions
/// (game mode, board size, mine count, replay).
pub struct CliController<R, W> {
    input: R,
    output: W,
}

impl CliController<io::Stdin, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: LineReader, W: Write> CliController<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Everything written so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Write `text` as-is and flush.
    pub fn say(&mut self, text: &str) -> Result<(), GameError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Like [`say`](Self::say) for hooks that cannot return an error. The
    /// failure is logged; the next prompt reports it.
    fn notify(&mut self, text: &str) {
        if let Err(e) = self.say(text) {
            log::warn!("terminal write failed: {}", e);
        }
    }

    fn read_line(&mut self) -> Result<String, GameError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line)
    }

    /// Prompt until an open cell is entered as `column row` (1-based).
    pub fn prompt_position(&mut self, prompt: &str, board: &Board) -> Result<Position, GameError> {
        loop {
            self.say(&format!("{} --> [column] [row] \nInput example: 2 5\n> ", prompt))?;
            let line = self.read_line()?;
            let Some((col, row)) = parse_coordinates(&line) else {
                self.say("Invalid input.\n")?;
                continue;
            };
            match to_position(col, row) {
                Some(pos) if board.is_open(pos) => return Ok(pos),
                _ => self.say("\nPosition invalid or already used.\n")?,
            }
        }
    }

    /// Prompt until an integer in `[min, max]` is entered.
    pub fn request_dimension(&mut self, prompt: &str, min: usize, max: usize) -> Result<usize, GameError> {
        loop {
            self.say(&format!("{} ({}-{})\n> ", prompt, min, max))?;
            let line = self.read_line()?;
            match parse_number(&line) {
                None => self.say("\nInvalid input. Please enter a number.\n")?,
                Some(n) if n < min || n > max => self.say(&format!(
                    "\nInvalid input. Please enter a value between {} and {}.\n",
                    min, max
                ))?,
                Some(n) => return Ok(n),
            }
        }
    }

    /// Prompt until a mine count the board accepts is entered.
    pub fn request_mine_count(&mut self, board: &Board) -> Result<usize, GameError> {
        loop {
            self.say(&format!(
                "Choose the number of mines between {} and {}.\n> ",
                MIN_MINES, MAX_MINES
            ))?;
            let line = self.read_line()?;
            match parse_number(&line) {
                None => self.say("Invalid input. Please enter a number.\n")?,
                Some(n) if !board.is_valid_mine_count(n) => self.say(&format!(
                    "Invalid input. Please enter a value between {} and {}.\n",
                    MIN_MINES, MAX_MINES
                ))?,
                Some(n) => return Ok(n),
            }
        }
    }

    /// Main menu. `None` means the user chose to exit.
    pub fn choose_game_mode(&mut self) -> Result<Option<GameMode>, GameError> {
        loop {
            self.say("1. Player vs CPU\n2. Player 1 vs Player 2\n3. Exit Game\n> ")?;
            let line = self.read_line()?;
            match parse_number(&line) {
                Some(1) => return Ok(Some(GameMode::VsCpu)),
                Some(2) => return Ok(Some(GameMode::TwoPlayer)),
                Some(3) => return Ok(None),
                _ => self.say("\nInvalid option. Enter 1, 2, or 3.\n")?,
            }
        }
    }

    pub fn ask_play_again(&mut self) -> Result<bool, GameError> {
        self.say("Do you want to play again? (y/n)\n> ")?;
        loop {
            let line = self.read_line()?;
            match line.trim() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.say("Invalid entry. Enter 'y' for <YES> or 'n' for <NO> \n> ")?,
            }
        }
    }
}

impl<R: LineReader, W: Write> Controller for CliController<R, W> {
    fn begin_turn(&mut self, player: &Player, selection: Selection) {
        let banner = format!(
            "\n === {} PHASE === \n === TURN: {} ===\n\n",
            selection.label(),
            player.name
        );
        self.notify(&banner);
    }

    fn request_position(
        &mut self,
        _player: &Player,
        selection: Selection,
        board: &Board,
    ) -> Result<Position, GameError> {
        let prompt = match selection {
            Selection::Mines => "\nMine location",
            Selection::Guesses => "\nGuess position",
        };
        self.prompt_position(prompt, board)
    }

    fn handle_duplicate(&mut self, _player: &Player, _pos: Position) {
        self.notify("\nInvalid move! Position already chosen. Please choose another.\n");
    }
}

/// Exactly two unsigned integers separated by whitespace.
fn parse_coordinates(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let col = parts.next()?.parse().ok()?;
    let row = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((col, row))
}

fn parse_number(line: &str) -> Option<usize> {
    line.trim().parse().ok()
}

/// 1-based input to a zero-based position; 0 is never a valid coordinate.
fn to_position(col: usize, row: usize) -> Option<Position> {
    Some(Position::new(col.checked_sub(1)?, row.checked_sub(1)?))
}
