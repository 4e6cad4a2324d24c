//! Line-oriented front end: prints the board after every move and reads pit
//! ids from the input, one per line.

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;

use crate::error::MoveError;
use crate::game::{Board, GameOutcome, GameState};

/// Render the board as two rows: pit ids, then stone counts.
///
/// With `color`, ids are dimmed and store counts are green.
pub fn render_pits(board: &Board, color: bool) -> String {
    let mut ids = String::new();
    let mut counts = String::new();

    for pit in board.pits() {
        let id = format!("{:4}", pit.id());
        let stones = format!("{:4}", pit.stones());
        if color {
            ids.push_str(&id.dark_grey().to_string());
            if pit.is_store() {
                counts.push_str(&stones.green().to_string());
            } else {
                counts.push_str(&stones);
            }
        } else {
            ids.push_str(&id);
            counts.push_str(&stones);
        }
    }

    format!("{ids}\n{counts}\n")
}

pub struct ConsoleGame<R, W> {
    state: GameState,
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    pub fn new(state: GameState, input: R, output: W) -> Self {
        ConsoleGame {
            state,
            input,
            output,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play until no regular pit holds stones, then print the scores.
    ///
    /// Running out of input before the game is over is an
    /// [`io::ErrorKind::UnexpectedEof`] error.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n----- Board layout -----")?;
        self.print_board()?;

        while !self.state.is_terminal() {
            self.play_one()?;
        }

        self.print_results()
    }

    /// Prompt the current player once and apply their answer.
    fn play_one(&mut self) -> io::Result<()> {
        let player = self.state.current_player();
        writeln!(self.output, "Player #{} is moving.", player.store())?;
        write!(self.output, "Which pit id to start with? ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the game was over",
            ));
        }
        let answer = line.trim();

        let Ok(pit) = answer.parse::<usize>() else {
            writeln!(self.output, "'{answer}' is not a pit id.")?;
            return Ok(());
        };

        match self.state.apply_move(pit) {
            Ok(_) => self.print_board(),
            Err(MoveError::EmptyPit { pit }) => {
                writeln!(self.output, "Try a different pit ({pit} is empty).")
            }
            Err(MoveError::IllegalOrigin { pit }) => {
                writeln!(self.output, "Cannot start from store {pit}.")
            }
            Err(err) => writeln!(self.output, "Invalid move: {err}."),
        }
    }

    fn print_board(&mut self) -> io::Result<()> {
        let rendered = render_pits(self.state.board(), self.color);
        write!(self.output, "{rendered}")
    }

    fn print_results(&mut self) -> io::Result<()> {
        writeln!(self.output, "Game is over")?;
        for (player, stones) in self.state.board().scores() {
            writeln!(self.output, "\tPlayer #{}: {}", player.store(), stones)?;
        }

        match self.state.outcome() {
            Some(GameOutcome::Winner(player)) => {
                writeln!(self.output, "Player #{} wins!", player.store())
            }
            Some(GameOutcome::Draw(players)) => {
                let names: Vec<String> = players
                    .iter()
                    .map(|player| format!("#{}", player.store()))
                    .collect();
                writeln!(self.output, "Draw between players {}.", names.join(", "))
            }
            None => Ok(()),
        }
    }
}
