use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use log::debug;

use super::input::{parse_column, parse_name};
use crate::config::DisplayConfig;
use crate::game::{Cell, GameState, MatchOutcome, MoveError, Player, COLS};

const INVALID_INPUT: &str = "Invalid input. Please enter a number between 1 and 7.";

/// Line-oriented driver: prints the grid and reads one column per line.
pub struct Console<R, W> {
    input: R,
    output: W,
    display: DisplayConfig,
    message: Option<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, display: DisplayConfig) -> Self {
        Console {
            input,
            output,
            display,
            message: None,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line of text outside of the board view
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Ask for a seat's display name. Closed input yields an empty name.
    pub fn prompt_name(&mut self, player: Player) -> io::Result<String> {
        write!(
            self.output,
            "Enter Player {} name ({}): ",
            player.number(),
            self.display.symbol(player)
        )?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input closed at name prompt for player {}", player.number());
        }
        Ok(parse_name(&line))
    }

    /// Run turns until the match ends, re-prompting on bad input.
    pub fn play(&mut self, state: &mut GameState) -> io::Result<MatchOutcome> {
        loop {
            self.render(state)?;

            if let Some(outcome) = state.outcome() {
                match outcome {
                    MatchOutcome::Win(player) => writeln!(
                        self.output,
                        "Congratulations {}, you win!",
                        state.label(player)
                    )?,
                    MatchOutcome::Draw => writeln!(self.output, "Game Over! It's a Draw!")?,
                }
                self.output.flush()?;
                return Ok(outcome);
            }

            if let Some(message) = self.message.take() {
                writeln!(self.output, "{message}")?;
            }
            writeln!(
                self.output,
                "{}'s Turn ({})",
                state.current_player_label(),
                self.display.symbol(state.current_player())
            )?;
            write!(self.output, "Enter column number (1-{COLS}): ")?;
            self.output.flush()?;

            let line = self.read_line()?;
            self.message = match parse_column(&line) {
                Ok(column) => match state.play(column) {
                    Ok(_) => None,
                    Err(MoveError::ColumnFull(col)) => Some(format!(
                        "Column {} is full. Choose another column.",
                        col + 1
                    )),
                    Err(err) => {
                        debug!("move rejected: {err}");
                        Some(INVALID_INPUT.to_string())
                    }
                },
                Err(err) => {
                    debug!("input rejected: {err}");
                    Some(INVALID_INPUT.to_string())
                }
            };
        }
    }

    /// Draw the title line, the grid and the column numbers.
    pub fn render(&mut self, state: &GameState) -> io::Result<()> {
        if self.display.clear_screen {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        let players = state.players();
        writeln!(
            self.output,
            "Connect Four Game - {} ({}) vs {} ({})",
            players.label(Player::Player1),
            self.display.player1_symbol,
            players.label(Player::Player2),
            self.display.player2_symbol
        )?;
        writeln!(self.output)?;

        for row in state.board().cells() {
            let line: String = row
                .iter()
                .map(|&cell| format!("{} ", self.cell_symbol(cell)))
                .collect();
            writeln!(self.output, "{line}")?;
        }

        let footer: Vec<String> = (1..=COLS).map(|n| n.to_string()).collect();
        writeln!(self.output, "{}", footer.join(" "))?;
        writeln!(self.output)?;
        self.output.flush()
    }

    fn cell_symbol(&self, cell: Cell) -> char {
        match Player::from_cell(cell) {
            Some(player) => self.display.symbol(player),
            None => self.display.empty_symbol,
        }
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the game finished",
            ));
        }
        Ok(line)
    }
}
