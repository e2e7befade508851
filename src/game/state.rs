use log::{debug, info, warn};

use super::{Board, Player, Players, CAPACITY, COLS};
use crate::error::MoveError;

/// Where an accepted disc landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

/// Outcome of [`GameState::attempt_move`]: `Ok` means the move was accepted.
pub type MoveResult = Result<Placement, MoveError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Win(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Drawn,
}

/// A single game: the grid, whose turn it is, and how many discs were played.
///
/// The low-level operations (`attempt_move`, `detect_win`, `is_board_full`,
/// `advance_turn`) leave sequencing to the caller; [`GameState::play`] runs
/// them in the order a match requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    players: Players,
    current_player: Player,
    move_count: usize,
}

impl GameState {
    /// Start a game on an empty board with Player1 to move
    pub fn new(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        GameState {
            board: Board::new(),
            players: Players::new(player1, player2),
            current_player: Player::Player1,
            move_count: 0,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn current_player_label(&self) -> &str {
        self.players.label(self.current_player)
    }

    pub fn label(&self, player: Player) -> &str {
        self.players.label(player)
    }

    /// Number of accepted moves so far
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Drop the current player's disc into a zero-based column.
    ///
    /// The turn is not passed on: the mover stays current so a win found
    /// afterwards is attributed to them. Rejected moves leave the state as is.
    pub fn attempt_move(&mut self, column: i32) -> MoveResult {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let col = usize::try_from(column)
            .ok()
            .filter(|&col| col < COLS)
            .ok_or(MoveError::ColumnOutOfRange(column))?;

        let player = self.current_player;
        let row = self
            .board
            .drop_piece(col, player.to_cell())
            .ok_or(MoveError::ColumnFull(col))?;
        self.move_count += 1;
        debug_assert_eq!(self.board.disc_count(), self.move_count);

        debug!(
            "move {}: {:?} dropped into column {} (row {})",
            self.move_count, player, col, row
        );

        Ok(Placement {
            row,
            column: col,
            player,
        })
    }

    /// Whether four identical discs line up anywhere on the board
    pub fn detect_win(&self) -> bool {
        self.board.has_win()
    }

    /// Whether all cells have been played
    pub fn is_board_full(&self) -> bool {
        debug_assert_eq!(self.move_count == CAPACITY, self.board.is_full());
        self.move_count == CAPACITY
    }

    /// Pass the turn to the other player. Ignored once the game is won or
    /// drawn, so a winning mover remains the reported winner.
    pub fn advance_turn(&mut self) {
        if self.is_terminal() {
            warn!("turn not advanced: the game is already over");
            return;
        }
        self.current_player = self.current_player.other();
    }

    /// Attempt a move and settle its consequences: report the result if the
    /// match ended, otherwise hand the turn over.
    pub fn play(&mut self, column: i32) -> Result<Option<MatchOutcome>, MoveError> {
        let placement = self.attempt_move(column)?;

        if self.detect_win() {
            info!(
                "{:?} ({}) wins after {} moves",
                placement.player,
                self.label(placement.player),
                self.move_count
            );
            return Ok(Some(MatchOutcome::Win(placement.player)));
        }

        if self.is_board_full() {
            info!("board full after {} moves, draw", self.move_count);
            return Ok(Some(MatchOutcome::Draw));
        }

        self.advance_turn();
        Ok(None)
    }

    /// Owner of the first winning line, if any
    pub fn winner(&self) -> Option<Player> {
        self.board
            .winning_line()
            .and_then(|[(row, col), ..]| Player::from_cell(self.board.get(row, col)))
    }

    pub fn status(&self) -> GameStatus {
        if let Some(player) = self.winner() {
            GameStatus::Won(player)
        } else if self.is_board_full() {
            GameStatus::Drawn
        } else {
            GameStatus::InProgress
        }
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<MatchOutcome> {
        match self.status() {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(MatchOutcome::Win(player)),
            GameStatus::Drawn => Some(MatchOutcome::Draw),
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status() != GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Cell, ROWS};
    use super::*;

    /// Columns 0..7 filled three at a time, twice over, with 3 and 4 swapped
    /// so that no line of four forms.
    const DRAW_SEQUENCE: [i32; 42] = [
        0, 0, 0, 1, 1, 1, 2, 2, 2, 4, 4, 4, 3, 3, 3, 5, 5, 5, 6, 6, 6, //
        0, 0, 0, 1, 1, 1, 2, 2, 2, 4, 4, 4, 3, 3, 3, 5, 5, 5, 6, 6, 6,
    ];

    fn new_game() -> GameState {
        GameState::new("Alice", "Bob")
    }

    /// Play a sequence of moves, expecting each to be accepted
    fn play_all(state: &mut GameState, columns: &[i32]) -> Option<MatchOutcome> {
        let mut outcome = None;
        for &col in columns {
            outcome = state.play(col).unwrap();
        }
        outcome
    }

    #[test]
    fn test_initial_state() {
        let state = new_game();
        assert_eq!(state.current_player(), Player::Player1);
        assert_eq!(state.current_player_label(), "Alice");
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_empty_labels_are_accepted() {
        let state = GameState::new("", "");
        assert_eq!(state.current_player_label(), "");
    }

    #[test]
    fn test_first_move_lands_on_bottom_row() {
        for col in 0..COLS as i32 {
            let mut state = new_game();
            let placement = state.attempt_move(col).unwrap();
            assert_eq!(placement.row, ROWS - 1);
            assert_eq!(placement.column, col as usize);
            assert_eq!(placement.player, Player::Player1);
            assert_eq!(state.board().get(ROWS - 1, col as usize), Cell::Player1);
            assert_eq!(state.move_count(), 1);
        }
    }

    #[test]
    fn test_attempt_move_keeps_mover_current() {
        let mut state = new_game();
        state.attempt_move(3).unwrap();
        assert_eq!(state.current_player(), Player::Player1);

        state.advance_turn();
        assert_eq!(state.current_player(), Player::Player2);
        assert_eq!(state.current_player_label(), "Bob");
    }

    #[test]
    fn test_column_full_leaves_state_unchanged() {
        let mut state = new_game();
        play_all(&mut state, &[2, 2, 2, 2, 2, 2]);

        let before = state.clone();
        assert_eq!(state.attempt_move(2), Err(MoveError::ColumnFull(2)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_out_of_range_leaves_state_unchanged() {
        let mut state = new_game();
        state.play(0).unwrap();

        let before = state.clone();
        assert_eq!(state.attempt_move(-1), Err(MoveError::ColumnOutOfRange(-1)));
        assert_eq!(state.attempt_move(7), Err(MoveError::ColumnOutOfRange(7)));
        assert_eq!(
            state.attempt_move(i32::MIN),
            Err(MoveError::ColumnOutOfRange(i32::MIN))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_turn_alternation() {
        let mut state = new_game();
        // Spread across columns so nothing lines up
        let columns = [0, 1, 2, 3, 4, 5, 6, 6, 5, 4];
        for (n, &col) in columns.iter().enumerate() {
            let expected = if n % 2 == 0 {
                Player::Player1
            } else {
                Player::Player2
            };
            assert_eq!(state.current_player(), expected);
            assert_eq!(state.play(col).unwrap(), None);
        }
        assert_eq!(state.current_player(), Player::Player1);
    }

    #[test]
    fn test_horizontal_win() {
        let mut state = new_game();
        // Player2 stacks on top, Player1 fills the bottom row
        play_all(&mut state, &[3, 3, 1, 1, 0, 0]);
        assert!(!state.detect_win());

        assert_eq!(state.play(2).unwrap(), Some(MatchOutcome::Win(Player::Player1)));
        assert!(state.detect_win());
        assert_eq!(state.current_player(), Player::Player1);
        assert_eq!(state.current_player_label(), "Alice");
    }

    #[test]
    fn test_vertical_win() {
        let mut state = new_game();
        play_all(&mut state, &[4, 0, 4, 0, 4, 0]);
        assert!(!state.detect_win());

        assert_eq!(state.play(4).unwrap(), Some(MatchOutcome::Win(Player::Player1)));
        assert_eq!(state.board().get(2, 4), Cell::Player1);
        assert_eq!(state.status(), GameStatus::Won(Player::Player1));
    }

    #[test]
    fn test_player2_win_is_reported_for_player2() {
        let mut state = new_game();
        let outcome = play_all(&mut state, &[0, 6, 1, 6, 0, 6, 1, 6]);
        assert_eq!(outcome, Some(MatchOutcome::Win(Player::Player2)));
        assert_eq!(state.current_player_label(), "Bob");
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let mut state = new_game();
        play_all(&mut state, &[3, 2, 2, 1, 0, 1, 1, 0, 6, 0]);
        assert!(!state.detect_win());

        assert_eq!(state.play(0).unwrap(), Some(MatchOutcome::Win(Player::Player1)));
        for (row, col) in [(2, 0), (3, 1), (4, 2), (5, 3)] {
            assert_eq!(state.board().get(row, col), Cell::Player1);
        }
    }

    #[test]
    fn test_diagonal_down_left_win() {
        let mut state = new_game();
        play_all(&mut state, &[3, 4, 4, 5, 6, 5, 5, 6, 0, 6]);
        assert!(!state.detect_win());

        assert_eq!(state.play(6).unwrap(), Some(MatchOutcome::Win(Player::Player1)));
        for (row, col) in [(2, 6), (3, 5), (4, 4), (5, 3)] {
            assert_eq!(state.board().get(row, col), Cell::Player1);
        }
    }

    #[test]
    fn test_draw() {
        let mut state = new_game();
        let (last, rest) = DRAW_SEQUENCE.split_last().unwrap();
        assert_eq!(play_all(&mut state, rest), None);
        assert!(!state.is_board_full());

        assert_eq!(state.play(*last).unwrap(), Some(MatchOutcome::Draw));
        assert!(state.is_board_full());
        assert!(!state.detect_win());
        assert!(state.board().is_full());
        assert_eq!(state.status(), GameStatus::Drawn);
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut state = new_game();
        play_all(&mut state, &[4, 0, 4, 0, 4, 0, 4]);

        let before = state.clone();
        assert_eq!(state.attempt_move(1), Err(MoveError::GameOver));
        assert_eq!(state.play(1), Err(MoveError::GameOver));
        state.advance_turn();
        assert_eq!(state, before);
        assert_eq!(state.outcome(), Some(MatchOutcome::Win(Player::Player1)));
    }

    #[test]
    fn test_no_moves_after_draw() {
        let mut state = new_game();
        play_all(&mut state, &DRAW_SEQUENCE);
        assert_eq!(state.attempt_move(0), Err(MoveError::GameOver));
        assert_eq!(state.outcome(), Some(MatchOutcome::Draw));
    }

    #[test]
    fn test_advance_turn_ignored_after_draw() {
        let mut state = new_game();
        assert_eq!(play_all(&mut state, &DRAW_SEQUENCE), Some(MatchOutcome::Draw));

        let before = state.clone();
        state.advance_turn();
        assert_eq!(state, before);
        assert_eq!(state.current_player(), Player::Player2);
    }

    #[test]
    fn test_move_count_matches_discs_on_board() {
        let mut state = new_game();
        play_all(&mut state, &[3, 3, 2, 4, 6]);
        assert_eq!(state.move_count(), 5);
        assert_eq!(state.board().disc_count(), state.move_count());

        // Rejected moves count nothing
        let _ = state.attempt_move(9);
        assert_eq!(state.board().disc_count(), 5);
        assert!(!state.board().is_full());
    }

    #[test]
    fn test_queries_are_idempotent() {
        let mut state = new_game();
        play_all(&mut state, &[0, 1, 0, 1, 0, 1]);

        let before = state.clone();
        for _ in 0..3 {
            assert!(!state.detect_win());
            assert!(!state.is_board_full());
            assert!(!state.is_terminal());
        }
        assert_eq!(state, before);

        state.play(0).unwrap();
        let before = state.clone();
        for _ in 0..3 {
            assert!(state.detect_win());
            assert_eq!(state.winner(), Some(Player::Player1));
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_games_are_independent() {
        let mut a = new_game();
        let b = new_game();
        a.play(3).unwrap();
        assert_eq!(b.board(), &Board::new());
        assert_eq!(b.move_count(), 0);
    }
}
