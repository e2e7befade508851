use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Player1 => Cell::Player1,
            Player::Player2 => Cell::Player2,
        }
    }

    /// The player owning a disc, if the cell holds one
    pub fn from_cell(cell: Cell) -> Option<Player> {
        match cell {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::Player1),
            Cell::Player2 => Some(Player::Player2),
        }
    }

    /// One-based seat number, as shown in prompts
    pub fn number(self) -> usize {
        match self {
            Player::Player1 => 1,
            Player::Player2 => 2,
        }
    }
}

/// Display labels for both seats. Any text is accepted, including empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Players {
    player1: String,
    player2: String,
}

impl Players {
    pub fn new(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        Players {
            player1: player1.into(),
            player2: player2.into(),
        }
    }

    /// Label for the given seat
    pub fn label(&self, player: Player) -> &str {
        match player {
            Player::Player1 => &self.player1,
            Player::Player2 => &self.player2,
        }
    }
}
