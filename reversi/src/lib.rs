//! Core types and game logic for the four-direction disc-flipping game.
//!
//! The board is an 8x8 grid of discs. A move is legal when it outflanks at
//! least one contiguous run of opponent discs along a scanned direction,
//! terminating in-bounds on the mover's own disc. By default only the four
//! axis-aligned directions are scanned; [`Rules::EightWay`] restores the
//! canonical direction set.
//!
//! The board never passes a turn on its own: [`Board::apply_move`] always
//! hands the turn to the opponent, and the driver decides whether the next
//! side must pass via [`Board::legal_moves`] and [`Board::pass_turn`].

use thiserror::Error;

/// Contract violations reported by the board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal move at ({row}, {col})")]
    IllegalMove { row: usize, col: usize },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(&self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Convert player to cell representation
    pub fn to_cell(&self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Black,
    White,
}

// Scan order matches the reference rules: south, east, north, west.
const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Direction set used for legality and capture scans.
///
/// The reference rules scan only the four axis-aligned directions, so
/// `Orthogonal` is the default. `EightWay` adds the four diagonals used by
/// the canonical game.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Rules {
    #[default]
    Orthogonal,
    EightWay,
}

impl Rules {
    pub fn directions(self) -> &'static [(i8, i8)] {
        match self {
            Rules::Orthogonal => &ORTHOGONAL_DIRECTIONS,
            Rules::EightWay => &ALL_DIRECTIONS,
        }
    }
}

/// Per-side remaining-disc counters for the disc-limited variant.
///
/// The budget lives inside the [`Board`] so that every search copy owns an
/// independent counter pair; a side with a zero counter may not move even
/// when the board itself would allow it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DiscBudget {
    black: u8,
    white: u8,
}

impl DiscBudget {
    pub fn new(per_side: u8) -> Self {
        DiscBudget {
            black: per_side,
            white: per_side,
        }
    }

    pub fn remaining(&self, player: Player) -> u8 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    pub fn exhausted(&self) -> bool {
        self.black == 0 && self.white == 0
    }

    fn spend(&mut self, player: Player) {
        match player {
            Player::Black => self.black = self.black.saturating_sub(1),
            Player::White => self.white = self.white.saturating_sub(1),
        }
    }
}

/// The 8x8 grid plus whose turn it is.
///
/// `Clone` gives full value semantics: a clone shares no storage with the
/// original, which is what lets the search explore branches on private
/// copies without touching the live game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; 8]; 8],
    side_to_move: Player,
    rules: Rules,
    budget: Option<DiscBudget>,
}

impl Board {
    /// Create a new board with the standard initial setup.
    ///
    /// The four center cells are the only occupied cells:
    /// - (3,3) and (4,4) are White
    /// - (3,4) and (4,3) are Black
    ///
    /// Black always moves first.
    pub fn new() -> Self {
        Self::with_rules(Rules::Orthogonal)
    }

    /// Standard initial setup under a chosen direction set.
    pub fn with_rules(rules: Rules) -> Self {
        let mut cells = [[Cell::Empty; 8]; 8];

        cells[3][3] = Cell::White;
        cells[3][4] = Cell::Black;
        cells[4][3] = Cell::Black;
        cells[4][4] = Cell::White;

        Board {
            cells,
            side_to_move: Player::Black,
            rules,
            budget: None,
        }
    }

    /// Attach equal per-side disc budgets for the disc-limited variant.
    pub fn with_budget(mut self, per_side: u8) -> Self {
        self.budget = Some(DiscBudget::new(per_side));
        self
    }

    /// Build a board from an arbitrary position.
    pub fn from_cells(cells: [[Cell; 8]; 8], side_to_move: Player, rules: Rules) -> Self {
        Board {
            cells,
            side_to_move,
            rules,
            budget: None,
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Remaining discs for `player`, or `None` when no budget is tracked.
    pub fn budget_remaining(&self, player: Player) -> Option<u8> {
        self.budget.map(|budget| budget.remaining(player))
    }

    /// Check whether the side to move may play at (row, col).
    pub fn is_legal(&self, row: usize, col: usize) -> bool {
        self.is_legal_for(self.side_to_move, row, col)
    }

    /// Check whether `player` may play at (row, col).
    ///
    /// Legality takes the side as an explicit parameter so that checking the
    /// opponent never toggles the turn field. A move is legal when the cell
    /// is empty, the side still has discs to place (if budgets are tracked),
    /// and at least one scanned direction outflanks an opponent run.
    pub fn is_legal_for(&self, player: Player, row: usize, col: usize) -> bool {
        if row >= 8 || col >= 8 {
            return false;
        }

        if let Some(budget) = self.budget {
            if budget.remaining(player) == 0 {
                return false;
            }
        }

        if self.cells[row][col] != Cell::Empty {
            return false;
        }

        self.rules
            .directions()
            .iter()
            .any(|&(dr, dc)| self.would_flip_in_direction(player, row, col, dr, dc))
    }

    /// All legal coordinates for the side to move, in row-major order.
    ///
    /// Row-major order is part of the contract: the search engine relies on
    /// it as the tie-break between equally scored moves.
    pub fn legal_moves(&self) -> Vec<(usize, usize)> {
        self.legal_moves_for(self.side_to_move)
    }

    /// All legal coordinates for `player`, in row-major order.
    pub fn legal_moves_for(&self, player: Player) -> Vec<(usize, usize)> {
        let mut moves = Vec::new();

        for row in 0..8 {
            for col in 0..8 {
                if self.is_legal_for(player, row, col) {
                    moves.push((row, col));
                }
            }
        }

        moves
    }

    /// Apply a move for the side to move, flipping every outflanked run.
    ///
    /// Fails fast with [`GameError::IllegalMove`] on any coordinate not in
    /// [`Board::legal_moves`], leaving the board untouched. On success the
    /// mover's budget (if any) is decremented by the one disc placed, the
    /// turn passes to the opponent, and the number of flipped discs is
    /// returned (at least 1 for any legal move).
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<u8, GameError> {
        if !self.is_legal(row, col) {
            return Err(GameError::IllegalMove { row, col });
        }

        let mover = self.side_to_move;
        self.cells[row][col] = mover.to_cell();

        let mut flipped = 0;
        for &(dr, dc) in self.rules.directions() {
            flipped += self.flip_in_direction(mover, row, col, dr, dc);
        }

        if let Some(budget) = self.budget.as_mut() {
            budget.spend(mover);
        }

        self.side_to_move = mover.opponent();
        Ok(flipped)
    }

    /// Hand the turn to the opponent without placing a disc.
    ///
    /// The driver calls this when the side to move has no legal move but the
    /// game is not terminal.
    pub fn pass_turn(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Whether the game has ended.
    ///
    /// The game is over when neither side has a legal move, or when both
    /// disc budgets are exhausted. A position where only the side to move is
    /// stuck is not terminal: that is a pass, and the turn field is left
    /// exactly as it was.
    pub fn is_terminal(&self) -> bool {
        if let Some(budget) = self.budget {
            if budget.exhausted() {
                return true;
            }
        }

        self.legal_moves_for(self.side_to_move).is_empty()
            && self
                .legal_moves_for(self.side_to_move.opponent())
                .is_empty()
    }

    /// Disc counts as (black, white).
    pub fn disc_counts(&self) -> (u8, u8) {
        let mut black = 0;
        let mut white = 0;

        for row in 0..8 {
            for col in 0..8 {
                match self.cells[row][col] {
                    Cell::Black => black += 1,
                    Cell::White => white += 1,
                    Cell::Empty => {}
                }
            }
        }

        (black, white)
    }

    /// Check if placing `player`'s disc at (row, col) would flip discs in
    /// direction (dr, dc): a run of at least one opponent disc terminated
    /// in-bounds by one of `player`'s own.
    fn would_flip_in_direction(
        &self,
        player: Player,
        row: usize,
        col: usize,
        dr: i8,
        dc: i8,
    ) -> bool {
        let opponent = player.opponent().to_cell();
        let own = player.to_cell();

        let mut r = row as i8 + dr;
        let mut c = col as i8 + dc;
        let mut found_opponent = false;

        while (0..8).contains(&r) && (0..8).contains(&c) {
            match self.cells[r as usize][c as usize] {
                Cell::Empty => return false,
                cell if cell == opponent => {
                    found_opponent = true;
                    r += dr;
                    c += dc;
                }
                cell if cell == own => return found_opponent,
                _ => return false,
            }
        }

        false
    }

    /// Flip the outflanked run in direction (dr, dc), returning how many
    /// discs changed side.
    fn flip_in_direction(&mut self, player: Player, row: usize, col: usize, dr: i8, dc: i8) -> u8 {
        if !self.would_flip_in_direction(player, row, col, dr, dc) {
            return 0;
        }

        let opponent = player.opponent().to_cell();
        let own = player.to_cell();
        let mut flipped = 0;

        let mut r = row as i8 + dr;
        let mut c = col as i8 + dc;

        while (0..8).contains(&r) && (0..8).contains(&c) {
            if self.cells[r as usize][c as usize] == opponent {
                self.cells[r as usize][c as usize] = own;
                flipped += 1;
                r += dr;
                c += dc;
            } else {
                break;
            }
        }

        flipped
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(discs: &[(usize, usize, Cell)]) -> [[Cell; 8]; 8] {
        let mut cells = [[Cell::Empty; 8]; 8];
        for &(row, col, cell) in discs {
            cells[row][col] = cell;
        }
        cells
    }

    #[test]
    fn test_new_initial_setup() {
        let board = Board::new();

        assert_eq!(board.cell(3, 3), Cell::White);
        assert_eq!(board.cell(3, 4), Cell::Black);
        assert_eq!(board.cell(4, 3), Cell::Black);
        assert_eq!(board.cell(4, 4), Cell::White);

        for row in 0..8 {
            for col in 0..8 {
                if !(3..=4).contains(&row) || !(3..=4).contains(&col) {
                    assert_eq!(board.cell(row, col), Cell::Empty);
                }
            }
        }

        assert_eq!(board.side_to_move(), Player::Black);
        assert_eq!(board.disc_counts(), (2, 2));
        assert_eq!(board.rules(), Rules::Orthogonal);
        assert_eq!(board.budget_remaining(Player::Black), None);
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
    }

    #[test]
    fn test_player_to_cell() {
        assert_eq!(Player::Black.to_cell(), Cell::Black);
        assert_eq!(Player::White.to_cell(), Cell::White);
    }

    #[test]
    fn test_is_legal_initial_board() {
        let board = Board::new();

        // Under the four-direction rule Black opens with the same four
        // moves as the canonical game.
        assert!(board.is_legal(2, 3));
        assert!(board.is_legal(3, 2));
        assert!(board.is_legal(4, 5));
        assert!(board.is_legal(5, 4));

        // Occupied cells are never legal.
        assert!(!board.is_legal(3, 3));
        assert!(!board.is_legal(3, 4));

        // Empty but nothing to outflank.
        assert!(!board.is_legal(0, 0));
        assert!(!board.is_legal(7, 7));
    }

    #[test]
    fn test_is_legal_out_of_bounds() {
        let board = Board::new();
        assert!(!board.is_legal(8, 0));
        assert!(!board.is_legal(0, 8));
        assert!(!board.is_legal(10, 10));
    }

    #[test]
    fn test_legal_moves_row_major_order() {
        let board = Board::new();
        assert_eq!(board.legal_moves(), vec![(2, 3), (3, 2), (4, 5), (5, 4)]);
    }

    #[test]
    fn test_apply_move_south_scan() {
        // Scanning south from (2,3) crosses White at (3,3) and terminates
        // on Black at (4,3).
        let mut board = Board::new();

        let flipped = board.apply_move(2, 3).unwrap();
        assert_eq!(flipped, 1);

        assert_eq!(board.cell(2, 3), Cell::Black);
        assert_eq!(board.cell(3, 3), Cell::Black);
        assert_eq!(board.disc_counts(), (4, 1));
        assert_eq!(board.side_to_move(), Player::White);
    }

    #[test]
    fn test_apply_move_illegal_fails_fast() {
        let mut board = Board::new();
        let before = board.clone();

        let result = board.apply_move(0, 0);
        assert_eq!(result, Err(GameError::IllegalMove { row: 0, col: 0 }));
        assert_eq!(board, before);

        let result = board.apply_move(3, 3);
        assert_eq!(result, Err(GameError::IllegalMove { row: 3, col: 3 }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_never_auto_passes() {
        let mut board = Board::new();
        board.apply_move(2, 3).unwrap();
        // The opponent always receives the turn; the driver decides about
        // passing.
        assert_eq!(board.side_to_move(), Player::White);
    }

    #[test]
    fn test_pass_turn_toggles_side_only() {
        let mut board = Board::new();
        let snapshot = |b: &Board| {
            let mut v = Vec::new();
            for row in 0..8 {
                for col in 0..8 {
                    v.push(b.cell(row, col));
                }
            }
            v
        };
        let before = snapshot(&board);

        board.pass_turn();
        assert_eq!(board.side_to_move(), Player::White);
        assert_eq!(snapshot(&board), before);

        board.pass_turn();
        assert_eq!(board.side_to_move(), Player::Black);
    }

    #[test]
    fn test_stuck_side_is_not_terminal() {
        // Black has no move, White can play (0,2) capturing (0,1).
        let cells = grid(&[(0, 0, Cell::White), (0, 1, Cell::Black)]);
        let board = Board::from_cells(cells, Player::Black, Rules::Orthogonal);

        assert!(board.legal_moves().is_empty());
        assert!(!board.legal_moves_for(Player::White).is_empty());

        let before = board.clone();
        assert!(!board.is_terminal());
        // The check never leaves the turn altered.
        assert_eq!(board, before);
        assert_eq!(board.side_to_move(), Player::Black);
    }

    #[test]
    fn test_terminal_when_neither_side_can_move() {
        let cells = [[Cell::Black; 8]; 8];
        let board = Board::from_cells(cells, Player::Black, Rules::Orthogonal);
        assert!(board.is_terminal());

        let empty = Board::from_cells([[Cell::Empty; 8]; 8], Player::White, Rules::Orthogonal);
        assert!(empty.is_terminal());
    }

    #[test]
    fn test_diagonal_capture_requires_eight_way() {
        // (2,2) outflanks (3,3) only along the south-east diagonal.
        let cells = grid(&[(3, 3, Cell::White), (4, 4, Cell::Black)]);

        let orthogonal = Board::from_cells(cells, Player::Black, Rules::Orthogonal);
        assert!(!orthogonal.is_legal(2, 2));

        let mut eight_way = Board::from_cells(cells, Player::Black, Rules::EightWay);
        assert!(eight_way.is_legal(2, 2));

        let flipped = eight_way.apply_move(2, 2).unwrap();
        assert_eq!(flipped, 1);
        assert_eq!(eight_way.cell(3, 3), Cell::Black);
    }

    #[test]
    fn test_eight_way_initial_moves_match_orthogonal() {
        // On the opening position the diagonals add nothing.
        let board = Board::with_rules(Rules::EightWay);
        assert_eq!(board.legal_moves(), vec![(2, 3), (3, 2), (4, 5), (5, 4)]);
    }

    #[test]
    fn test_budget_spend_on_placement_only() {
        let mut board = Board::new().with_budget(3);

        let flipped = board.apply_move(2, 3).unwrap();
        assert_eq!(flipped, 1);

        // One disc placed costs one; the flip costs nothing.
        assert_eq!(board.budget_remaining(Player::Black), Some(2));
        assert_eq!(board.budget_remaining(Player::White), Some(3));
    }

    #[test]
    fn test_zero_budget_blocks_board_legal_moves() {
        let board = Board::new().with_budget(0);

        // The board itself would allow four openings, but neither side has
        // a disc left to place.
        assert!(board.legal_moves().is_empty());
        assert!(board.legal_moves_for(Player::White).is_empty());
        assert!(!board.is_legal(2, 3));
        assert!(board.is_terminal());
    }

    #[test]
    fn test_budget_single_side_exhausted_is_not_terminal() {
        let mut board = Board::new().with_budget(1);
        board.apply_move(2, 3).unwrap();

        // Black is out of discs, White is not; the game goes on.
        assert_eq!(board.budget_remaining(Player::Black), Some(0));
        assert!(board.legal_moves_for(Player::Black).is_empty());
        assert!(!board.legal_moves_for(Player::White).is_empty());
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_clone_is_isolated() {
        let board = Board::new();
        let mut copy = board.clone();

        copy.apply_move(2, 3).unwrap();

        assert_eq!(board.cell(2, 3), Cell::Empty);
        assert_eq!(board.cell(3, 3), Cell::White);
        assert_eq!(board.side_to_move(), Player::Black);
        assert_eq!(copy.disc_counts(), (4, 1));
    }

    #[test]
    fn test_clone_isolates_budget() {
        let board = Board::new().with_budget(5);
        let mut copy = board.clone();

        copy.apply_move(2, 3).unwrap();

        assert_eq!(board.budget_remaining(Player::Black), Some(5));
        assert_eq!(copy.budget_remaining(Player::Black), Some(4));
    }

    #[test]
    fn test_flip_stops_at_own_disc() {
        // Row 1: . W W B W — playing (1,0) flips exactly the first run.
        let cells = grid(&[
            (1, 1, Cell::White),
            (1, 2, Cell::White),
            (1, 3, Cell::Black),
            (1, 4, Cell::White),
        ]);
        let mut board = Board::from_cells(cells, Player::Black, Rules::Orthogonal);

        let flipped = board.apply_move(1, 0).unwrap();
        assert_eq!(flipped, 2);
        assert_eq!(board.cell(1, 1), Cell::Black);
        assert_eq!(board.cell(1, 2), Cell::Black);
        assert_eq!(board.cell(1, 4), Cell::White);
    }

    #[test]
    fn test_run_to_edge_is_not_legal() {
        // Row 0: . W W with no terminating Black disc before the edge.
        let cells = grid(&[(0, 1, Cell::White), (0, 2, Cell::White)]);
        let board = Board::from_cells(cells, Player::Black, Rules::Orthogonal);
        assert!(!board.is_legal(0, 0));
    }
}
