//! Board geometry with the per-session forbidden cell.

use rand::{Rng, RngExt};

use crate::{
    containers::Array49,
    index::PositionSemantics,
    position::Position,
};

/// Catalog of candidate forbidden cells.
///
/// Exactly one of these is chosen per session (see [`Board::random`]) and
/// marks the corresponding cell as forbidden for the whole session.
pub const FORBIDDEN_CANDIDATES: [Position; 7] = [
    Position::new(3, 3),
    Position::new(0, 0),
    Position::new(6, 0),
    Position::new(0, 6),
    Position::new(6, 6),
    Position::new(5, 1),
    Position::new(1, 5),
];

/// A single board cell: its position and whether it is forbidden.
///
/// The forbidden flag is fixed at board construction time and never changes.
/// The derived display value lives in the projection layer, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardCell {
    position: Position,
    forbidden: bool,
}

impl BoardCell {
    /// Returns the position of this cell.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns whether this cell is forbidden for the session.
    #[must_use]
    pub const fn forbidden(&self) -> bool {
        self.forbidden
    }
}

/// The 7×7 board geometry.
///
/// Holds one [`BoardCell`] per position, with exactly one cell marked
/// forbidden. The geometry is immutable once constructed.
///
/// # Examples
///
/// ```
/// use tilelace_core::{Board, Position};
///
/// let board = Board::with_forbidden(Position::new(5, 1));
/// assert_eq!(board.forbidden_position(), Position::new(5, 1));
/// assert!(board.cell(Position::new(5, 1)).forbidden());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array49<BoardCell, PositionSemantics>,
    forbidden_position: Position,
}

impl Board {
    /// Creates a board with the given forbidden cell.
    #[must_use]
    pub fn with_forbidden(forbidden_position: Position) -> Self {
        let cells = Array49::from_fn(|position| BoardCell {
            position,
            forbidden: position == forbidden_position,
        });
        Self {
            cells,
            forbidden_position,
        }
    }

    /// Creates a board with the forbidden cell chosen uniformly at random
    /// from [`FORBIDDEN_CANDIDATES`].
    #[must_use]
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let index = rng.random_range(0..FORBIDDEN_CANDIDATES.len());
        Self::with_forbidden(FORBIDDEN_CANDIDATES[index])
    }

    /// Returns the cell at the given position.
    #[must_use]
    pub fn cell(&self, position: Position) -> &BoardCell {
        &self.cells[position]
    }

    /// Returns an iterator over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &BoardCell> {
        self.cells.iter().map(|(_, cell)| cell)
    }

    /// Returns the session's forbidden position.
    #[must_use]
    pub const fn forbidden_position(&self) -> Position {
        self.forbidden_position
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn test_with_forbidden_marks_exactly_one_cell() {
        let board = Board::with_forbidden(Position::new(1, 5));
        let forbidden: Vec<_> = board.cells().filter(|cell| cell.forbidden()).collect();
        assert_eq!(forbidden.len(), 1);
        assert_eq!(forbidden[0].position(), Position::new(1, 5));
    }

    #[test]
    fn test_cells_cover_whole_board() {
        let board = Board::with_forbidden(Position::new(3, 3));
        let positions: Vec<_> = board.cells().map(|cell| cell.position()).collect();
        assert_eq!(positions.len(), 49);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[48], Position::new(6, 6));
    }

    #[test]
    fn test_random_picks_from_catalog() {
        let mut rng = Pcg64Mcg::seed_from_u64(0);
        for _ in 0..100 {
            let board = Board::random(&mut rng);
            assert!(FORBIDDEN_CANDIDATES.contains(&board.forbidden_position()));
        }
    }

    #[test]
    fn test_random_is_deterministic_for_a_seed() {
        let board_a = Board::random(&mut Pcg64Mcg::seed_from_u64(42));
        let board_b = Board::random(&mut Pcg64Mcg::seed_from_u64(42));
        assert_eq!(board_a, board_b);
    }
}
