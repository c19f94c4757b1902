//! Polyomino pieces: identity, shape, movement, and rotation.

use std::fmt::{self, Display};

use tilelace_core::Position;
use tinyvec::ArrayVec;

/// Maximum number of cells a piece shape may have.
pub const MAX_SHAPE_CELLS: usize = 8;

/// Stable identity of a piece.
///
/// Identity does not change when a piece moves or rotates; it is what the
/// committed set and the projection use for membership and deduplication.
/// Two distinct pieces with identical shape data still have distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(u8);

impl PieceId {
    /// Creates a new piece id.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Returns the numeric value of this id.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "piece #{}", self.0)
    }
}

/// A quarter-turn rotation applied to a piece shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rotation {
    /// No rotation.
    #[default]
    R0,
    /// 90° counter-clockwise.
    R90,
    /// 180°.
    R180,
    /// 270° counter-clockwise.
    R270,
}

impl Rotation {
    /// Array containing all rotations in quarter-turn order.
    pub const ALL: [Self; 4] = [Self::R0, Self::R90, Self::R180, Self::R270];

    /// Returns the rotation advanced by one quarter turn.
    #[must_use]
    pub const fn rotated(self) -> Self {
        match self {
            Self::R0 => Self::R90,
            Self::R90 => Self::R180,
            Self::R180 => Self::R270,
            Self::R270 => Self::R0,
        }
    }

    /// Applies this rotation to a shape offset.
    ///
    /// One quarter turn maps (x, y) to (-y, x).
    #[must_use]
    pub const fn apply(self, offset: (i8, i8)) -> (i16, i16) {
        let (x, y) = (offset.0 as i16, offset.1 as i16);
        match self {
            Self::R0 => (x, y),
            Self::R90 => (-y, x),
            Self::R180 => (-x, -y),
            Self::R270 => (y, -x),
        }
    }
}

/// An untranslated polyomino shape plus the marker it contributes.
///
/// `cells` are offsets from the piece origin; `marker` is the positive value
/// a covered board cell takes in the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceShape {
    marker: u8,
    cells: &'static [(i8, i8)],
}

impl PieceShape {
    /// Creates a new shape.
    #[must_use]
    pub const fn new(marker: u8, cells: &'static [(i8, i8)]) -> Self {
        assert!(cells.len() <= MAX_SHAPE_CELLS);
        Self { marker, cells }
    }

    /// Returns the marker value of this shape.
    #[must_use]
    pub const fn marker(&self) -> u8 {
        self.marker
    }

    /// Returns the untranslated cell offsets of this shape.
    #[must_use]
    pub const fn cells(&self) -> &'static [(i8, i8)] {
        self.cells
    }
}

/// A piece placed somewhere relative to the board.
///
/// The origin uses signed coordinates: a piece may sit partially or wholly
/// outside the board (freshly selected pieces start in a staging spot below
/// it). Cells outside the board never contribute to the projection.
///
/// Movement and rotation are unconditional here; the rule that a committed
/// piece cannot move is enforced by [`Game`](crate::Game), not by the piece.
///
/// # Examples
///
/// ```
/// use tilelace_core::Position;
/// use tilelace_game::{Piece, PieceId, PieceShape};
///
/// const DOMINO: PieceShape = PieceShape::new(3, &[(0, 0), (0, 1)]);
///
/// let piece = Piece::new(PieceId::new(1), DOMINO, (0, 0));
/// assert_eq!(piece.value_at(Position::new(0, 0)), Some(3));
/// assert_eq!(piece.value_at(Position::new(0, 1)), Some(3));
/// assert_eq!(piece.value_at(Position::new(1, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    shape: PieceShape,
    origin: (i16, i16),
    rotation: Rotation,
}

impl Piece {
    /// Creates a piece with the given identity, shape, and origin, unrotated.
    #[must_use]
    pub const fn new(id: PieceId, shape: PieceShape, origin: (i16, i16)) -> Self {
        Self {
            id,
            shape,
            origin,
            rotation: Rotation::R0,
        }
    }

    /// Returns the stable identity of this piece.
    #[must_use]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    /// Returns the shape of this piece.
    #[must_use]
    pub const fn shape(&self) -> PieceShape {
        self.shape
    }

    /// Returns the current origin of this piece.
    #[must_use]
    pub const fn origin(&self) -> (i16, i16) {
        self.origin
    }

    /// Returns the current rotation of this piece.
    #[must_use]
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Returns the marker this piece contributes at the given board position.
    ///
    /// `Some(marker)` iff the rotated, translated shape covers the position.
    /// Positions the piece does not cover, including every position while the
    /// covering cell lies outside the board, yield `None`.
    #[must_use]
    pub fn value_at(&self, position: Position) -> Option<u8> {
        let target = (i16::from(position.x()), i16::from(position.y()));
        for &offset in self.shape.cells {
            let (dx, dy) = self.rotation.apply(offset);
            if (self.origin.0 + dx, self.origin.1 + dy) == target {
                return Some(self.shape.marker);
            }
        }
        None
    }

    /// Returns the on-board positions currently covered by this piece.
    ///
    /// Cells outside the board are skipped, so the result may be shorter than
    /// the shape (or empty for a piece wholly off the board).
    #[must_use]
    pub fn covered_positions(&self) -> ArrayVec<[Position; MAX_SHAPE_CELLS]> {
        let mut positions = ArrayVec::new();
        for &offset in self.shape.cells {
            let (dx, dy) = self.rotation.apply(offset);
            if let Some(pos) = Position::from_signed(self.origin.0 + dx, self.origin.1 + dy) {
                positions.push(pos);
            }
        }
        positions
    }

    /// Moves the piece one column to the left.
    pub fn move_left(&mut self) {
        self.origin.0 -= 1;
    }

    /// Moves the piece one column to the right.
    pub fn move_right(&mut self) {
        self.origin.0 += 1;
    }

    /// Moves the piece one row up.
    pub fn move_up(&mut self) {
        self.origin.1 -= 1;
    }

    /// Moves the piece one row down.
    pub fn move_down(&mut self) {
        self.origin.1 += 1;
    }

    /// Rotates the piece one quarter turn.
    pub fn rotate(&mut self) {
        self.rotation = self.rotation.rotated();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORNER: PieceShape = PieceShape::new(4, &[(0, 0), (1, 0), (0, 1)]);

    #[test]
    fn test_value_at_tracks_movement() {
        let mut piece = Piece::new(PieceId::new(1), CORNER, (2, 2));
        assert_eq!(piece.value_at(Position::new(2, 2)), Some(4));
        assert_eq!(piece.value_at(Position::new(3, 2)), Some(4));
        assert_eq!(piece.value_at(Position::new(2, 3)), Some(4));
        assert_eq!(piece.value_at(Position::new(3, 3)), None);

        piece.move_right();
        piece.move_down();
        assert_eq!(piece.value_at(Position::new(2, 2)), None);
        assert_eq!(piece.value_at(Position::new(3, 3)), Some(4));
    }

    #[test]
    fn test_rotation_cycles_back_after_four_turns() {
        let mut piece = Piece::new(PieceId::new(1), CORNER, (3, 3));
        let initial = piece.clone();
        for _ in 0..4 {
            piece.rotate();
        }
        assert_eq!(piece, initial);
    }

    #[test]
    fn test_rotation_pivots_around_origin() {
        let mut piece = Piece::new(PieceId::new(1), CORNER, (3, 3));
        piece.rotate();
        // (1, 0) -> (0, 1), (0, 1) -> (-1, 0)
        assert_eq!(piece.value_at(Position::new(3, 3)), Some(4));
        assert_eq!(piece.value_at(Position::new(3, 4)), Some(4));
        assert_eq!(piece.value_at(Position::new(2, 3)), Some(4));
        assert_eq!(piece.value_at(Position::new(4, 3)), None);
    }

    #[test]
    fn test_covered_positions_skips_off_board_cells() {
        let piece = Piece::new(PieceId::new(1), CORNER, (6, 6));
        // (6, 6) is on the board; (7, 6) and (6, 7) are not.
        let covered = piece.covered_positions();
        assert_eq!(covered.as_slice(), &[Position::new(6, 6)]);

        let parked = Piece::new(PieceId::new(2), CORNER, (2, 7));
        assert!(parked.covered_positions().is_empty());
    }

    #[test]
    fn test_identity_is_stable_under_movement() {
        let mut piece = Piece::new(PieceId::new(9), CORNER, (0, 0));
        let id = piece.id();
        piece.move_down();
        piece.rotate();
        assert_eq!(piece.id(), id);
    }
}
