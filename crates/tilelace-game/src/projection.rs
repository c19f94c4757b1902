//! Derived board view: occupancy values and conflict detection.
//!
//! [`project`] folds the committed pieces and the piece being positioned into
//! a fresh [`FrameGrid`], one pass per settled input state. Each frame carries
//! a single signed value:
//!
//! - `0` — empty
//! - `1..` — covered by exactly one uncommitted piece (the piece's marker)
//! - `11..` — covered by exactly one committed piece (marker plus
//!   [`COMMITTED_OFFSET`])
//! - [`CONFLICT`] — covered by two or more pieces, or covering the forbidden
//!   cell

use tilelace_core::{Board, Position, containers::Array49, index::PositionSemantics};

use crate::piece::Piece;

/// Sentinel value marking a cell as unusable.
pub const CONFLICT: i16 = -2;

/// Offset added to the marker of a committed piece.
///
/// Purely a rendering distinction between "covered by a committed piece" and
/// "covered by the piece still being positioned"; it carries no conflict
/// semantics.
pub const COMMITTED_OFFSET: i16 = 10;

/// One derived board cell: geometry plus the projected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    position: Position,
    forbidden: bool,
    value: i16,
}

impl Frame {
    /// Returns the position of this frame.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns whether the underlying board cell is forbidden.
    #[must_use]
    pub const fn forbidden(&self) -> bool {
        self.forbidden
    }

    /// Returns the projected value of this frame.
    #[must_use]
    pub const fn value(&self) -> i16 {
        self.value
    }

    /// Returns whether this frame holds the conflict sentinel.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        self.value == CONFLICT
    }
}

/// The derived grid produced by one projection pass.
///
/// Congruent to the board geometry; built whole by [`project`] and never
/// patched in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameGrid {
    frames: Array49<Frame, PositionSemantics>,
}

impl FrameGrid {
    /// Returns the frame at the given position.
    #[must_use]
    pub fn frame(&self, position: Position) -> &Frame {
        &self.frames[position]
    }

    /// Returns an iterator over all frames in row-major order.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter().map(|(_, frame)| frame)
    }

    /// Returns whether the grid is free of conflicts.
    ///
    /// This is the gate for committing the current piece and for cycling the
    /// selection.
    #[must_use]
    pub fn is_savable(&self) -> bool {
        self.frames().all(|frame| !frame.is_conflict())
    }
}

impl std::ops::Index<Position> for FrameGrid {
    type Output = Frame;

    fn index(&self, position: Position) -> &Frame {
        &self.frames[position]
    }
}

/// Projects the committed pieces and the current piece onto the board.
///
/// The evaluation set is the committed pieces in commit order, with `current`
/// appended iff its id is not already among them (a piece re-selected after
/// commit counts once). For every board cell, the first covering piece claims
/// it with its marker (plus [`COMMITTED_OFFSET`] for a committed piece); any
/// further covering piece turns the cell into [`CONFLICT`], and once set the
/// conflict is never un-set by a later piece. A non-zero value on the
/// forbidden cell is always overridden to [`CONFLICT`], even with a single
/// covering piece; a forbidden cell nothing covers stays `0`.
///
/// Pure function: the board and pieces are not mutated, and identical inputs
/// produce identical grids.
///
/// # Examples
///
/// ```
/// use tilelace_core::{Board, Position};
/// use tilelace_game::{CONFLICT, Piece, PieceId, PieceShape, project};
///
/// const DOMINO: PieceShape = PieceShape::new(3, &[(0, 0), (0, 1)]);
///
/// let board = Board::with_forbidden(Position::new(5, 4));
/// let piece = Piece::new(PieceId::new(1), DOMINO, (0, 0));
///
/// let grid = project(&board, &[], Some(&piece));
/// assert_eq!(grid[Position::new(0, 0)].value(), 3);
/// assert_eq!(grid[Position::new(0, 1)].value(), 3);
/// assert_eq!(grid[Position::new(1, 0)].value(), 0);
/// assert!(grid.is_savable());
/// ```
#[must_use]
pub fn project(board: &Board, committed: &[&Piece], current: Option<&Piece>) -> FrameGrid {
    let mut evaluation: Vec<(&Piece, bool)> =
        committed.iter().map(|&piece| (piece, true)).collect();
    if let Some(piece) = current
        && !committed.iter().any(|other| other.id() == piece.id())
    {
        evaluation.push((piece, false));
    }

    let frames = Array49::from_fn(|position| {
        let cell = board.cell(position);
        let mut value = 0_i16;
        for &(piece, is_committed) in &evaluation {
            let Some(marker) = piece.value_at(position) else {
                continue;
            };
            if marker == 0 {
                continue;
            }
            if value != 0 {
                // Already claimed (or already conflicting): the cell is lost.
                value = CONFLICT;
                continue;
            }
            value = i16::from(marker) + if is_committed { COMMITTED_OFFSET } else { 0 };
        }
        if value != 0 && cell.forbidden() {
            value = CONFLICT;
        }
        Frame {
            position,
            forbidden: cell.forbidden(),
            value,
        }
    });
    FrameGrid { frames }
}
