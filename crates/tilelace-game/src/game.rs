//! Game session state and command gates.

use tilelace_core::Board;

use crate::{
    piece::{Piece, PieceId},
    projection::{FrameGrid, project},
};

/// Direction of a single-cell piece movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column to the left.
    Left,
    /// One column to the right.
    Right,
}

/// Why a command was rejected.
///
/// Rejections are policy, not failures: callers implementing the
/// silently-ignored command policy log and drop them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum CommandBlock {
    /// The puzzle is already solved; every command is a no-op.
    #[display("puzzle is already solved")]
    Solved,
    /// There is no piece to act on.
    #[display("no piece is selected")]
    NoCurrentPiece,
    /// The current piece is committed and cannot move.
    #[display("piece is committed and cannot move")]
    PieceCommitted,
    /// The board has a conflict that must be resolved first.
    #[display("board has conflicts")]
    BoardConflicted,
    /// The current piece is already committed.
    #[display("piece is already committed")]
    AlreadyCommitted,
}

/// A Tilelace game session.
///
/// Owns the board geometry, the pieces, the committed-id list (in commit
/// order), the current-piece selection, and the latest published
/// [`FrameGrid`]. All rule gates live here:
///
/// - movement and rotation require the current piece to be uncommitted;
/// - selection cycling and committing require a conflict-free board;
/// - everything is a no-op once the puzzle is solved.
///
/// Movement marks the projection dirty without recomputing, so rapid-fire
/// moves can be coalesced by the caller; [`reproject`](Self::reproject)
/// settles the grid. Selection and commit changes settle eagerly, and gates
/// that depend on savability always settle before deciding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    pieces: Vec<Piece>,
    committed: Vec<PieceId>,
    current: Option<usize>,
    frames: FrameGrid,
    projection_dirty: bool,
}

impl Game {
    /// Creates a session over the given board and pieces.
    ///
    /// The first piece (if any) starts selected; nothing is committed. The
    /// initial projection is computed immediately.
    #[must_use]
    pub fn new(board: Board, pieces: Vec<Piece>) -> Self {
        let current = if pieces.is_empty() { None } else { Some(0) };
        let frames = project(&board, &[], current.map(|index| &pieces[index]));
        Self {
            board,
            pieces,
            committed: Vec::new(),
            current,
            frames,
            projection_dirty: false,
        }
    }

    /// Returns the board geometry.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns all pieces in catalog order.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Returns the currently selected piece, if any.
    #[must_use]
    pub fn current_piece(&self) -> Option<&Piece> {
        self.current.map(|index| &self.pieces[index])
    }

    /// Returns the committed piece ids in commit order.
    #[must_use]
    pub fn committed_ids(&self) -> &[PieceId] {
        &self.committed
    }

    /// Returns whether the given piece is committed.
    #[must_use]
    pub fn is_committed(&self, id: PieceId) -> bool {
        self.committed.contains(&id)
    }

    /// Returns the latest published projection.
    ///
    /// The grid may lag behind piece movement until [`reproject`] runs; it is
    /// never partially updated.
    ///
    /// [`reproject`]: Self::reproject
    #[must_use]
    pub fn frames(&self) -> &FrameGrid {
        &self.frames
    }

    /// Returns whether a projection pass is pending.
    #[must_use]
    pub fn has_pending_projection(&self) -> bool {
        self.projection_dirty
    }

    /// Recomputes and publishes the projection if anything changed.
    ///
    /// The new grid is built completely before it replaces the published one,
    /// so a consumer never observes a partial scan.
    pub fn reproject(&mut self) {
        if !self.projection_dirty {
            return;
        }
        let committed: Vec<&Piece> = self
            .committed
            .iter()
            .filter_map(|&id| self.pieces.iter().find(|piece| piece.id() == id))
            .collect();
        let current = self.current.map(|index| &self.pieces[index]);
        let frames = project(&self.board, &committed, current);
        self.frames = frames;
        self.projection_dirty = false;
    }

    /// Returns whether the published projection is free of conflicts.
    #[must_use]
    pub fn is_savable(&self) -> bool {
        self.frames.is_savable()
    }

    /// Returns whether the puzzle is solved: every piece committed and the
    /// board free of conflicts.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.pieces.is_empty()
            && self.committed.len() == self.pieces.len()
            && self.frames.is_savable()
    }

    /// Returns whether the current piece may be moved or rotated.
    ///
    /// # Errors
    ///
    /// Returns the same [`CommandBlock`] the movement commands would.
    pub fn move_capability(&self) -> Result<(), CommandBlock> {
        self.movable_current().map(|_| ())
    }

    /// Moves the current piece one cell in the given direction.
    ///
    /// Marks the projection dirty without recomputing, so a burst of moves
    /// costs one scan once settled.
    ///
    /// # Errors
    ///
    /// Returns [`CommandBlock::Solved`], [`CommandBlock::NoCurrentPiece`], or
    /// [`CommandBlock::PieceCommitted`]; the piece's coverage is unchanged in
    /// every rejected case.
    pub fn move_piece(&mut self, direction: MoveDirection) -> Result<(), CommandBlock> {
        let index = self.movable_current()?;
        let piece = &mut self.pieces[index];
        match direction {
            MoveDirection::Up => piece.move_up(),
            MoveDirection::Down => piece.move_down(),
            MoveDirection::Left => piece.move_left(),
            MoveDirection::Right => piece.move_right(),
        }
        self.projection_dirty = true;
        Ok(())
    }

    /// Rotates the current piece one quarter turn.
    ///
    /// # Errors
    ///
    /// Same gates as [`move_piece`](Self::move_piece).
    pub fn rotate_piece(&mut self) -> Result<(), CommandBlock> {
        let index = self.movable_current()?;
        self.pieces[index].rotate();
        self.projection_dirty = true;
        Ok(())
    }

    /// Selects the next piece in catalog order, wrapping around.
    ///
    /// # Errors
    ///
    /// Returns [`CommandBlock::BoardConflicted`] while the settled projection
    /// has a conflict: the player must resolve conflicts before cycling away.
    /// A committed current piece does not block cycling on a clean board.
    /// Also returns [`CommandBlock::Solved`] or
    /// [`CommandBlock::NoCurrentPiece`].
    pub fn select_next(&mut self) -> Result<(), CommandBlock> {
        self.cycle_selection(1)
    }

    /// Selects the previous piece in catalog order, wrapping around.
    ///
    /// # Errors
    ///
    /// Same gates as [`select_next`](Self::select_next).
    pub fn select_previous(&mut self) -> Result<(), CommandBlock> {
        self.cycle_selection(-1)
    }

    /// Commits the current piece, locking its position for the session.
    ///
    /// # Errors
    ///
    /// Returns [`CommandBlock::BoardConflicted`] while the settled projection
    /// has a conflict, [`CommandBlock::AlreadyCommitted`] for a re-selected
    /// committed piece, and [`CommandBlock::Solved`] or
    /// [`CommandBlock::NoCurrentPiece`] as for every command.
    pub fn commit_current(&mut self) -> Result<(), CommandBlock> {
        self.reproject();
        if self.is_solved() {
            return Err(CommandBlock::Solved);
        }
        let index = self.current.ok_or(CommandBlock::NoCurrentPiece)?;
        let id = self.pieces[index].id();
        if self.committed.contains(&id) {
            return Err(CommandBlock::AlreadyCommitted);
        }
        if !self.frames.is_savable() {
            return Err(CommandBlock::BoardConflicted);
        }
        self.committed.push(id);
        self.projection_dirty = true;
        self.reproject();
        Ok(())
    }

    fn movable_current(&self) -> Result<usize, CommandBlock> {
        if self.is_solved() {
            return Err(CommandBlock::Solved);
        }
        let index = self.current.ok_or(CommandBlock::NoCurrentPiece)?;
        if self.committed.contains(&self.pieces[index].id()) {
            return Err(CommandBlock::PieceCommitted);
        }
        Ok(index)
    }

    fn cycle_selection(&mut self, step: isize) -> Result<(), CommandBlock> {
        self.reproject();
        if self.is_solved() {
            return Err(CommandBlock::Solved);
        }
        let index = self.current.ok_or(CommandBlock::NoCurrentPiece)?;
        if !self.frames.is_savable() {
            return Err(CommandBlock::BoardConflicted);
        }
        let len = self.pieces.len();
        let next = (index + len).wrapping_add_signed(step) % len;
        self.current = Some(next);
        self.projection_dirty = true;
        self.reproject();
        Ok(())
    }
}
