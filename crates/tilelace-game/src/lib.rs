//! Game rules for the Tilelace puzzle.
//!
//! This crate builds the playable game on top of the board primitives from
//! `tilelace-core`:
//!
//! - [`piece`]: polyomino pieces with stable identity, movement, and rotation
//! - [`catalog`]: the standard piece set
//! - [`projection`]: the derived board view with conflict detection
//! - [`game`]: the [`Game`] session enforcing movement, selection, and commit
//!   rules
//!
//! # Examples
//!
//! ```
//! use tilelace_core::{Board, Position};
//! use tilelace_game::{Game, MoveDirection, catalog};
//!
//! let board = Board::with_forbidden(Position::new(3, 3));
//! let mut game = Game::new(board, catalog::standard_pieces());
//!
//! // Move the current piece up onto the board and inspect the projection.
//! game.move_piece(MoveDirection::Up).unwrap();
//! game.reproject();
//! assert!(game.is_savable());
//! ```

pub mod catalog;
pub mod game;
pub mod piece;
pub mod projection;

// Re-export commonly used types
pub use self::{
    game::{CommandBlock, Game, MoveDirection},
    piece::{Piece, PieceId, PieceShape, Rotation},
    projection::{COMMITTED_OFFSET, CONFLICT, Frame, FrameGrid, project},
};
