//! Core data structures for the Tilelace puzzle.
//!
//! This crate provides the board-shaped primitives shared by the game rules
//! and the application shell:
//!
//! 1. **Core types**
//!    - [`position`]: board position (x, y) coordinate types for the 7×7 grid
//!    - [`board`]: board geometry with the per-session forbidden cell
//!
//! 2. **Index semantics** - Define how values map to indices in containers
//!    - [`index`]: [`Index49`] and semantics types such as [`PositionSemantics`]
//!
//! 3. **Generic containers** - Containers parameterized by semantics
//!    - [`containers`]: [`Array49`], a 49-element array indexed by a
//!      semantics value type
//!
//! [`Index49`]: index::Index49
//! [`PositionSemantics`]: index::PositionSemantics
//! [`Array49`]: containers::Array49
//!
//! # Examples
//!
//! ```
//! use tilelace_core::{Board, Position};
//!
//! // Build a board with the forbidden cell at (3, 3)
//! let board = Board::with_forbidden(Position::new(3, 3));
//!
//! assert!(board.cell(Position::new(3, 3)).forbidden());
//! assert!(!board.cell(Position::new(0, 0)).forbidden());
//! ```

pub mod board;
pub mod containers;
pub mod index;
pub mod position;

// Re-export commonly used types
pub use self::{
    board::{Board, BoardCell, FORBIDDEN_CANDIDATES},
    position::{BOARD_HEIGHT, BOARD_WIDTH, Position},
};
