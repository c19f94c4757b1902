//! The standard piece set.

use crate::piece::{Piece, PieceId, PieceShape};

/// Staging spot below the visible board where freshly created pieces wait.
///
/// Pieces parked here cover no board cell, so a new session projects an empty
/// board until the player moves the first piece up onto it.
pub const STAGING_ORIGIN: (i16, i16) = (2, 7);

const O4: PieceShape = PieceShape::new(1, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
const I4: PieceShape = PieceShape::new(2, &[(0, 0), (1, 0), (2, 0), (3, 0)]);
const L5: PieceShape = PieceShape::new(3, &[(0, 0), (0, 1), (0, 2), (0, 3), (1, 3)]);
const T5: PieceShape = PieceShape::new(4, &[(0, 0), (1, 0), (2, 0), (1, 1), (1, 2)]);
const Z5: PieceShape = PieceShape::new(5, &[(0, 0), (1, 0), (1, 1), (1, 2), (2, 2)]);
const P5: PieceShape = PieceShape::new(6, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
const U5: PieceShape = PieceShape::new(7, &[(0, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
const V5: PieceShape = PieceShape::new(8, &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]);
const W5: PieceShape = PieceShape::new(9, &[(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)]);
const F5: PieceShape = PieceShape::new(10, &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)]);

const SHAPES: [PieceShape; 10] = [O4, I4, L5, T5, Z5, P5, U5, V5, W5, F5];

/// Builds the standard piece set: two tetrominoes and eight pentominoes,
/// 48 cells in total, each parked at [`STAGING_ORIGIN`].
///
/// Piece ids and markers are assigned 1-10 in catalog order.
#[must_use]
pub fn standard_pieces() -> Vec<Piece> {
    SHAPES
        .into_iter()
        .enumerate()
        .map(|(i, shape)| {
            #[expect(clippy::cast_possible_truncation)]
            let id = PieceId::new(i as u8 + 1);
            Piece::new(id, shape, STAGING_ORIGIN)
        })
        .collect()
}
