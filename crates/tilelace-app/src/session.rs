use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;
use tilelace_core::Board;
use tilelace_game::{Game, catalog};

/// Builds a fresh session from a seed: draws the forbidden cell and parks the
/// standard piece set in the staging spot.
///
/// The same seed always yields the same board.
#[must_use]
pub fn new_session(seed: u64) -> Game {
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    let board = Board::random(&mut rng);
    log::info!(
        "new session: seed={seed}, forbidden cell at {}",
        board.forbidden_position()
    );
    Game::new(board, catalog::standard_pieces())
}
