use std::time::Instant;

use tilelace_game::{FrameGrid, Game};

use crate::scheduler::ProjectionScheduler;

// AppState owns the session plus the projection scheduler. Consumers read the
// published frame grid; mutation goes through `access()` so every change path
// marks the projection pending.
#[derive(Debug)]
pub struct AppState {
    game: Game,
    scheduler: ProjectionScheduler,
}

impl AppState {
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            game,
            scheduler: ProjectionScheduler::new(),
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The latest published projection (for rendering).
    #[must_use]
    pub fn frames(&self) -> &FrameGrid {
        self.game.frames()
    }

    pub fn access(&mut self) -> AppStateAccess<'_> {
        AppStateAccess { app_state: self }
    }

    /// Settles the projection if the change burst has gone quiet.
    ///
    /// Returns whether a projection pass ran.
    pub fn settle_if_quiescent(&mut self, now: Instant) -> bool {
        if self.scheduler.poll(now) {
            self.game.reproject();
            true
        } else {
            false
        }
    }

    /// Settles the projection immediately, bypassing the quiescence window.
    pub fn settle_now(&mut self) {
        self.game.reproject();
        self.scheduler.clear();
    }
}

#[derive(Debug)]
pub struct AppStateAccess<'a> {
    app_state: &'a mut AppState,
}

impl AppStateAccess<'_> {
    #[must_use]
    pub fn as_ref(&self) -> &Game {
        &self.app_state.game
    }

    pub fn as_mut(&mut self) -> &mut Game {
        self.app_state.scheduler.note_change(Instant::now());
        &mut self.app_state.game
    }
}
