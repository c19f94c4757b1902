use tilelace_game::CommandBlock;

use crate::{
    action::{Action, ActionRequestQueue},
    state::AppState,
};

pub fn handle_all(app_state: &mut AppState, action_queue: &mut ActionRequestQueue) {
    for action in action_queue.take_all() {
        handle(app_state, action);
    }
}

pub fn handle(app_state: &mut AppState, action: Action) {
    let mut access = app_state.access();
    let result: Result<(), CommandBlock> = match action {
        Action::MovePiece(direction) => access.as_mut().move_piece(direction),
        Action::RotatePiece => access.as_mut().rotate_piece(),
        Action::SelectNext => access.as_mut().select_next(),
        Action::SelectPrevious => access.as_mut().select_previous(),
        Action::CommitPiece => access.as_mut().commit_current(),
    };

    // Rejected commands are policy no-ops, not failures.
    if let Err(block) = result {
        log::debug!("{action:?} ignored: {block}");
    }
}

#[cfg(test)]
mod tests {
    use tilelace_core::{Board, Position};
    use tilelace_game::{Game, MoveDirection, Piece, PieceId, PieceShape};

    use super::{handle, handle_all};
    use crate::{
        action::{Action, ActionRequestQueue},
        state::AppState,
    };

    const DOMINO: PieceShape = PieceShape::new(1, &[(0, 0), (1, 0)]);
    const SINGLE: PieceShape = PieceShape::new(2, &[(0, 0)]);

    fn app_state() -> AppState {
        let board = Board::with_forbidden(Position::new(6, 6));
        let pieces = vec![
            Piece::new(PieceId::new(1), DOMINO, (0, 0)),
            Piece::new(PieceId::new(2), SINGLE, (0, 3)),
        ];
        AppState::new(Game::new(board, pieces))
    }

    #[test]
    fn actions_drive_the_session() {
        let mut app_state = app_state();
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::MovePiece(MoveDirection::Down));
        queue.request(Action::MovePiece(MoveDirection::Right));
        queue.request(Action::CommitPiece);

        handle_all(&mut app_state, &mut queue);
        app_state.settle_now();

        assert!(app_state.game().is_committed(PieceId::new(1)));
        assert_eq!(app_state.frames()[Position::new(1, 1)].value(), 11);
        assert_eq!(app_state.frames()[Position::new(2, 1)].value(), 11);
    }

    #[test]
    fn blocked_actions_leave_the_session_unchanged() {
        let mut app_state = app_state();
        handle(&mut app_state, Action::CommitPiece);
        assert!(app_state.game().is_committed(PieceId::new(1)));

        // Moving the committed piece is silently ignored.
        let before = app_state.game().current_piece().unwrap().clone();
        handle(&mut app_state, Action::MovePiece(MoveDirection::Left));
        handle(&mut app_state, Action::RotatePiece);
        app_state.settle_now();
        assert_eq!(app_state.game().current_piece().unwrap(), &before);
    }

    #[test]
    fn selection_actions_cycle_through_pieces() {
        let mut app_state = app_state();
        handle(&mut app_state, Action::SelectNext);
        assert_eq!(
            app_state.game().current_piece().unwrap().id(),
            PieceId::new(2)
        );
        handle(&mut app_state, Action::SelectPrevious);
        assert_eq!(
            app_state.game().current_piece().unwrap().id(),
            PieceId::new(1)
        );
    }
}
