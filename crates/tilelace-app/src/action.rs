use std::mem;

use tilelace_game::MoveDirection;

/// The device-independent command surface.
///
/// Whatever decodes player input (keyboard, script, test) reduces it to one
/// of these requests; the handler applies them in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MovePiece(MoveDirection),
    RotatePiece,
    SelectNext,
    SelectPrevious,
    CommitPiece,
}

#[derive(Debug, Default)]
pub struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionRequestQueue};

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::RotatePiece);
        queue.request(Action::CommitPiece);

        let drained = queue.take_all();
        assert_eq!(drained.len(), 2);
        assert!(matches!(drained[0], Action::RotatePiece));
        assert!(matches!(drained[1], Action::CommitPiece));

        let drained_again = queue.take_all();
        assert!(drained_again.is_empty());
    }
}
