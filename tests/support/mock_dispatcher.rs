use emacs_mini::traits::ActionDispatcher;
use emacs_mini::types::EditorAction;

/// Records every action the engine requests, in order.
#[derive(Default, Debug, Clone)]
pub struct MockDispatcher {
    pub dispatched: Vec<EditorAction>,
}

impl MockDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<EditorAction> {
        self.dispatched.last().copied()
    }
}

impl ActionDispatcher for MockDispatcher {
    fn dispatch(&mut self, action: EditorAction) {
        self.dispatched.push(action);
    }
}
