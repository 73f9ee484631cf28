/// UI stand-in that consumes focusable transitions while it has focus
use std::{cell::RefCell, rc::Rc};

use hotwire_client::UiBoundary;
use hotwire_shared::KeyTransition;

#[derive(Default)]
struct TestUiState {
    focused: bool,
    offered: Vec<KeyTransition>,
    changed: Vec<KeyTransition>,
}

/// Cloning gives another view of the same UI, so a test can keep one while
/// the Client owns the other
#[derive(Clone, Default)]
pub struct TestUi {
    state: Rc<RefCell<TestUiState>>,
}

impl TestUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_focused(&self, focused: bool) {
        self.state.borrow_mut().focused = focused;
    }

    pub fn offered(&self) -> Vec<KeyTransition> {
        self.state.borrow().offered.clone()
    }

    pub fn changed(&self) -> Vec<KeyTransition> {
        self.state.borrow().changed.clone()
    }
}

impl UiBoundary for TestUi {
    fn offer(&mut self, transition: &KeyTransition) -> bool {
        let mut state = self.state.borrow_mut();
        state.offered.push(transition.clone());
        state.focused
    }

    fn state_changed(&mut self, transition: &KeyTransition) {
        self.state.borrow_mut().changed.push(transition.clone());
    }
}
