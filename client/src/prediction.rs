use std::{cell::Cell, rc::Rc};

/// Shared view of whether the Client is currently replaying a command for
/// prediction. Cloning gives another handle to the same flag.
#[derive(Clone, Default)]
pub struct PredictionFlag {
    predicting: Rc<Cell<bool>>,
}

impl PredictionFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_predicting(&self) -> bool {
        self.predicting.get()
    }

    /// Sets the flag until the returned guard is dropped, which also happens
    /// while unwinding out of a panicking handler
    pub(crate) fn enter(&self) -> PredictionGuard {
        let previous = self.predicting.replace(true);
        PredictionGuard {
            predicting: self.predicting.clone(),
            previous,
        }
    }
}

/// Restores the previous predicting value when dropped
pub struct PredictionGuard {
    predicting: Rc<Cell<bool>>,
    previous: bool,
}

impl Drop for PredictionGuard {
    fn drop(&mut self) {
        self.predicting.set(self.previous);
    }
}
