use std::cmp::Ordering;

use serde::Deserialize;

use crate::{function::function::Function, key::key_combo::KeyCombo};

/// How a binding reacts to its combo being pressed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingKind {
    /// Down while the combo is held
    State,
    /// Each press flips between Down and Up
    Toggle,
}

/// Associates a key combo with a bound key function
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyBinding {
    pub function: Function,
    pub combo: KeyCombo,
    pub kind: BindingKind,
    /// The UI gets the first chance to consume this binding's transitions
    pub can_focus: bool,
    /// OS key repeats re-fire the Down transition
    pub can_repeat: bool,
    pub priority: i32,
}

impl KeyBinding {
    pub fn new(function: Function, combo: KeyCombo) -> Self {
        Self {
            function,
            combo,
            kind: BindingKind::State,
            can_focus: false,
            can_repeat: false,
            priority: 0,
        }
    }

    pub fn kind(mut self, kind: BindingKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn toggle(self) -> Self {
        self.kind(BindingKind::Toggle)
    }

    pub fn can_focus(mut self, can_focus: bool) -> Self {
        self.can_focus = can_focus;
        self
    }

    pub fn can_repeat(mut self, can_repeat: bool) -> Self {
        self.can_repeat = can_repeat;
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Table order: larger combos first, then higher priority. The remaining
    /// keys only make the order total, and keep equal combos adjacent.
    pub fn table_order(&self, other: &KeyBinding) -> Ordering {
        other
            .combo
            .size()
            .cmp(&self.combo.size())
            .then_with(|| other.priority.cmp(&self.priority))
            .then_with(|| other.combo.value().cmp(&self.combo.value()))
            .then_with(|| self.function.cmp(&other.function))
            .then_with(|| self.kind.cmp(&other.kind))
            .then_with(|| self.can_focus.cmp(&other.can_focus))
            .then_with(|| self.can_repeat.cmp(&other.can_repeat))
    }
}
