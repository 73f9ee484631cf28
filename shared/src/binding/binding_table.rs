use std::cmp::Ordering;

use log::{debug, warn};

use crate::{
    binding::{
        error::BindingError,
        key_binding::{BindingKind, KeyBinding},
        key_transition::KeyTransition,
    },
    command::command_state::CommandState,
    context::{
        context_tree::{ContextTransition, ContextTree},
        error::ContextError,
    },
    function::function::Function,
    key::{
        key::{Key, KEY_COUNT},
        key_combo::KeyCombo,
    },
    types::PointerPosition,
};

struct BoundKey {
    binding: KeyBinding,
    down: bool,
}

/// Resolves raw key transitions into bound key function transitions.
///
/// Bindings are kept in table order (see [`KeyBinding::table_order`]). On a
/// key press the first fully pressed combo containing the key wins, every
/// binding on exactly that combo fires, and any smaller combo it shadows is
/// released.
pub struct KeyBindingTable {
    entries: Vec<BoundKey>,
    pressed: [bool; KEY_COUNT],
    contexts: ContextTree,
    pointer: PointerPosition,
}

impl Default for KeyBindingTable {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindingTable {
    pub fn new() -> Self {
        Self::with_contexts(ContextTree::new())
    }

    pub fn with_contexts(contexts: ContextTree) -> Self {
        Self {
            entries: Vec::new(),
            pressed: [false; KEY_COUNT],
            contexts,
            pointer: PointerPosition::default(),
        }
    }

    // Bindings

    pub fn add_binding(&mut self, binding: KeyBinding) -> Result<(), BindingError> {
        if self
            .entries
            .iter()
            .any(|e| e.binding.function == binding.function && e.binding.combo == binding.combo)
        {
            return Err(BindingError::Duplicate {
                function: binding.function.name().to_string(),
                combo: binding.combo,
            });
        }

        let index = self
            .entries
            .partition_point(|e| e.binding.table_order(&binding) != Ordering::Greater);
        debug!(
            "bound {} to {} at table index {}",
            binding.function, binding.combo, index
        );
        self.entries.insert(
            index,
            BoundKey {
                binding,
                down: false,
            },
        );
        Ok(())
    }

    /// Removes every binding of `function`, releasing it first if it was Down
    pub fn remove_bindings(&mut self, function: &Function) -> Vec<KeyTransition> {
        let mut transitions = Vec::new();
        for index in 0..self.entries.len() {
            if self.entries[index].binding.function == *function {
                self.force_up(index, &mut transitions);
            }
        }
        self.entries.retain(|e| e.binding.function != *function);
        transitions
    }

    pub fn bindings(&self) -> impl Iterator<Item = &KeyBinding> {
        self.entries.iter().map(|e| &e.binding)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Contexts

    pub fn contexts(&self) -> &ContextTree {
        &self.contexts
    }

    /// Create, remove and populate contexts. Switching the active context
    /// goes through [`KeyBindingTable::set_active_context`].
    pub fn contexts_mut(&mut self) -> &mut ContextTree {
        &mut self.contexts
    }

    pub fn active_context(&self) -> &str {
        self.contexts.active()
    }

    /// Switches the active context and, before returning, releases every
    /// Down function the old context allowed but the new one does not. One
    /// Up transition is produced per released function.
    pub fn set_active_context(&mut self, name: &str) -> Result<Vec<KeyTransition>, ContextError> {
        let transition = self.contexts.set_active(name)?;
        Ok(self.release_disallowed(&transition))
    }

    fn release_disallowed(&mut self, transition: &ContextTransition) -> Vec<KeyTransition> {
        let mut transitions = Vec::new();
        for index in 0..self.entries.len() {
            let entry = &self.entries[index];
            if !entry.down {
                continue;
            }
            let function = &entry.binding.function;
            if self.contexts.allows(&transition.old, function)
                && !self.contexts.allows(&transition.new, function)
            {
                self.force_up(index, &mut transitions);
            }
        }
        transitions
    }

    // Keys

    pub fn is_pressed(&self, key: Key) -> bool {
        !key.is_none() && self.pressed[key.index()]
    }

    /// Whether any binding of `function` is currently Down
    pub fn is_down(&self, function: &Function) -> bool {
        self.entries
            .iter()
            .any(|e| e.down && e.binding.function == *function)
    }

    pub fn pointer(&self) -> PointerPosition {
        self.pointer
    }

    fn is_combo_pressed(&self, combo: &KeyCombo) -> bool {
        combo.keys().all(|key| self.pressed[key.index()])
    }

    fn is_allowed(&self, index: usize) -> bool {
        self.contexts
            .allows_active(&self.entries[index].binding.function)
    }

    /// Handles a key press. Pressing an already pressed key is treated as an
    /// OS key repeat.
    pub fn key_down(&mut self, key: Key, pointer: PointerPosition) -> Vec<KeyTransition> {
        let mut transitions = Vec::new();
        self.pointer = pointer;
        if key.is_none() {
            warn!("ignoring key down for Key::None");
            return transitions;
        }

        let repeat = self.pressed[key.index()];
        self.pressed[key.index()] = true;

        let mut matched: Option<KeyCombo> = None;
        for index in 0..self.entries.len() {
            if !self.is_allowed(index) {
                continue;
            }
            let combo = self.entries[index].binding.combo;
            if !self.is_combo_pressed(&combo) {
                continue;
            }

            match matched {
                None => {
                    if !combo.contains(key) {
                        continue;
                    }
                    matched = Some(combo);
                    self.fire(index, repeat, &mut transitions);
                }
                Some(matched_combo) if combo == matched_combo => {
                    self.fire(index, repeat, &mut transitions);
                }
                Some(matched_combo) => {
                    if combo.is_sub_pattern_of(&matched_combo) {
                        self.force_up(index, &mut transitions);
                    }
                }
            }
        }

        transitions
    }

    /// Handles a key release: every Down state binding whose combo contains
    /// `key` and was fully pressed is released. Toggle bindings stay latched.
    pub fn key_up(&mut self, key: Key, pointer: PointerPosition) -> Vec<KeyTransition> {
        let mut transitions = Vec::new();
        self.pointer = pointer;
        if key.is_none() || !self.pressed[key.index()] {
            return transitions;
        }

        for index in 0..self.entries.len() {
            let entry = &self.entries[index];
            if !entry.down || entry.binding.kind == BindingKind::Toggle {
                continue;
            }
            if !self.is_allowed(index) {
                continue;
            }
            let combo = entry.binding.combo;
            if combo.contains(key) && self.is_combo_pressed(&combo) {
                self.force_up(index, &mut transitions);
            }
        }

        self.pressed[key.index()] = false;
        transitions
    }

    /// Releases every Down binding and forgets all pressed keys, for when the
    /// window loses focus and key releases will not be delivered
    pub fn release_all(&mut self) -> Vec<KeyTransition> {
        let mut transitions = Vec::new();
        for index in 0..self.entries.len() {
            self.force_up(index, &mut transitions);
        }
        self.pressed = [false; KEY_COUNT];
        transitions
    }

    /// Whether a binding other than `index` holds the same function Down
    fn held_elsewhere(&self, index: usize) -> bool {
        let function = &self.entries[index].binding.function;
        self.entries
            .iter()
            .enumerate()
            .any(|(other, e)| other != index && e.down && e.binding.function == *function)
    }

    fn fire(&mut self, index: usize, repeat: bool, transitions: &mut Vec<KeyTransition>) {
        let pointer = self.pointer;
        let held = self.held_elsewhere(index);
        let entry = &mut self.entries[index];
        let state = match entry.binding.kind {
            BindingKind::State => {
                if !entry.down {
                    entry.down = true;
                    if held {
                        return;
                    }
                    CommandState::Down
                } else if repeat && entry.binding.can_repeat {
                    CommandState::Down
                } else {
                    return;
                }
            }
            BindingKind::Toggle => {
                entry.down = !entry.down;
                if entry.down {
                    CommandState::Down
                } else {
                    CommandState::Up
                }
            }
        };

        transitions.push(KeyTransition {
            function: entry.binding.function.clone(),
            state,
            pointer,
            can_focus: entry.binding.can_focus,
            repeat,
        });
    }

    /// Releases binding `index`. The function only goes Up once no other
    /// binding holds it Down.
    fn force_up(&mut self, index: usize, transitions: &mut Vec<KeyTransition>) {
        let pointer = self.pointer;
        let held = self.held_elsewhere(index);
        let entry = &mut self.entries[index];
        if !entry.down {
            return;
        }
        entry.down = false;
        if held {
            return;
        }

        let function = &entry.binding.function;
        if transitions
            .iter()
            .any(|t| t.function == *function && t.state == CommandState::Up)
        {
            return;
        }
        transitions.push(KeyTransition {
            function: function.clone(),
            state: CommandState::Up,
            pointer,
            can_focus: entry.binding.can_focus,
            repeat: false,
        });
    }
}
