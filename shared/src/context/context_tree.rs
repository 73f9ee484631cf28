use std::collections::HashMap;

use log::debug;

use crate::{
    context::{context::Context, error::ContextError},
    function::function::Function,
};

/// Name of the root context, which always exists
pub const ROOT_CONTEXT: &str = "default";

/// Emitted whenever the active context changes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextTransition {
    pub old: String,
    pub new: String,
}

/// Single-parent tree of [`Context`]s with exactly one active node
pub struct ContextTree {
    contexts: HashMap<String, Context>,
    active: String,
}

impl Default for ContextTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextTree {
    /// Creates a tree holding only the root context, which starts active
    pub fn new() -> Self {
        let mut contexts = HashMap::new();
        contexts.insert(ROOT_CONTEXT.to_string(), Context::new(ROOT_CONTEXT, None));

        Self {
            contexts,
            active: ROOT_CONTEXT.to_string(),
        }
    }

    pub fn create(&mut self, name: &str, parent: &str) -> Result<&mut Context, ContextError> {
        if self.contexts.contains_key(name) {
            return Err(ContextError::AlreadyExists {
                name: name.to_string(),
            });
        }
        if !self.contexts.contains_key(parent) {
            return Err(ContextError::ParentNotFound {
                name: name.to_string(),
                parent: parent.to_string(),
            });
        }

        let context = self
            .contexts
            .entry(name.to_string())
            .or_insert_with(|| Context::new(name, Some(parent)));
        Ok(context)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.contexts.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Context> {
        self.contexts.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Context> {
        self.contexts.get_mut(name)
    }

    pub fn root(&self) -> &Context {
        match self.contexts.get(ROOT_CONTEXT) {
            Some(root) => root,
            None => panic!("root context {:?} is missing from the context tree", ROOT_CONTEXT),
        }
    }

    pub fn root_mut(&mut self) -> &mut Context {
        match self.contexts.get_mut(ROOT_CONTEXT) {
            Some(root) => root,
            None => panic!("root context {:?} is missing from the context tree", ROOT_CONTEXT),
        }
    }

    pub fn remove(&mut self, name: &str) -> Result<(), ContextError> {
        if name == ROOT_CONTEXT {
            return Err(ContextError::CannotRemoveRoot {
                name: name.to_string(),
            });
        }
        if !self.contexts.contains_key(name) {
            return Err(ContextError::NotFound {
                name: name.to_string(),
            });
        }
        if self.active == name {
            return Err(ContextError::ContextActive {
                name: name.to_string(),
            });
        }
        if self.contexts.values().any(|c| c.parent() == Some(name)) {
            return Err(ContextError::HasChildren {
                name: name.to_string(),
            });
        }

        self.contexts.remove(name);
        Ok(())
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Switches the active context.
    ///
    /// Callers outside this crate go through
    /// [`KeyBindingTable::set_active_context`](crate::KeyBindingTable::set_active_context),
    /// which also releases functions the new context does not allow.
    pub(crate) fn set_active(&mut self, name: &str) -> Result<ContextTransition, ContextError> {
        if !self.contexts.contains_key(name) {
            return Err(ContextError::NotFound {
                name: name.to_string(),
            });
        }

        let old = std::mem::replace(&mut self.active, name.to_string());
        debug!("active input context changed: {} -> {}", old, name);

        Ok(ContextTransition {
            old,
            new: name.to_string(),
        })
    }

    /// Whether `function` may trigger in context `name`: true if the context or
    /// any of its ancestors owns it
    pub fn allows(&self, name: &str, function: &Function) -> bool {
        let mut current = self.contexts.get(name);
        while let Some(context) = current {
            if context.owns(function) {
                return true;
            }
            current = context.parent().and_then(|parent| self.contexts.get(parent));
        }
        false
    }

    pub fn allows_active(&self, function: &Function) -> bool {
        self.allows(&self.active, function)
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}
