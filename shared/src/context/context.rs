use std::collections::HashSet;

use crate::function::function::Function;

/// A named scope restricting which functions may trigger.
///
/// A context allows its own functions and, through
/// [`ContextTree::allows`](crate::ContextTree::allows), every function owned
/// by one of its ancestors.
pub struct Context {
    name: String,
    parent: Option<String>,
    functions: HashSet<Function>,
}

impl Context {
    pub(crate) fn new(name: &str, parent: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            parent: parent.map(str::to_string),
            functions: HashSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn add_function(&mut self, function: &Function) -> &mut Self {
        self.functions.insert(function.clone());
        self
    }

    pub fn remove_function(&mut self, function: &Function) -> bool {
        self.functions.remove(function)
    }

    /// Whether this context itself owns `function`, ignoring ancestors
    pub fn owns(&self, function: &Function) -> bool {
        self.functions.contains(function)
    }

    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.functions.iter()
    }
}
