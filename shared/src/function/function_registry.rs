use std::collections::HashMap;

use crate::function::function::Function;

/// Holds every declared [`Function`], in declaration order
#[derive(Default, Clone)]
pub struct FunctionRegistry {
    functions: Vec<Function>,
    by_name: HashMap<String, usize>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a function. Declaring a name twice returns the existing
    /// identity and keeps its original position.
    pub fn declare(&mut self, name: &str) -> Function {
        if let Some(index) = self.by_name.get(name) {
            return self.functions[*index].clone();
        }

        let function = Function::new(name);
        self.by_name.insert(name.to_string(), self.functions.len());
        self.functions.push(function.clone());
        function
    }

    pub fn get(&self, name: &str) -> Option<Function> {
        self.by_name
            .get(name)
            .map(|index| self.functions[*index].clone())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Function> {
        self.functions.iter()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
