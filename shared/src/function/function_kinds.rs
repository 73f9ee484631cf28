use std::collections::HashMap;

use crate::{
    function::{
        error::FunctionKindsError, function::Function, function_registry::FunctionRegistry,
    },
    types::FunctionNetId,
};

/// Maps every declared [`Function`] to a small integer id for the wire
pub struct FunctionKinds {
    net_id_map: HashMap<Function, FunctionNetId>,
    functions: Vec<Function>,
}

impl FunctionKinds {
    /// Assigns ids `0..N-1` in declaration order
    pub fn populate(registry: &FunctionRegistry) -> Self {
        let mut net_id_map = HashMap::new();
        let mut functions = Vec::new();

        for function in registry.iter() {
            let Ok(net_id) = FunctionNetId::try_from(functions.len()) else {
                panic!(
                    "Cannot assign network ids to more than {} functions",
                    FunctionNetId::MAX as usize + 1
                );
            };
            net_id_map.insert(function.clone(), net_id);
            functions.push(function.clone());
        }

        Self {
            net_id_map,
            functions,
        }
    }

    pub fn net_id_of(&self, function: &Function) -> Option<FunctionNetId> {
        self.net_id_map.get(function).copied()
    }

    pub fn function_of(&self, net_id: FunctionNetId) -> Option<&Function> {
        self.functions.get(net_id as usize)
    }

    pub fn try_net_id_of(&self, function: &Function) -> Result<FunctionNetId, FunctionKindsError> {
        self.net_id_of(function)
            .ok_or_else(|| FunctionKindsError::FunctionNotFound {
                name: function.name().to_string(),
            })
    }

    pub fn try_function_of(&self, net_id: FunctionNetId) -> Result<&Function, FunctionKindsError> {
        self.function_of(net_id)
            .ok_or(FunctionKindsError::NetIdNotFound { net_id })
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
