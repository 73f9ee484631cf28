use crate::function::{function_kinds::FunctionKinds, function_registry::FunctionRegistry};

pub mod error;
pub use error::ProtocolError;

// Protocol Plugin
pub trait ProtocolPlugin {
    fn build(&self, protocol: &mut Protocol);
}

// Protocol
/// The ordered list of every bound key function known to an application.
///
/// Client and Server must build their Protocol from the same sequence of
/// declarations, since network ids are assigned in declaration order.
#[derive(Default)]
pub struct Protocol {
    pub functions: FunctionRegistry,
    locked: bool,
}

impl Protocol {
    pub fn builder() -> Self {
        Self::default()
    }

    pub fn add_plugin<P: ProtocolPlugin>(&mut self, plugin: P) -> &mut Self {
        self.check_lock();
        plugin.build(self);
        self
    }

    pub fn add_function(&mut self, name: &str) -> &mut Self {
        self.check_lock();
        if name.is_empty() {
            panic!("Function names must not be empty!");
        }
        self.functions.declare(name);
        self
    }

    pub fn add_functions<'a, I: IntoIterator<Item = &'a str>>(&mut self, names: I) -> &mut Self {
        for name in names {
            self.add_function(name);
        }
        self
    }

    // Non-panicking builder methods

    pub fn try_add_plugin<P: ProtocolPlugin>(
        &mut self,
        plugin: P,
    ) -> Result<&mut Self, ProtocolError> {
        self.try_check_lock()?;
        plugin.build(self);
        Ok(self)
    }

    pub fn try_add_function(&mut self, name: &str) -> Result<&mut Self, ProtocolError> {
        self.try_check_lock()?;
        if name.is_empty() {
            return Err(ProtocolError::EmptyFunctionName);
        }
        self.functions.declare(name);
        Ok(self)
    }

    pub fn try_lock(&mut self) -> Result<(), ProtocolError> {
        self.try_check_lock()?;
        self.locked = true;
        Ok(())
    }

    pub fn lock(&mut self) {
        self.check_lock();
        self.locked = true;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Returns Err if protocol is locked
    pub fn try_check_lock(&self) -> Result<(), ProtocolError> {
        if self.locked {
            Err(ProtocolError::AlreadyLocked)
        } else {
            Ok(())
        }
    }

    /// Panics if protocol is locked
    pub fn check_lock(&self) {
        if self.locked {
            panic!("Protocol already locked!");
        }
    }

    /// Builds the network id map for every function declared so far
    pub fn function_kinds(&self) -> FunctionKinds {
        FunctionKinds::populate(&self.functions)
    }

    pub fn build(&mut self) -> Self {
        std::mem::take(self)
    }
}
