use std::{fmt, sync::Arc};

/// An interned, case-sensitive name for an abstract input action, such as
/// "MoveUp" or "OpenInventory".
///
/// Equality, hashing and ordering all compare the name byte-for-byte.
/// Cloning is cheap.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Function {
    name: Arc<str>,
}

impl Function {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({})", self.name)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
