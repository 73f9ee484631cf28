pub type FunctionNetId = u16;
pub type Sequence = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostType {
    Server,
    Client,
}

impl HostType {
    pub fn invert(self) -> Self {
        match self {
            HostType::Server => HostType::Client,
            HostType::Client => HostType::Server,
        }
    }
}

/// Identifies a connected client on the Server
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct SessionKey(u64);

impl SessionKey {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}

/// Cursor position at the moment an input transition happened
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

impl PointerPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
