mod session_registry;
pub(crate) use session_registry::SessionChange;
pub use session_registry::{SessionInfo, SessionRegistry};
