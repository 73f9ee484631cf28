pub mod test_protocol;

pub use helpers::*;
pub use local_socket::{FailingSender, LocalCommandQueue, LocalCommandSender, LocalSocketPair};
pub use test_protocol::{protocol, FUNCTIONS};
