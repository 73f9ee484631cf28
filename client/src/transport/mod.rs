pub use inner::{CommandSender, SendError};

mod inner {

    #[derive(Debug)]
    pub struct SendError;

    /// Fire-and-forget channel carrying encoded input commands to the Server.
    /// Delivery order is not guaranteed.
    pub trait CommandSender {
        /// Sends an encoded command payload
        fn send(&mut self, payload: &[u8]) -> Result<(), SendError>;
    }
}
