use std::{default::Default, path::PathBuf};

use hotwire_shared::Sequence;

/// Contains Config properties which will be used by the Client
#[derive(Clone)]
pub struct ClientConfig {
    /// Keybind file loaded at startup. A missing file is not an error.
    pub keybind_path: Option<PathBuf>,
    /// Whether transitions no client handler consumed are sent to the Server
    pub forward_unhandled: bool,
    /// Sequence number of the first command sent to the Server
    pub first_sequence: Sequence,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            keybind_path: None,
            forward_unhandled: true,
            first_sequence: 1,
        }
    }
}
